//! Tests for the frame-driven simulation loop.
//!
//! All headless: the simulation is advanced with explicit deltas and key
//! states, and its state is checked through the public accessors and draw
//! extraction.

use platbox_engine::scene::{GROUND_COLOR, PLAYER_COLOR, SceneConfig};
use platbox_engine::tick::{InputState, Simulation, TickConfig};
use platbox_geom::Vec2;

const DT: f32 = 1.0 / 60.0;

fn default_sim() -> Simulation {
    Simulation::new(SceneConfig::default(), TickConfig::default())
}

/// Advance until the player comes to rest on the ground slab.
fn settled_sim() -> Simulation {
    let mut sim = default_sim();
    let input = InputState::default();
    for _ in 0..240 {
        sim.advance(DT, &input);
    }
    assert!(sim.grounded(), "player should have landed");
    sim
}

// ---------------------------------------------------------------------------
// Falling and landing
// ---------------------------------------------------------------------------

#[test]
fn player_falls_under_gravity() {
    let mut sim = default_sim();
    let start_y = sim.player_position_px().y;
    let input = InputState::default();

    for _ in 0..30 {
        sim.advance(DT, &input);
    }

    assert!(
        sim.player_position_px().y < start_y,
        "player should fall, got {:?}",
        sim.player_position_px()
    );
    assert_eq!(sim.tick_count(), 30);
}

#[test]
fn player_lands_on_ground_and_stays() {
    let sim = settled_sim();
    let pos = sim.player_position_px();

    // Ground top is at y = 24.5; a 20 px player rests with its center about
    // 10 px above that.
    assert!(
        (pos.y - 34.5).abs() < 1.0,
        "player should rest on the slab, got {pos:?}"
    );
}

#[test]
fn spawned_player_starts_airborne() {
    let sim = default_sim();
    assert!(!sim.grounded());
    assert_eq!(sim.tick_count(), 0);
}

// ---------------------------------------------------------------------------
// Input handling
// ---------------------------------------------------------------------------

#[test]
fn jump_while_airborne_is_ignored() {
    // Two identical sims, one holding jump from the first airborne tick:
    // until the player lands the jump key must change nothing.
    let mut sim_jump = default_sim();
    let mut sim_idle = default_sim();
    let jump = InputState {
        jump: true,
        ..InputState::default()
    };
    let idle = InputState::default();

    for _ in 0..12 {
        sim_jump.advance(DT, &jump);
        sim_idle.advance(DT, &idle);
        assert!(!sim_jump.grounded(), "player must still be airborne");
    }

    assert_eq!(sim_jump.player_position_px(), sim_idle.player_position_px());
}

#[test]
fn jump_while_grounded_launches_player() {
    let mut sim = settled_sim();
    let rest_y = sim.player_position_px().y;
    let jump = InputState {
        jump: true,
        ..InputState::default()
    };

    for _ in 0..10 {
        sim.advance(DT, &jump);
    }

    assert!(
        sim.player_position_px().y > rest_y + 5.0,
        "player should rise after jumping, got y={} (rest {rest_y})",
        sim.player_position_px().y
    );
}

#[test]
fn right_key_moves_player_right() {
    let mut sim = settled_sim();
    let start_x = sim.player_position_px().x;
    let right = InputState {
        right: true,
        ..InputState::default()
    };

    for _ in 0..60 {
        sim.advance(DT, &right);
    }

    assert!(
        sim.player_position_px().x > start_x + 10.0,
        "player should run right, got x={} (start {start_x})",
        sim.player_position_px().x
    );
}

#[test]
fn left_key_moves_player_left() {
    let mut sim = settled_sim();
    let start_x = sim.player_position_px().x;
    let left = InputState {
        left: true,
        ..InputState::default()
    };

    for _ in 0..10 {
        sim.advance(DT, &left);
    }

    assert!(
        sim.player_position_px().x < start_x - 2.0,
        "player should run left, got x={} (start {start_x})",
        sim.player_position_px().x
    );
}

// ---------------------------------------------------------------------------
// Delta clamping
// ---------------------------------------------------------------------------

#[test]
fn oversized_delta_is_clamped_to_max_dt() {
    // A 10 s frame gap must advance the simulation exactly as far as one
    // max_dt step would.
    let mut sim_long = default_sim();
    let mut sim_capped = default_sim();
    let input = InputState::default();

    sim_long.advance(10.0, &input);
    sim_capped.advance(DT, &input);

    assert_eq!(sim_long.player_position_px(), sim_capped.player_position_px());
}

#[test]
fn negative_delta_advances_nothing() {
    let mut sim = default_sim();
    let start = sim.player_position_px();
    sim.advance(-1.0, &InputState::default());
    assert_eq!(sim.player_position_px(), start);
}

#[test]
#[should_panic(expected = "max_dt must be positive")]
fn zero_max_dt_is_rejected() {
    let _ = Simulation::new(SceneConfig::default(), TickConfig { max_dt: 0.0 });
}

// ---------------------------------------------------------------------------
// Draw extraction
// ---------------------------------------------------------------------------

#[test]
fn draw_commands_cover_level_and_player() {
    let sim = default_sim();
    let commands = sim.draw_commands();

    // Ground + 3 platforms + player.
    assert_eq!(commands.len(), 5);
    assert_eq!(commands[0].center, Vec2::new(100.0, 15.0));
    assert_eq!(commands[0].color, GROUND_COLOR);
    let player = commands.last().unwrap();
    assert_eq!(player.color, PLAYER_COLOR);
    assert_eq!(player.center, sim.player_position_px());
}

#[test]
fn draw_commands_track_live_player_position() {
    let mut sim = default_sim();
    let input = InputState::default();
    for _ in 0..30 {
        sim.advance(DT, &input);
    }

    let player = *sim.draw_commands().last().unwrap();
    assert_eq!(player.center, sim.player_position_px());
    assert!(player.center.y < 50.0, "player should have fallen");
}

#[test]
fn render_batch_with_outlines() {
    let sim = default_sim();
    let batch = sim.render_batch(true).unwrap();

    // 5 cuboids x 4 outline edges + 5 filled boxes + 1 probe ray.
    assert_eq!(batch.quad_count(), 26);
}

#[test]
fn render_batch_without_outlines() {
    let sim = default_sim();
    let batch = sim.render_batch(false).unwrap();

    // 5 filled boxes + 1 probe ray.
    assert_eq!(batch.quad_count(), 6);
}

#[test]
fn probe_ray_follows_player() {
    let mut sim = default_sim();
    let input = InputState::default();
    for _ in 0..30 {
        sim.advance(DT, &input);
    }

    let pos = sim.player_position_px();
    let ray = sim.probe_segment_px();
    assert_eq!(ray.from, Vec2::new(pos.x, pos.y - 5.0));
    assert_eq!(ray.to, Vec2::new(pos.x, pos.y - 15.0));
}
