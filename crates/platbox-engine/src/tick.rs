//! Frame-driven simulation loop.
//!
//! [`Simulation`] is the explicit context the whole demo runs through: it
//! owns the physics world, the scene handles, and the grounded flag -- no
//! global mutable state. Each [`advance`](Simulation::advance):
//!
//! 1. Applies the sampled key state to the player's velocity (jumping only
//!    while grounded).
//! 2. Steps physics by the frame delta, clamped to
//!    [`TickConfig::max_dt`] so a long frame gap cannot destabilize the
//!    solver.
//! 3. Re-evaluates the ground probe at the player's new position.
//!
//! Rendering reads the simulation through
//! [`draw_commands`](Simulation::draw_commands) and
//! [`render_batch`](Simulation::render_batch), both headless-testable.

use platbox_geom::{LineBatch, Segment, Vec2};

use crate::debug_draw::{self, ColliderOutlines, DebugDrawError, DebugDrawFlags, OUTLINE_WIDTH_PX};
use crate::physics::PhysicsWorld;
use crate::probe;
use crate::scene::{self, SceneConfig, SceneHandles, GROUND_COLOR, PLAYER_COLOR, PROBE_RAY_COLOR};

/// Horizontal run speed in m/s.
const RUN_SPEED: f32 = 2.0;

/// Jump launch speed in m/s.
const JUMP_SPEED: f32 = 5.0;

/// Thickness of the visualized probe ray, in pixels.
const PROBE_RAY_WIDTH_PX: f32 = 1.0;

// ---------------------------------------------------------------------------
// TickConfig
// ---------------------------------------------------------------------------

/// Configuration for the per-frame step.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Upper bound on the physics time step, in seconds. Frame deltas above
    /// this are clamped before stepping.
    pub max_dt: f32,
}

impl Default for TickConfig {
    /// Defaults to a 60 Hz cap.
    fn default() -> Self {
        Self { max_dt: 1.0 / 60.0 }
    }
}

// ---------------------------------------------------------------------------
// InputState
// ---------------------------------------------------------------------------

/// Keys held down when a frame is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Move left (A / ArrowLeft).
    pub left: bool,
    /// Move right (D / ArrowRight).
    pub right: bool,
    /// Jump (W / ArrowUp).
    pub jump: bool,
}

// ---------------------------------------------------------------------------
// DrawCommand
// ---------------------------------------------------------------------------

/// A filled box to draw, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    /// Box center in pixels.
    pub center: Vec2,
    /// Full extents in pixels.
    pub size: Vec2,
    /// RGBA fill color.
    pub color: [f32; 4],
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// The demo simulation: physics world, scene handles, and per-frame state.
pub struct Simulation {
    physics: PhysicsWorld,
    config: SceneConfig,
    tick_config: TickConfig,
    handles: SceneHandles,
    grounded: bool,
    tick_counter: u64,
}

impl Simulation {
    /// Build the physics world from `config` and wrap it in a simulation.
    ///
    /// # Panics
    ///
    /// Panics if `tick_config.max_dt` is not positive and finite.
    pub fn new(config: SceneConfig, tick_config: TickConfig) -> Self {
        assert!(
            tick_config.max_dt > 0.0 && tick_config.max_dt.is_finite(),
            "max_dt must be positive and finite, got {}",
            tick_config.max_dt
        );

        let mut physics = PhysicsWorld::new(config.gravity_y);
        let handles = scene::build(&config, &mut physics);
        Self {
            physics,
            config,
            tick_config,
            handles,
            grounded: false,
            tick_counter: 0,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `dt` is the wall-clock frame delta in seconds; it is clamped to
    /// `[0, max_dt]` before stepping.
    pub fn advance(&mut self, dt: f32, input: &InputState) {
        let clamped = dt.clamp(0.0, self.tick_config.max_dt);

        self.apply_input(input);
        self.physics.step(clamped);

        let was_grounded = self.grounded;
        let player_px = self.player_position_px();
        self.grounded = probe::is_grounded(&mut self.physics, player_px, self.handles.player);
        if was_grounded != self.grounded {
            tracing::debug!(
                grounded = self.grounded,
                tick = self.tick_counter,
                x = player_px.x,
                y = player_px.y,
                "ground contact changed"
            );
        }

        self.tick_counter += 1;
    }

    /// Apply the sampled key state to the player's velocity.
    ///
    /// Mirrors the original's else-if key chain: jump wins over steering,
    /// and unpressed axes leave the current velocity alone.
    fn apply_input(&mut self, input: &InputState) {
        let Some(mut velocity) = self.physics.linear_velocity(self.handles.player) else {
            return;
        };

        if input.jump {
            if !self.grounded {
                return;
            }
            velocity.y = JUMP_SPEED;
        } else if input.left {
            velocity.x = -RUN_SPEED;
        } else if input.right {
            velocity.x = RUN_SPEED;
        } else {
            return;
        }

        self.physics.set_linear_velocity(self.handles.player, velocity);
    }

    // -- accessors ----------------------------------------------------------

    /// Whether the ground probe found support under the player after the
    /// last advance.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Number of frames advanced so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_counter
    }

    /// The player's center position in pixels.
    pub fn player_position_px(&self) -> Vec2 {
        self.physics
            .body_position_px(self.handles.player)
            .unwrap_or(self.config.player.center)
    }

    /// The physics world (read-only; the simulation owns it).
    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    /// The scene configuration this simulation was built from.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The current probe ray, in pixel space, for visualization.
    pub fn probe_segment_px(&self) -> Segment {
        probe::probe_segment(self.player_position_px())
    }

    // -- draw extraction ----------------------------------------------------

    /// Extract the filled boxes to draw this frame: ground and platforms at
    /// their configured positions, the player at its live physics position.
    ///
    /// Pure read of simulation state; no GPU involved.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(2 + self.config.platforms.len());
        commands.push(DrawCommand {
            center: self.config.ground.center,
            size: self.config.ground.size,
            color: GROUND_COLOR,
        });
        for platform in &self.config.platforms {
            commands.push(DrawCommand {
                center: platform.center,
                size: platform.size,
                color: GROUND_COLOR,
            });
        }
        commands.push(DrawCommand {
            center: self.player_position_px(),
            size: self.config.player.size,
            color: PLAYER_COLOR,
        });
        commands
    }

    /// Build the full vertex batch for one frame: collider outlines (when
    /// `show_colliders` is set), the filled boxes, and the probe ray.
    pub fn render_batch(&self, show_colliders: bool) -> Result<LineBatch, DebugDrawError> {
        let mut batch = LineBatch::new();

        if show_colliders {
            let mut outlines = ColliderOutlines::new(&mut batch, OUTLINE_WIDTH_PX);
            debug_draw::draw_colliders(&self.physics, DebugDrawFlags::default(), &mut outlines)?;
        }

        for command in self.draw_commands() {
            batch.push_rect(command.center, command.size, command.color);
        }

        batch.push_segment(&self.probe_segment_px(), PROBE_RAY_COLOR, PROBE_RAY_WIDTH_PX)?;

        Ok(batch)
    }
}
