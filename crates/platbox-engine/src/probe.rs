//! Downward ray-cast ground detection.
//!
//! The probe casts a short vertical segment below the player -- from 5 px
//! under the center down to 15 px -- against the whole world, excluding the
//! player's own collider so a self-intersection can never count as ground.
//! Any hit within the segment means the player is standing on something.

use platbox_geom::{Segment, Vec2};
use rapier2d::prelude::RigidBodyHandle;

use crate::physics::{PhysicsWorld, RayHit};

/// Probe segment start: pixels below the player center.
pub const PROBE_START_OFFSET_PX: f32 = 5.0;

/// Probe segment end: pixels below the player center.
pub const PROBE_END_OFFSET_PX: f32 = 15.0;

/// The downward probe segment for a player centered at `player_px`, in
/// pixel space. Also used to visualize the ray.
pub fn probe_segment(player_px: Vec2) -> Segment {
    Segment::new(
        Vec2::new(player_px.x, player_px.y - PROBE_START_OFFSET_PX),
        Vec2::new(player_px.x, player_px.y - PROBE_END_OFFSET_PX),
    )
}

/// Cast the ground probe and return the nearest hit, if any.
///
/// `player` is excluded from the cast. A world with no other fixtures can
/// never produce a hit.
pub fn cast_ground_probe(
    world: &mut PhysicsWorld,
    player_px: Vec2,
    player: RigidBodyHandle,
) -> Option<RayHit> {
    let segment = probe_segment(player_px);
    // The fixed offsets differ, so the segment can never be degenerate.
    world
        .cast_segment(segment.from, segment.to, Some(player))
        .ok()
        .flatten()
}

/// Whether anything solid sits within the probe segment below the player.
pub fn is_grounded(world: &mut PhysicsWorld, player_px: Vec2, player: RigidBodyHandle) -> bool {
    cast_ground_probe(world, player_px, player).is_some()
}
