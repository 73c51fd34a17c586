//! Platbox -- a small 2D platformer demo on rapier2d.
//!
//! The engine sets up a level of static boxes plus a player-controlled
//! dynamic body, steps the physics simulation with a clamped per-frame
//! delta, and detects ground contact with a short downward ray cast. The
//! optional `renderer` feature adds a wgpu/winit window that draws the
//! boxes, the collider outlines, and the probe ray.
//!
//! # Quick Start
//!
//! ```
//! use platbox_engine::prelude::*;
//!
//! let mut sim = Simulation::new(SceneConfig::default(), TickConfig::default());
//! assert!(!sim.grounded());
//!
//! // Let the player drop onto the ground slab.
//! let input = InputState::default();
//! for _ in 0..240 {
//!     sim.advance(1.0 / 60.0, &input);
//! }
//! assert!(sim.grounded());
//! ```

#![deny(unsafe_code)]

pub mod debug_draw;
pub mod physics;
pub mod probe;
pub mod render;
pub mod scene;
pub mod tick;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the geometry crate for convenience.
pub use platbox_geom;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common engine usage.
pub mod prelude {
    pub use crate::debug_draw::{
        draw_colliders, ColliderOutlines, DebugDraw, DebugDrawError, DebugDrawFlags,
    };
    pub use crate::physics::{PhysicsWorld, RayHit};
    pub use crate::probe::{cast_ground_probe, is_grounded, probe_segment};
    pub use crate::scene::{BoxSpec, SceneConfig, SceneHandles};
    pub use crate::tick::{DrawCommand, InputState, Simulation, TickConfig};

    pub use platbox_geom::{GeometryError, LineBatch, Segment, SegmentTransform, Vec2};
}
