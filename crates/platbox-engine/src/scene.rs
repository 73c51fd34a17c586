//! Declarative scene description and world population.
//!
//! [`SceneConfig`] describes the demo level -- one ground slab, a few
//! platforms, and the player -- entirely in pixel units. The defaults
//! reproduce the original level layout; a JSON file can override any part
//! of it.

use platbox_geom::Vec2;
use rapier2d::prelude::RigidBodyHandle;
use serde::{Deserialize, Serialize};

use crate::physics::PhysicsWorld;

/// Fill color for the ground slab and platforms.
pub const GROUND_COLOR: [f32; 4] = [0.77, 0.37, 0.06, 1.0];

/// Fill color for the player box.
pub const PLAYER_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];

/// Color of the visualized ground-probe ray.
pub const PROBE_RAY_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ---------------------------------------------------------------------------
// SceneConfig
// ---------------------------------------------------------------------------

/// An axis-aligned box placed in the scene. Center and full extents are in
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Box center in pixels.
    pub center: Vec2,
    /// Full width and height in pixels.
    pub size: Vec2,
}

/// Declarative description of the demo level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Vertical gravity in m/s^2 (negative is down).
    pub gravity_y: f32,
    /// The static ground slab.
    pub ground: BoxSpec,
    /// Static platforms the player can stand on.
    pub platforms: Vec<BoxSpec>,
    /// The dynamic, rotation-locked player box.
    pub player: BoxSpec,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity_y: -9.8,
            ground: BoxSpec {
                center: Vec2::new(100.0, 15.0),
                size: Vec2::new(190.0, 19.0),
            },
            platforms: vec![
                BoxSpec {
                    center: Vec2::new(50.0, 70.0),
                    size: Vec2::new(20.0, 20.0),
                },
                BoxSpec {
                    center: Vec2::new(100.0, 100.0),
                    size: Vec2::new(20.0, 20.0),
                },
                BoxSpec {
                    center: Vec2::new(150.0, 150.0),
                    size: Vec2::new(20.0, 20.0),
                },
            ],
            player: BoxSpec {
                center: Vec2::new(20.0, 50.0),
                size: Vec2::new(20.0, 20.0),
            },
        }
    }
}

impl SceneConfig {
    /// Parse a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ---------------------------------------------------------------------------
// Scene building
// ---------------------------------------------------------------------------

/// Handles to the bodies a built scene placed in the physics world.
#[derive(Debug, Clone)]
pub struct SceneHandles {
    /// The player's dynamic body.
    pub player: RigidBodyHandle,
    /// Ground and platform bodies, in spawn order (ground first).
    pub statics: Vec<RigidBodyHandle>,
}

/// Populate `physics` with the scene's bodies and return their handles.
pub fn build(config: &SceneConfig, physics: &mut PhysicsWorld) -> SceneHandles {
    let mut statics = Vec::with_capacity(1 + config.platforms.len());
    statics.push(physics.add_static_box(config.ground.center, config.ground.size));
    for platform in &config.platforms {
        statics.push(physics.add_static_box(platform.center, platform.size));
    }
    let player = physics.add_player_box(config.player.center, config.player.size);

    tracing::info!(
        bodies = physics.body_count(),
        platforms = config.platforms.len(),
        "scene built"
    );

    SceneHandles { player, statics }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_matches_level_layout() {
        let config = SceneConfig::default();
        assert_eq!(config.gravity_y, -9.8);
        assert_eq!(config.ground.center, Vec2::new(100.0, 15.0));
        assert_eq!(config.platforms.len(), 3);
        assert_eq!(config.player.center, Vec2::new(20.0, 50.0));
    }

    #[test]
    fn build_spawns_all_bodies() {
        let config = SceneConfig::default();
        let mut physics = PhysicsWorld::new(config.gravity_y);
        let handles = build(&config, &mut physics);

        // Ground + 3 platforms + player.
        assert_eq!(physics.body_count(), 5);
        assert_eq!(handles.statics.len(), 4);
        assert_eq!(
            physics.body_position_px(handles.player).unwrap(),
            Vec2::new(20.0, 50.0)
        );
    }

    #[test]
    fn from_json_overrides_only_named_fields() {
        let config = SceneConfig::from_json(r#"{ "gravity_y": -20.0 }"#).unwrap();
        assert_eq!(config.gravity_y, -20.0);
        // Everything else keeps the defaults.
        assert_eq!(config.platforms, SceneConfig::default().platforms);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SceneConfig::default();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(SceneConfig::from_json(&text).unwrap(), config);
    }
}
