//! rapier2d physics world wrapper.
//!
//! [`PhysicsWorld`] owns the full rapier simulation state and exposes the
//! handful of operations the demo needs: spawning static and player boxes,
//! stepping by a clamped dt, reading and writing the player's kinematics,
//! and segment-restricted ray casts for the ground probe.
//!
//! Positions and sizes cross this boundary in screen pixels and are
//! converted to meters internally (see [`platbox_geom::units`]); linear
//! velocities stay in physics units (m/s) because the demo's tuning
//! constants come from the physics side.

use platbox_geom::units;
use platbox_geom::{GeometryError, Segment, Vec2};
use rapier2d::prelude::*;

// ---------------------------------------------------------------------------
// RayHit
// ---------------------------------------------------------------------------

/// Result of a segment-restricted ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Hit point in pixel space.
    pub point: Vec2,
    /// Surface normal at the hit, unit length, physics orientation.
    pub normal: Vec2,
    /// Parametric position of the hit along the cast segment, in [0, 1].
    pub fraction: f32,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Owns the rapier2d simulation state.
///
/// The world is exclusively owned by the simulation loop; body handles are
/// weak references into it and never outlive it.
pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a world with gravity `(0, gravity_y)` in m/s^2.
    pub fn new(gravity_y: f32) -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            gravity: vector![0.0, gravity_y],
            integration_params: IntegrationParameters::default(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Add a static box collider. Center and full extents are in pixels.
    pub fn add_static_box(&mut self, center_px: Vec2, size_px: Vec2) -> RigidBodyHandle {
        let center = units::point_to_meters(center_px);
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .build();
        let handle = self.rigid_body_set.insert(body);

        let collider = ColliderBuilder::cuboid(
            units::px_to_meters(size_px.x) / 2.0,
            units::px_to_meters(size_px.y) / 2.0,
        )
        .friction(1.0)
        .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        handle
    }

    /// Add the player: a dynamic box with rotation locked so it slides and
    /// jumps without tumbling. Center and full extents are in pixels.
    pub fn add_player_box(&mut self, center_px: Vec2, size_px: Vec2) -> RigidBodyHandle {
        let center = units::point_to_meters(center_px);
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center.x, center.y])
            .lock_rotations()
            .build();
        let handle = self.rigid_body_set.insert(body);

        let collider = ColliderBuilder::cuboid(
            units::px_to_meters(size_px.x) / 2.0,
            units::px_to_meters(size_px.y) / 2.0,
        )
        .friction(1.0)
        .density(1.0)
        .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        handle
    }

    /// Step the simulation by `dt` seconds. Callers are responsible for
    /// clamping `dt`; see [`crate::tick::Simulation::advance`].
    pub fn step(&mut self, dt: f32) {
        self.integration_params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None, // query structure is refreshed on demand in cast_segment
            &(),
            &(),
        );
    }

    /// Body translation in pixel space, or `None` for a stale handle.
    pub fn body_position_px(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let t = body.translation();
            units::point_to_px(Vec2::new(t.x, t.y))
        })
    }

    /// Linear velocity in m/s, or `None` for a stale handle.
    pub fn linear_velocity(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.rigid_body_set.get(handle).map(|body| {
            let v = body.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    /// Set a body's linear velocity in m/s, waking it.
    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, velocity: Vec2) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    /// Number of rigid bodies in the world.
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Cast a ray restricted to the segment `from_px..to_px` (pixel space)
    /// against every collider in the world, optionally excluding one body
    /// (used by the ground probe to skip the player's own collider).
    ///
    /// Uses the broad-phase query pipeline rather than iterating colliders,
    /// so the cost does not grow with a per-fixture scan.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateSegment`] when the endpoints coincide.
    pub fn cast_segment(
        &mut self,
        from_px: Vec2,
        to_px: Vec2,
        exclude: Option<RigidBodyHandle>,
    ) -> Result<Option<RayHit>, GeometryError> {
        let transform = Segment::new(from_px, to_px).transform()?;
        let origin = units::point_to_meters(from_px);
        let max_toi = units::px_to_meters(transform.length);
        let ray = Ray::new(
            point![origin.x, origin.y],
            vector![transform.angle.cos(), transform.angle.sin()],
        );

        let filter = match exclude {
            Some(handle) => QueryFilter::default().exclude_rigid_body(handle),
            None => QueryFilter::default(),
        };

        // Bodies may have moved since the last cast.
        self.query_pipeline.update(&self.collider_set);

        let hit = self
            .query_pipeline
            .cast_ray_and_get_normal(
                &self.rigid_body_set,
                &self.collider_set,
                &ray,
                max_toi,
                true, // solid
                filter,
            )
            .map(|(_, intersection)| {
                let p = ray.point_at(intersection.time_of_impact);
                RayHit {
                    point: units::point_to_px(Vec2::new(p.x, p.y)),
                    normal: Vec2::new(intersection.normal.x, intersection.normal.y),
                    fraction: intersection.time_of_impact / max_toi,
                }
            });
        Ok(hit)
    }

    // -- crate-internal access for the debug-draw walk ----------------------

    pub(crate) fn colliders(&self) -> &ColliderSet {
        &self.collider_set
    }

    pub(crate) fn bodies(&self) -> &RigidBodySet {
        &self.rigid_body_set
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
