//! Debug visualization of collision geometry.
//!
//! [`DebugDraw`] is the callback seam between the physics world and
//! whatever renders its colliders: one method per shape category, each with
//! a no-op default so adapters implement only the shapes they visualize.
//! [`ColliderOutlines`] is the demo's adapter -- it draws solid polygons as
//! closed edge loops into a [`LineBatch`] and leaves every other category
//! untouched. [`draw_colliders`] walks the world and emits one solid
//! polygon per cuboid collider, with world-space corners in pixels.

use platbox_geom::units;
use platbox_geom::{GeometryError, LineBatch, Segment, Vec2};
use rapier2d::prelude::*;

use crate::physics::PhysicsWorld;

/// Outline color for colliders attached to static bodies.
pub const STATIC_OUTLINE_COLOR: [f32; 4] = [0.5, 0.9, 0.5, 1.0];

/// Outline color for colliders attached to dynamic bodies.
pub const DYNAMIC_OUTLINE_COLOR: [f32; 4] = [0.9, 0.7, 0.7, 1.0];

/// Collider outline thickness in pixels.
pub const OUTLINE_WIDTH_PX: f32 = 4.0;

// ---------------------------------------------------------------------------
// DebugDrawError
// ---------------------------------------------------------------------------

/// Errors raised by debug-draw callbacks.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DebugDrawError {
    /// A solid polygon callback received fewer vertices than a polygon can
    /// have. This is a precondition violation, not something to skip.
    #[error("solid polygon needs at least 3 vertices, got {got}")]
    TooFewVertices {
        /// Number of vertices actually received.
        got: usize,
    },
    /// An edge could not be turned into line geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

// ---------------------------------------------------------------------------
// DebugDraw
// ---------------------------------------------------------------------------

/// Callback interface for visualizing collision geometry.
///
/// All coordinates are in pixel space. Every method defaults to a no-op.
pub trait DebugDraw {
    /// A bare line segment.
    fn draw_segment(
        &mut self,
        _from: Vec2,
        _to: Vec2,
        _color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A polygon outline.
    fn draw_polygon(&mut self, _vertices: &[Vec2], _color: [f32; 4]) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A filled polygon. Vertices are in order; the last edge wraps back to
    /// the first vertex.
    fn draw_solid_polygon(
        &mut self,
        _vertices: &[Vec2],
        _color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A circle outline.
    fn draw_circle(
        &mut self,
        _center: Vec2,
        _radius: f32,
        _color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A filled circle with an orientation axis.
    fn draw_solid_circle(
        &mut self,
        _center: Vec2,
        _radius: f32,
        _axis: Vec2,
        _color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A body transform (position plus rotation).
    fn draw_transform(&mut self, _position: Vec2, _angle: f32) -> Result<(), DebugDrawError> {
        Ok(())
    }

    /// A point marker.
    fn draw_point(
        &mut self,
        _point: Vec2,
        _size: f32,
        _color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DebugDrawFlags
// ---------------------------------------------------------------------------

/// Which collider overlays [`draw_colliders`] emits.
///
/// Only the shape category is implemented; AABB, joint, and center-of-mass
/// overlays are out of scope for this demo.
#[derive(Debug, Clone, Copy)]
pub struct DebugDrawFlags {
    /// Emit collider shape outlines.
    pub shapes: bool,
}

impl Default for DebugDrawFlags {
    fn default() -> Self {
        Self { shapes: true }
    }
}

// ---------------------------------------------------------------------------
// ColliderOutlines
// ---------------------------------------------------------------------------

/// Adapter that renders solid polygons as closed edge loops into a
/// [`LineBatch`]. All other shape categories keep their no-op defaults.
pub struct ColliderOutlines<'a> {
    batch: &'a mut LineBatch,
    line_width: f32,
}

impl<'a> ColliderOutlines<'a> {
    /// Wrap a batch; `line_width` is the outline thickness in pixels.
    pub fn new(batch: &'a mut LineBatch, line_width: f32) -> Self {
        Self { batch, line_width }
    }
}

impl DebugDraw for ColliderOutlines<'_> {
    fn draw_solid_polygon(
        &mut self,
        vertices: &[Vec2],
        color: [f32; 4],
    ) -> Result<(), DebugDrawError> {
        if vertices.len() < 3 {
            return Err(DebugDrawError::TooFewVertices {
                got: vertices.len(),
            });
        }
        for i in 0..vertices.len() {
            let edge = Segment::new(vertices[i], vertices[(i + 1) % vertices.len()]);
            self.batch.push_segment(&edge, color, self.line_width)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// draw_colliders
// ---------------------------------------------------------------------------

/// Walk the physics world and emit one solid-polygon callback per cuboid
/// collider, corners in world-space pixels, CCW from the bottom-left.
///
/// The demo only spawns cuboids; other shapes are skipped.
pub fn draw_colliders(
    world: &PhysicsWorld,
    flags: DebugDrawFlags,
    drawer: &mut dyn DebugDraw,
) -> Result<(), DebugDrawError> {
    if !flags.shapes {
        return Ok(());
    }

    for (_, collider) in world.colliders().iter() {
        let Some(cuboid) = collider.shape().as_cuboid() else {
            continue;
        };
        let he = cuboid.half_extents;
        let iso = collider.position();

        let local = [
            point![-he.x, -he.y],
            point![he.x, -he.y],
            point![he.x, he.y],
            point![-he.x, he.y],
        ];
        let mut corners = [Vec2::default(); 4];
        for (corner, p) in corners.iter_mut().zip(local) {
            let world_point = iso * p;
            *corner = units::point_to_px(Vec2::new(world_point.x, world_point.y));
        }

        let dynamic = collider
            .parent()
            .and_then(|handle| world.bodies().get(handle))
            .map(|body| body.is_dynamic())
            .unwrap_or(false);
        let color = if dynamic {
            DYNAMIC_OUTLINE_COLOR
        } else {
            STATIC_OUTLINE_COLOR
        };

        drawer.draw_solid_polygon(&corners, color)?;
    }

    Ok(())
}
