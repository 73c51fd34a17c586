//! CPU-side vertex batching for filled quads and thick line segments.
//!
//! [`LineBatch`] is the pure half of the line renderer: it turns segments
//! and rectangles into triangle-list vertices in world (pixel) space. The
//! GPU half -- one buffer upload plus one draw per frame -- lives in the
//! engine's renderer, so everything in this module is testable without a
//! device.

use crate::segment::{GeometryError, Segment};
use crate::vec::Vec2;

/// Vertices emitted per quad: two triangles, CCW winding.
pub const VERTICES_PER_QUAD: usize = 6;

/// A single triangle-list vertex: 2D position plus RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineVertex {
    /// Position in world (pixel) coordinates.
    pub position: [f32; 2],
    /// RGBA color, each channel 0.0..1.0.
    pub color: [f32; 4],
}

/// Accumulates quad vertices for one frame.
///
/// Callers push filled rectangles and thick line segments; the renderer
/// uploads [`vertices`](Self::vertices) once and issues a single draw.
#[derive(Debug, Default)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment stretched to the given thickness.
    ///
    /// The segment's unit quad is pushed through its
    /// [`SegmentTransform`](crate::segment::SegmentTransform) and the
    /// resulting corners are emitted as two triangles.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NonPositiveThickness`] when `thickness <= 0`, and
    /// [`GeometryError::DegenerateSegment`] when the endpoints coincide.
    pub fn push_segment(
        &mut self,
        segment: &Segment,
        color: [f32; 4],
        thickness: f32,
    ) -> Result<(), GeometryError> {
        if thickness <= 0.0 {
            return Err(GeometryError::NonPositiveThickness(thickness));
        }
        let corners = segment.transform()?.quad_corners(thickness);
        self.push_quad(corners, color);
        Ok(())
    }

    /// Append an axis-aligned filled rectangle centered at `center` with
    /// full extents `size`.
    pub fn push_rect(&mut self, center: Vec2, size: Vec2, color: [f32; 4]) {
        let half_w = size.x / 2.0;
        let half_h = size.y / 2.0;
        self.push_quad(
            [
                Vec2::new(center.x - half_w, center.y - half_h),
                Vec2::new(center.x + half_w, center.y - half_h),
                Vec2::new(center.x + half_w, center.y + half_h),
                Vec2::new(center.x - half_w, center.y + half_h),
            ],
            color,
        );
    }

    /// Emit two CCW triangles from corners ordered bottom-left,
    /// bottom-right, top-right, top-left.
    fn push_quad(&mut self, [bl, br, tr, tl]: [Vec2; 4], color: [f32; 4]) {
        for corner in [bl, br, tr, bl, tr, tl] {
            self.vertices.push(LineVertex {
                position: [corner.x, corner.y],
                color,
            });
        }
    }

    /// The accumulated vertices.
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Number of accumulated vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of quads pushed so far.
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    /// Whether the batch has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Discard all vertices, keeping the allocation for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_segment_emits_one_quad() {
        let mut batch = LineBatch::new();
        batch
            .push_segment(
                &Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
                [1.0, 1.0, 1.0, 1.0],
                2.0,
            )
            .unwrap();
        assert_eq!(batch.vertex_count(), VERTICES_PER_QUAD);
        assert_eq!(batch.quad_count(), 1);
    }

    #[test]
    fn zero_thickness_is_rejected() {
        let mut batch = LineBatch::new();
        let err = batch
            .push_segment(
                &Segment::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
                [1.0; 4],
                0.0,
            )
            .unwrap_err();
        assert_eq!(err, GeometryError::NonPositiveThickness(0.0));
        assert!(batch.is_empty());
    }

    #[test]
    fn degenerate_segment_adds_no_vertices() {
        let mut batch = LineBatch::new();
        let result = batch.push_segment(
            &Segment::new(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)),
            [1.0; 4],
            1.0,
        );
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateSegment { .. })
        ));
        assert!(batch.is_empty());
    }

    #[test]
    fn rect_covers_its_extents() {
        let mut batch = LineBatch::new();
        batch.push_rect(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0), [0.5; 4]);
        assert_eq!(batch.vertex_count(), VERTICES_PER_QUAD);
        let xs: Vec<f32> = batch.vertices().iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), 8.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 12.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), 17.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 23.0);
    }

    #[test]
    fn quad_centroid_is_segment_midpoint() {
        let mut batch = LineBatch::new();
        let seg = Segment::new(Vec2::new(2.0, 3.0), Vec2::new(8.0, 11.0));
        batch.push_segment(&seg, [1.0; 4], 1.0).unwrap();

        let n = batch.vertex_count() as f32;
        let cx: f32 = batch.vertices().iter().map(|v| v.position[0]).sum::<f32>() / n;
        let cy: f32 = batch.vertices().iter().map(|v| v.position[1]).sum::<f32>() / n;
        assert!((cx - 5.0).abs() < 1e-4);
        assert!((cy - 7.0).abs() < 1e-4);
    }

    #[test]
    fn clear_keeps_batch_reusable() {
        let mut batch = LineBatch::new();
        batch.push_rect(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), [1.0; 4]);
        batch.clear();
        assert!(batch.is_empty());
        batch.push_rect(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0), [1.0; 4]);
        assert_eq!(batch.quad_count(), 1);
    }
}
