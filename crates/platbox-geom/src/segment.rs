//! Line segments and the quad transform derived from them.
//!
//! A [`Segment`] is a pair of distinct 2D points. [`Segment::transform`]
//! derives the translation, rotation, and scale that stretch a unit quad
//! into that segment. The line batch uses the transform to emit vertices;
//! the transform itself is exposed so its geometry can be validated without
//! any rendering in the picture.

use crate::vec::Vec2;

// ---------------------------------------------------------------------------
// GeometryError
// ---------------------------------------------------------------------------

/// Errors produced by segment geometry and line batching.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Both endpoints coincide, so the segment has no direction and its
    /// rotation is undefined.
    #[error("degenerate segment: both endpoints at ({x}, {y})")]
    DegenerateSegment {
        /// Shared X coordinate of both endpoints.
        x: f32,
        /// Shared Y coordinate of both endpoints.
        y: f32,
    },
    /// Line thickness must be strictly positive.
    #[error("non-positive line thickness: {0}")]
    NonPositiveThickness(f32),
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A line segment between two points in a shared coordinate space.
///
/// The endpoints must differ in at least one coordinate; a zero-length
/// segment is rejected by [`transform`](Self::transform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub from: Vec2,
    /// End point.
    pub to: Vec2,
}

impl Segment {
    /// Construct a segment between two points.
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }

    /// Derive the [`SegmentTransform`] for this segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] when both endpoints
    /// coincide.
    pub fn transform(&self) -> Result<SegmentTransform, GeometryError> {
        let d = self.to - self.from;
        if d.x == 0.0 && d.y == 0.0 {
            return Err(GeometryError::DegenerateSegment {
                x: self.from.x,
                y: self.from.y,
            });
        }
        Ok(SegmentTransform {
            center: Vec2::midpoint(self.from, self.to),
            // atan2 rather than atan(dy/dx): no quadrant ambiguity and no
            // division by zero for vertical segments.
            angle: d.y.atan2(d.x),
            length: d.length(),
        })
    }
}

// ---------------------------------------------------------------------------
// SegmentTransform
// ---------------------------------------------------------------------------

/// Translation, rotation, and scale that align the unit X axis with a
/// segment. Recomputed per call; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTransform {
    /// Midpoint of the segment endpoints.
    pub center: Vec2,
    /// Rotation about Z, in radians, taking the unit X axis onto the
    /// segment direction.
    pub angle: f32,
    /// Segment length; becomes the X scale of the quad.
    pub length: f32,
}

impl SegmentTransform {
    /// Column-major model matrix
    /// `translate(center) * rotate_z(angle) * scale(length, thickness, 1)`.
    pub fn model_matrix(&self, thickness: f32) -> [f32; 16] {
        let (sin, cos) = self.angle.sin_cos();
        // Column-major layout:
        // col0            col1              col2        col3
        [
            cos * self.length,
            sin * self.length,
            0.0,
            0.0, // column 0: rotated, length-scaled X axis
            -sin * thickness,
            cos * thickness,
            0.0,
            0.0, // column 1: rotated, thickness-scaled Y axis
            0.0,
            0.0,
            1.0,
            0.0, // column 2
            self.center.x,
            self.center.y,
            0.0,
            1.0, // column 3: translation
        ]
    }

    /// Corners of the unit quad spanning (-0.5,-0.5)..(0.5,0.5) pushed
    /// through [`model_matrix`](Self::model_matrix).
    ///
    /// Order: bottom-left, bottom-right, top-right, top-left (quad-local).
    pub fn quad_corners(&self, thickness: f32) -> [Vec2; 4] {
        let m = self.model_matrix(thickness);
        let xf = |x: f32, y: f32| Vec2::new(m[0] * x + m[4] * y + m[12], m[1] * x + m[5] * y + m[13]);
        [
            xf(-0.5, -0.5),
            xf(0.5, -0.5),
            xf(0.5, 0.5),
            xf(-0.5, 0.5),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn length_is_euclidean_distance() {
        let seg = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
        assert!((seg.length() - 5.0).abs() < EPS);
        assert!((seg.transform().unwrap().length - 5.0).abs() < EPS);
    }

    #[test]
    fn center_is_midpoint() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        let t = seg.transform().unwrap();
        assert_eq!(t.center, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn horizontal_segment_has_zero_angle() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(seg.transform().unwrap().angle, 0.0);
    }

    #[test]
    fn vertical_segment_has_right_angle() {
        // atan(dy/dx) would divide by zero here; atan2 must not.
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0));
        let t = seg.transform().unwrap();
        assert!((t.angle - std::f32::consts::FRAC_PI_2).abs() < EPS);
        assert!((t.length - 10.0).abs() < EPS);
    }

    #[test]
    fn leftward_segment_resolves_quadrant() {
        // atan(dy/dx) collapses this onto angle 0; atan2 gives pi.
        let seg = Segment::new(Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.0));
        let t = seg.transform().unwrap();
        assert!((t.angle.abs() - std::f32::consts::PI).abs() < EPS);
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let seg = Segment::new(Vec2::new(3.0, 7.0), Vec2::new(3.0, 7.0));
        assert_eq!(
            seg.transform(),
            Err(GeometryError::DegenerateSegment { x: 3.0, y: 7.0 })
        );
    }

    #[test]
    fn model_matrix_translation_column_is_center() {
        let seg = Segment::new(Vec2::new(2.0, 2.0), Vec2::new(6.0, 2.0));
        let m = seg.transform().unwrap().model_matrix(1.0);
        assert_eq!((m[12], m[13]), (4.0, 2.0));
    }

    #[test]
    fn horizontal_quad_corners_span_length_and_thickness() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        let corners = seg.transform().unwrap().quad_corners(2.0);
        assert_eq!(corners[0], Vec2::new(0.0, -1.0)); // bottom-left
        assert_eq!(corners[1], Vec2::new(10.0, -1.0)); // bottom-right
        assert_eq!(corners[2], Vec2::new(10.0, 1.0)); // top-right
        assert_eq!(corners[3], Vec2::new(0.0, 1.0)); // top-left
    }

    #[test]
    fn vertical_quad_corners_rotate_thickness_onto_x() {
        let seg = Segment::new(Vec2::new(5.0, 0.0), Vec2::new(5.0, 8.0));
        let corners = seg.transform().unwrap().quad_corners(2.0);
        for c in corners {
            assert!((c.x - 5.0).abs() <= 1.0 + EPS, "x off the 2px band: {c:?}");
            assert!(c.y >= -EPS && c.y <= 8.0 + EPS, "y outside segment: {c:?}");
        }
    }
}
