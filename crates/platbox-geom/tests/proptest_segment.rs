//! Property tests for segment transform derivation.

use platbox_geom::{Segment, Vec2};
use proptest::prelude::*;

/// Coordinates bounded so float error stays well below the assertion
/// tolerances.
fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0f32
}

proptest! {
    #[test]
    fn transform_length_matches_euclidean_distance(
        fx in coord(), fy in coord(), tx in coord(), ty in coord(),
    ) {
        let seg = Segment::new(Vec2::new(fx, fy), Vec2::new(tx, ty));
        prop_assume!(seg.from != seg.to);

        let t = seg.transform().unwrap();
        let expected = ((tx - fx).powi(2) + (ty - fy).powi(2)).sqrt();
        prop_assert!((t.length - expected).abs() < 1e-3);
    }

    #[test]
    fn transform_center_is_midpoint(
        fx in coord(), fy in coord(), tx in coord(), ty in coord(),
    ) {
        let seg = Segment::new(Vec2::new(fx, fy), Vec2::new(tx, ty));
        prop_assume!(seg.from != seg.to);

        let t = seg.transform().unwrap();
        prop_assert!((t.center.x - (fx + tx) / 2.0).abs() < 1e-3);
        prop_assert!((t.center.y - (fy + ty) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn angle_points_along_segment_direction(
        fx in coord(), fy in coord(), tx in coord(), ty in coord(),
    ) {
        let seg = Segment::new(Vec2::new(fx, fy), Vec2::new(tx, ty));
        prop_assume!(seg.length() > 1.0);

        let t = seg.transform().unwrap();
        // Rebuilding the direction from (angle, length) must land on `to`.
        let rebuilt_to = Vec2::new(
            fx + t.angle.cos() * t.length,
            fy + t.angle.sin() * t.length,
        );
        prop_assert!((rebuilt_to.x - tx).abs() < 1e-2);
        prop_assert!((rebuilt_to.y - ty).abs() < 1e-2);
    }
}
