//! Pixel/meter unit conversions.
//!
//! The physics world simulates in meters while all rendering happens in
//! screen pixels. A single fixed scale factor converts between the two;
//! keeping the conversions here means no module hardcodes the ratio twice.

use crate::vec::Vec2;

/// Fixed scale factor between physics meters and screen pixels.
pub const PIXELS_PER_METER: f32 = 30.0;

/// Convert a scalar from pixels to meters.
pub fn px_to_meters(v: f32) -> f32 {
    v / PIXELS_PER_METER
}

/// Convert a scalar from meters to pixels.
pub fn meters_to_px(v: f32) -> f32 {
    v * PIXELS_PER_METER
}

/// Convert a point from pixel space to physics space.
pub fn point_to_meters(p: Vec2) -> Vec2 {
    Vec2::new(px_to_meters(p.x), px_to_meters(p.y))
}

/// Convert a point from physics space to pixel space.
pub fn point_to_px(p: Vec2) -> Vec2 {
    Vec2::new(meters_to_px(p.x), meters_to_px(p.y))
}
