//! Geometry core for the platbox platformer demo.
//!
//! This crate holds the dependency-light math shared by the simulation and
//! the renderer: plain 2D vectors, the segment-to-transform derivation that
//! stretches a unit quad into a thick line, CPU-side vertex batching, and
//! the fixed pixel/meter unit conversions.
//!
//! Nothing here touches the GPU or the physics engine, so everything is
//! testable headless.

#![deny(unsafe_code)]

pub mod batch;
pub mod segment;
pub mod units;
pub mod vec;

pub use batch::{LineBatch, LineVertex, VERTICES_PER_QUAD};
pub use segment::{GeometryError, Segment, SegmentTransform};
pub use vec::Vec2;
