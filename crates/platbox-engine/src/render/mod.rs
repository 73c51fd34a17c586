//! wgpu renderer and winit app runner for the demo.
//!
//! Feature-gated behind `renderer`; without the feature this module
//! compiles to nothing and the engine stays headless. The renderer draws
//! whatever vertex batch the simulation produced -- filled boxes, collider
//! outlines, and the probe ray -- through one camera uniform and one draw
//! call per frame.

#[cfg(feature = "renderer")]
pub mod app;

#[cfg(feature = "renderer")]
pub mod renderer;

#[cfg(feature = "renderer")]
pub use app::run_windowed;

#[cfg(feature = "renderer")]
pub use renderer::{Camera2D, InitError, SceneRenderer};
