//! Windowed application runner for the platformer demo.
//!
//! Provides [`run_windowed`], which takes ownership of a [`Simulation`] and
//! drives it inside a winit event loop. Each `RedrawRequested` event
//! advances the simulation by the measured frame delta, builds the vertex
//! batch, and renders a frame.
//!
//! Controls: A/D or the arrow keys steer, W or ArrowUp jumps, C toggles
//! collider outlines, Escape closes the window.
//!
//! This module is feature-gated behind `renderer`.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{WindowAttributes, WindowId};

use super::renderer::SceneRenderer;
use crate::tick::{InputState, Simulation};

/// Run the simulation in a window.
///
/// Takes ownership of the simulation and blocks until the window is
/// closed. Each frame:
///
/// 1. Advances the simulation by the measured frame delta (clamped by the
///    simulation's tick config).
/// 2. Builds the vertex batch for the current state.
/// 3. Renders the frame.
///
/// # Arguments
///
/// * `sim` - The simulation to drive. Ownership is taken.
/// * `window_title` - Title for the OS window.
/// * `width` - Initial window width in physical pixels.
/// * `height` - Initial window height in physical pixels.
///
/// # Errors
///
/// Returns an error if the event loop cannot be created or if a fatal
/// rendering error occurs.
pub fn run_windowed(
    sim: Simulation,
    window_title: &str,
    width: u32,
    height: u32,
) -> Result<(), anyhow::Error> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(winit::event_loop::ControlFlow::Poll);

    let mut app = App {
        state: AppState::Pending {
            sim,
            title: window_title.to_owned(),
            width,
            height,
        },
        input: InputState::default(),
        show_colliders: true,
        last_frame: Instant::now(),
        init_failed: false,
    };

    event_loop.run_app(&mut app)?;

    if app.init_failed {
        return Err(anyhow::anyhow!(
            "failed to initialize windowed renderer (see logs for details)"
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Internal state machine
// ---------------------------------------------------------------------------

/// Internal state of the windowed app.
///
/// Winit 0.30 requires that window creation happens inside the
/// `ApplicationHandler::resumed` callback, so we use a two-phase state
/// machine: `Pending` (before window creation) and `Running` (window +
/// renderer are initialized).
enum AppState {
    /// Waiting for `resumed` to create the window and renderer.
    Pending {
        sim: Simulation,
        title: String,
        width: u32,
        height: u32,
    },
    /// Window and renderer are initialized; simulation is running.
    Running {
        sim: Simulation,
        renderer: SceneRenderer,
    },
    /// Temporary placeholder used during state transitions.
    Transitioning,
}

/// The winit application handler that drives the simulation with rendering.
struct App {
    state: AppState,
    /// Keys currently held, sampled into each advance.
    input: InputState,
    /// Whether collider outlines are drawn (C toggles).
    show_colliders: bool,
    /// Timestamp of the previous redraw, for the frame delta.
    last_frame: Instant,
    /// Set to `true` if initialization fails (window or renderer), so
    /// `run_windowed` can return an error after the event loop exits.
    init_failed: bool,
}

impl App {
    /// Track pressed/released movement keys; returns `false` if the key is
    /// not one the demo handles.
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) -> bool {
        let pressed = event.state == ElementState::Pressed;
        match event.physical_key {
            PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
                self.input.jump = pressed;
            }
            PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
                self.input.left = pressed;
            }
            PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
                self.input.right = pressed;
            }
            PhysicalKey::Code(KeyCode::KeyC) => {
                if pressed && !event.repeat {
                    self.show_colliders = !self.show_colliders;
                    tracing::debug!(show_colliders = self.show_colliders, "toggled outlines");
                }
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                if pressed {
                    event_loop.exit();
                }
            }
            _ => return false,
        }
        true
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only transition from Pending -> Running.
        let state = std::mem::replace(&mut self.state, AppState::Transitioning);
        match state {
            AppState::Pending {
                sim,
                title,
                width,
                height,
            } => {
                let window_attrs = WindowAttributes::default()
                    .with_title(title)
                    .with_inner_size(winit::dpi::PhysicalSize::new(width, height));

                match event_loop.create_window(window_attrs) {
                    Ok(window) => {
                        let window = Arc::new(window);
                        match pollster::block_on(SceneRenderer::new(window.clone())) {
                            Ok(renderer) => {
                                tracing::info!(width, height, "demo window created successfully");
                                // Kick off the first frame so the render loop starts
                                // even on backends that don't send an initial
                                // RedrawRequested event.
                                window.request_redraw();
                                self.last_frame = Instant::now();
                                self.state = AppState::Running { sim, renderer };
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to initialize renderer -- exiting");
                                self.init_failed = true;
                                self.state = AppState::Pending {
                                    sim,
                                    title: String::new(),
                                    width,
                                    height,
                                };
                                event_loop.exit();
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to create window -- exiting");
                        self.init_failed = true;
                        self.state = AppState::Pending {
                            sim,
                            title: String::new(),
                            width,
                            height,
                        };
                        event_loop.exit();
                    }
                }
            }
            AppState::Running { sim, renderer } => {
                // Already running; put state back.
                self.state = AppState::Running { sim, renderer };
            }
            AppState::Transitioning => {
                // Should not happen; no-op.
                tracing::warn!("resumed called during state transition");
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::KeyboardInput { ref event, .. } = event {
            if self.handle_key(event_loop, event) {
                return;
            }
        }

        match &mut self.state {
            AppState::Running { sim, renderer } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!(
                        ticks = sim.tick_count(),
                        "window close requested -- shutting down"
                    );
                    event_loop.exit();
                }
                WindowEvent::Resized(new_size) => {
                    tracing::debug!(
                        width = new_size.width,
                        height = new_size.height,
                        "window resized"
                    );
                    renderer.resize(new_size);
                }
                WindowEvent::RedrawRequested => {
                    let now = Instant::now();
                    let dt = now.duration_since(self.last_frame).as_secs_f32();
                    self.last_frame = now;

                    // Phase 1: advance the simulation by the frame delta.
                    sim.advance(dt, &self.input);

                    // Phase 2: build the vertex batch and render it.
                    match sim.render_batch(self.show_colliders) {
                        Ok(batch) => match renderer.render(&batch) {
                            Ok(()) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                // Reconfigure surface on loss.
                                let size = renderer.window().inner_size();
                                renderer.resize(size);
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                tracing::error!("GPU out of memory -- exiting");
                                event_loop.exit();
                            }
                            Err(e) => {
                                tracing::warn!(error = %e, "surface error during render");
                            }
                        },
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to build vertex batch");
                        }
                    }

                    // Request the next frame.
                    renderer.window().request_redraw();
                }
                _ => {}
            },
            _ => {
                // Not yet initialized; ignore window events.
            }
        }
    }
}
