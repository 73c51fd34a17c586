//! wgpu scene renderer.
//!
//! Draws the vertex batch the simulation produced each frame: one camera
//! uniform upload, one vertex buffer write, one render pass. The camera is
//! a fixed orthographic view over the level (no movement, no zoom), so the
//! projection-view transform only changes if the caller edits
//! [`SceneRenderer::camera`].

use std::sync::Arc;

use platbox_geom::LineBatch;
use wgpu::util::DeviceExt;

// ---------------------------------------------------------------------------
// InitError
// ---------------------------------------------------------------------------

/// Fatal renderer initialization failures. The demo has no degraded mode;
/// callers abort startup with a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// No GPU adapter satisfied the surface requirements.
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    /// The window surface could not be created.
    #[error("surface creation failed: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    /// The adapter refused the device request.
    #[error("device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

// ---------------------------------------------------------------------------
// Vertex
// ---------------------------------------------------------------------------

/// GPU-side vertex: 2D position plus RGBA color. Mirrors
/// [`platbox_geom::LineVertex`], with the Pod/Zeroable impls the upload
/// path needs.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}

impl Vertex {
    /// Vertex buffer layout for the shader.
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Camera2D
// ---------------------------------------------------------------------------

/// Fixed 2D orthographic camera over the level.
///
/// [`orthographic_matrix`](Self::orthographic_matrix) produces a
/// column-major 4x4 matrix mapping world pixels to clip space `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Width of the visible area in pixels.
    pub width: f32,
    /// Height of the visible area in pixels.
    pub height: f32,
    /// Camera center X in pixels.
    pub x: f32,
    /// Camera center Y in pixels.
    pub y: f32,
}

impl Camera2D {
    /// Column-major orthographic projection: `[left, right] -> [-1, 1]` on
    /// x and `[bottom, top] -> [-1, 1]` on y. Z is unused (2D).
    pub fn orthographic_matrix(&self) -> [f32; 16] {
        let left = self.x - self.width / 2.0;
        let right = self.x + self.width / 2.0;
        let bottom = self.y - self.height / 2.0;
        let top = self.y + self.height / 2.0;

        let sx = 2.0 / (right - left);
        let sy = 2.0 / (top - bottom);
        let tx = -(right + left) / (right - left);
        let ty = -(top + bottom) / (top - bottom);

        // Column-major layout:
        // col0     col1     col2     col3
        [
            sx, 0.0, 0.0, 0.0, // column 0
            0.0, sy, 0.0, 0.0, // column 1
            0.0, 0.0, 1.0, 0.0, // column 2
            tx, ty, 0.0, 1.0, // column 3
        ]
    }
}

impl Default for Camera2D {
    /// The level's fixed view: 200x200 pixels centered at (100, 100).
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            x: 100.0,
            y: 100.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Vertex buffer sizing
// ---------------------------------------------------------------------------

/// Maximum quads per frame (boxes + outlines + ray, with ample headroom).
const MAX_QUADS: usize = 1024;
const MAX_VERTICES: usize = MAX_QUADS * platbox_geom::VERTICES_PER_QUAD;

// ---------------------------------------------------------------------------
// SceneRenderer
// ---------------------------------------------------------------------------

/// Owns the wgpu surface, device, pipeline, and buffers for the demo
/// window. Does not own the event loop; the app runner drives it.
pub struct SceneRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    window: Arc<winit::window::Window>,
    /// The fixed orthographic camera.
    pub camera: Camera2D,
}

impl SceneRenderer {
    /// Initialize wgpu for the given window: surface, device, queue,
    /// pipeline, and pre-sized buffers.
    ///
    /// Async because adapter/device selection is async; drive with
    /// `pollster::block_on`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] if no suitable adapter or device is available
    /// or the surface cannot be created. All are fatal for the demo.
    pub async fn new(window: Arc<winit::window::Window>) -> Result<Self, InitError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(InitError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("platbox_renderer"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader_source = include_str!("shaders.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("platbox_shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let camera = Camera2D::default();
        let camera_matrix = camera.orthographic_matrix();
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera_uniform"),
            contents: bytemuck::cast_slice(&camera_matrix),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("camera_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bind_group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("platbox_pipeline_layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("platbox_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vertex_buffer"),
            size: (MAX_VERTICES * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            render_pipeline,
            vertex_buffer,
            camera_buffer,
            camera_bind_group,
            window,
            camera,
        })
    }

    /// Render one frame from the simulation's vertex batch.
    ///
    /// # Errors
    ///
    /// Returns a [`wgpu::SurfaceError`] if the surface cannot provide an
    /// output texture (window minimized, surface lost).
    pub fn render(&mut self, batch: &LineBatch) -> Result<(), wgpu::SurfaceError> {
        let camera_matrix = self.camera.orthographic_matrix();
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&camera_matrix));

        let vertices: Vec<Vertex> = batch
            .vertices()
            .iter()
            .take(MAX_VERTICES)
            .map(|v| Vertex {
                position: v.position,
                color: v.color,
            })
            .collect();

        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("platbox_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("platbox_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.2,
                            g: 0.2,
                            b: 0.2,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            let vertex_count = vertices.len() as u32;
            if vertex_count > 0 {
                render_pass.draw(0..vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Resize the surface when the window size changes. The new size must
    /// have non-zero width and height.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// The window this renderer presents to.
    pub fn window(&self) -> &winit::window::Window {
        &self.window
    }
}
