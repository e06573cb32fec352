//! WebGPU surface and draw path for match frames

use glam::Vec2;

use super::scene::build_vertices;
use super::vertex::Vertex;
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::sim::Frame;

/// Vertices the buffer starts with; a full scoreboard stays well below this
const INITIAL_VERTEX_CAPACITY: usize = 1024;

/// GPU state for drawing frames onto the canvas
pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Vertices `vertex_buffer` can hold
    vertex_capacity: usize,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ping-pong-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);
        log::info!("Surface format {:?}, {}x{}", format, width, height);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = create_pipeline(&device, format);
        let vertex_buffer = create_vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
        })
    }

    /// Configure the surface again after it was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame snapshot
    pub fn render(&mut self, frame: &Frame) -> Result<(), wgpu::SurfaceError> {
        let vertices = ndc_vertices(frame);

        let needed = vertex_capacity_for(self.vertex_capacity, vertices.len());
        if needed != self.vertex_capacity {
            log::debug!("Growing vertex buffer to {} vertices", needed);
            self.vertex_buffer = create_vertex_buffer(&self.device, needed);
            self.vertex_capacity = needed;
        }
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.draw(0..vertices.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("flat_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("flat_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("flat_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("frame_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Buffer capacity needed for `len` vertices. Doubles so growth is rare.
fn vertex_capacity_for(current: usize, len: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

/// Frame triangles mapped to clip space
fn ndc_vertices(frame: &Frame) -> Vec<Vertex> {
    let size = Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT);
    build_vertices(frame)
        .into_iter()
        .map(|v| {
            let (x, y) = surface_to_ndc(size, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        })
        .collect()
}

/// Convert surface coordinates (origin top-left, y down) to NDC
pub fn surface_to_ndc(surface_size: Vec2, x: f32, y: f32) -> (f32, f32) {
    (
        x / surface_size.x * 2.0 - 1.0,
        1.0 - y / surface_size.y * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchState;

    #[test]
    fn test_surface_to_ndc_corners() {
        let size = Vec2::new(500.0, 700.0);
        assert_eq!(surface_to_ndc(size, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(surface_to_ndc(size, 500.0, 700.0), (1.0, -1.0));
        assert_eq!(surface_to_ndc(size, 250.0, 350.0), (0.0, 0.0));
    }

    #[test]
    fn test_vertex_capacity_grows_by_doubling() {
        assert_eq!(vertex_capacity_for(1024, 0), 1024);
        assert_eq!(vertex_capacity_for(1024, 1024), 1024);
        assert_eq!(vertex_capacity_for(1024, 1025), 2048);
        assert_eq!(vertex_capacity_for(1024, 5000), 8192);
    }

    #[test]
    fn test_frame_fits_initial_buffer() {
        let mut state = MatchState::default();
        state.scores.player = 6;
        state.scores.computer = 6;
        let vertices = ndc_vertices(&Frame::capture(&state));
        assert!(vertices.len() <= INITIAL_VERTEX_CAPACITY);
        for v in &vertices {
            assert!((-1.0..=1.0).contains(&v.position[0]));
            assert!((-1.0..=1.0).contains(&v.position[1]));
        }
    }
}
