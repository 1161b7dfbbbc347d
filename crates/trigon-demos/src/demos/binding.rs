//! Demo 03: dynamic resource binding.
//!
//! The triangle comes from a vertex buffer and its fill color from a
//! uniform buffer bound through a bind group. Two key handlers mutate the
//! CPU-side arrays, re-upload them, and redraw: `C` cycles the fill color
//! through a hex palette, `←`/`→` slide the triangle horizontally.

use std::num::NonZeroU64;

use anyhow::Result;

use trigon_engine::core::App;
use trigon_engine::device::{Gpu, GpuInit};
use trigon_engine::input::Key;
use trigon_engine::paint::Color;
use trigon_engine::render::{DrawSpec, PipelineSpec, build_render_pipeline, submit_frame};
use trigon_engine::window::{Runtime, RuntimeConfig};

use crate::geometry;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

struct BindingDemo {
    // CPU-side mirrors; the GPU copies go stale on every mutation until the
    // handler re-uploads them.
    vertex_data: [f32; 9],
    color_data: [f32; 4],

    offset: f32,
    palette_index: usize,

    scene: Option<Scene>,
}

struct Scene {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl BindingDemo {
    fn new() -> Result<Self> {
        let color = Color::from_hex(geometry::PALETTE[0])?;
        Ok(Self {
            vertex_data: geometry::TRIANGLE_XYZ,
            color_data: color.to_array(),
            offset: 0.0,
            palette_index: 0,
            scene: None,
        })
    }
}

impl App for BindingDemo {
    fn setup(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();

        // Buffers sized to the exact byte length of the CPU arrays.
        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("triangle vertices"),
            size: std::mem::size_of_val(&self.vertex_data) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let color_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fill color"),
            size: std::mem::size_of_val(&self.color_data) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("fill color bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(
                            std::mem::size_of::<[f32; 4]>() as u64
                        ),
                    },
                    count: None,
                }],
            });

        let pipeline = build_render_pipeline(
            device,
            gpu.surface_format(),
            &PipelineSpec {
                label: "binding demo",
                vertex_shader: include_str!("shaders/position.vert.wgsl"),
                fragment_shader: include_str!("shaders/color.frag.wgsl"),
                vertex_buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (3 * std::mem::size_of::<f32>()) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                bind_group_layouts: &[&bind_group_layout],
            },
        );

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fill color bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: color_buffer.as_entire_binding(),
            }],
        });

        // Initial CPU → GPU sync, ahead of the first draw.
        let queue = gpu.queue();
        queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&self.vertex_data));
        queue.write_buffer(&color_buffer, 0, bytemuck::cast_slice(&self.color_data));

        self.scene = Some(Scene {
            pipeline,
            vertex_buffer,
            color_buffer,
            bind_group,
        });
        Ok(())
    }

    fn frame(&mut self, gpu: &Gpu<'_>) -> Result<(), wgpu::SurfaceError> {
        let Some(scene) = self.scene.as_ref() else {
            return Ok(());
        };

        submit_frame(
            gpu,
            &DrawSpec {
                pipeline: &scene.pipeline,
                vertex_buffers: &[&scene.vertex_buffer],
                bind_group: Some(&scene.bind_group),
                vertex_count: geometry::VERTEX_COUNT,
                clear: Color::BLACK,
            },
        )
    }

    fn on_key(&mut self, key: Key, gpu: &Gpu<'_>) -> bool {
        let Some(scene) = self.scene.as_ref() else {
            return false;
        };

        match key {
            Key::C => {
                let color = match geometry::cycle_palette(&mut self.palette_index) {
                    Ok(c) => c,
                    Err(err) => {
                        log::warn!("palette entry rejected: {err:#}");
                        return false;
                    }
                };
                log::info!(
                    "color {} -> ({}, {}, {})",
                    geometry::PALETTE[self.palette_index],
                    color.r,
                    color.g,
                    color.b
                );

                self.color_data[0] = color.r;
                self.color_data[1] = color.g;
                self.color_data[2] = color.b;
                gpu.queue().write_buffer(
                    &scene.color_buffer,
                    0,
                    bytemuck::cast_slice(&self.color_data),
                );
                true
            }

            Key::ArrowLeft | Key::ArrowRight => {
                let delta = if key == Key::ArrowLeft {
                    -geometry::OFFSET_STEP
                } else {
                    geometry::OFFSET_STEP
                };
                self.offset = geometry::step_offset(self.offset, delta);
                log::info!("offset {}", self.offset);

                geometry::apply_x_offset(&mut self.vertex_data, 3, self.offset);
                gpu.queue().write_buffer(
                    &scene.vertex_buffer,
                    0,
                    bytemuck::cast_slice(&self.vertex_data),
                );
                true
            }

            _ => false,
        }
    }
}

pub fn run(slug: &str) -> Result<()> {
    Runtime::run(
        RuntimeConfig {
            title: format!("trigon /{slug}"),
            ..Default::default()
        },
        GpuInit::default(),
        BindingDemo::new()?,
    )
}
