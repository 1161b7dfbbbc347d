//! Demos 03attributes-01/-02: finer-grained vertex attribute plumbing.
//!
//! The shader always receives xy at location 0 and z at location 1; what
//! varies is the buffer side. `SplitAttributes` carves both attributes out
//! of one interleaved buffer via offsets, `SplitBuffers` feeds them from
//! two separate buffers bound at slots 0 and 1. Interaction matches
//! demo 03.

use std::mem::size_of;
use std::num::NonZeroU64;

use anyhow::Result;

use trigon_engine::core::App;
use trigon_engine::device::{Gpu, GpuInit};
use trigon_engine::input::Key;
use trigon_engine::paint::Color;
use trigon_engine::render::{DrawSpec, PipelineSpec, build_render_pipeline, submit_frame};
use trigon_engine::window::{Runtime, RuntimeConfig};

use crate::geometry;

/// How the xy/z attributes reach the pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Layout {
    /// One interleaved buffer; xy and z split by attribute offsets.
    SplitAttributes,
    /// Two buffers: xy pairs at slot 0, z scalars at slot 1.
    SplitBuffers,
}

const PACKED_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32];
const XY_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const Z_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32];

/// CPU-side mirror of the position data, shaped per layout.
enum VertexData {
    Packed([f32; 9]),
    Split { xy: [f32; 6], z: [f32; 3] },
}

impl VertexData {
    fn new(layout: Layout) -> Self {
        match layout {
            Layout::SplitAttributes => VertexData::Packed(geometry::TRIANGLE_XYZ),
            Layout::SplitBuffers => VertexData::Split {
                xy: geometry::TRIANGLE_XY,
                z: geometry::TRIANGLE_Z,
            },
        }
    }

    /// Mutates the x-coordinates in whichever array carries them.
    fn apply_offset(&mut self, offset: f32) {
        match self {
            VertexData::Packed(v) => geometry::apply_x_offset(v, 3, offset),
            VertexData::Split { xy, .. } => geometry::apply_x_offset(xy, 2, offset),
        }
    }

    /// Bytes of the buffer the offset handler touches (slot 0).
    fn slot0_bytes(&self) -> &[u8] {
        match self {
            VertexData::Packed(v) => bytemuck::cast_slice(v),
            VertexData::Split { xy, .. } => bytemuck::cast_slice(xy),
        }
    }

    fn layouts(&self) -> Vec<wgpu::VertexBufferLayout<'static>> {
        match self {
            VertexData::Packed(_) => vec![wgpu::VertexBufferLayout {
                array_stride: (3 * size_of::<f32>()) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &PACKED_ATTRS,
            }],
            VertexData::Split { .. } => vec![
                wgpu::VertexBufferLayout {
                    array_stride: (2 * size_of::<f32>()) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &XY_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: size_of::<f32>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &Z_ATTRS,
                },
            ],
        }
    }
}

struct AttributesDemo {
    vertices: VertexData,
    color_data: [f32; 4],

    offset: f32,
    palette_index: usize,

    scene: Option<Scene>,
}

struct Scene {
    pipeline: wgpu::RenderPipeline,
    /// One buffer per vertex slot, in slot order.
    vertex_buffers: Vec<wgpu::Buffer>,
    color_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl AttributesDemo {
    fn new(layout: Layout) -> Result<Self> {
        let color = Color::from_hex(geometry::PALETTE[0])?;
        Ok(Self {
            vertices: VertexData::new(layout),
            color_data: color.to_array(),
            offset: 0.0,
            palette_index: 0,
            scene: None,
        })
    }
}

impl App for AttributesDemo {
    fn setup(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let device = gpu.device();
        let queue = gpu.queue();

        let make_vertex_buffer = |label, bytes: &[u8]| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: bytes.len() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            queue.write_buffer(&buffer, 0, bytes);
            buffer
        };

        let vertex_buffers = match &self.vertices {
            VertexData::Packed(v) => {
                vec![make_vertex_buffer("packed positions", bytemuck::cast_slice(v))]
            }
            VertexData::Split { xy, z } => vec![
                make_vertex_buffer("xy positions", bytemuck::cast_slice(xy)),
                make_vertex_buffer("z positions", bytemuck::cast_slice(z)),
            ],
        };

        let color_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fill color"),
            size: std::mem::size_of_val(&self.color_data) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&color_buffer, 0, bytemuck::cast_slice(&self.color_data));

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("fill color bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(size_of::<[f32; 4]>() as u64),
                    },
                    count: None,
                }],
            });

        let pipeline = build_render_pipeline(
            device,
            gpu.surface_format(),
            &PipelineSpec {
                label: "attributes demo",
                vertex_shader: include_str!("shaders/split.vert.wgsl"),
                fragment_shader: include_str!("shaders/color.frag.wgsl"),
                vertex_buffers: &self.vertices.layouts(),
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

        self.scene = Some(Scene {
            pipeline,
            vertex_buffers,
            color_buffer,
            bind_group,
        });
        Ok(())
    }

    fn frame(&mut self, gpu: &Gpu<'_>) -> Result<(), wgpu::SurfaceError> {
        let Some(scene) = self.scene.as_ref() else {
            return Ok(());
        };

        let slots: Vec<&wgpu::Buffer> = scene.vertex_buffers.iter().collect();
        submit_frame(
            gpu,
            &DrawSpec {
                pipeline: &scene.pipeline,
                vertex_buffers: &slots,
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

                // Only the slot-0 buffer carries x-coordinates; z never moves.
                self.vertices.apply_offset(self.offset);
                gpu.queue().write_buffer(
                    &scene.vertex_buffers[0],
                    0,
                    self.vertices.slot0_bytes(),
                );
                true
            }

            _ => false,
        }
    }
}

pub fn run(slug: &str, layout: Layout) -> Result<()> {
    Runtime::run(
        RuntimeConfig {
            title: format!("trigon /{slug}"),
            ..Default::default()
        },
        GpuInit::default(),
        AttributesDemo::new(layout)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout_splits_xy_and_z_by_offset() {
        assert_eq!(PACKED_ATTRS[0].shader_location, 0);
        assert_eq!(PACKED_ATTRS[0].offset, 0);
        assert_eq!(PACKED_ATTRS[0].format, wgpu::VertexFormat::Float32x2);

        assert_eq!(PACKED_ATTRS[1].shader_location, 1);
        assert_eq!(PACKED_ATTRS[1].offset, 8);
        assert_eq!(PACKED_ATTRS[1].format, wgpu::VertexFormat::Float32);
    }

    #[test]
    fn packed_layout_strides_one_vertex() {
        let data = VertexData::new(Layout::SplitAttributes);
        let layouts = data.layouts();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].array_stride, 12);
    }

    #[test]
    fn split_layout_uses_two_slots() {
        let data = VertexData::new(Layout::SplitBuffers);
        let layouts = data.layouts();
        assert_eq!(layouts.len(), 2);
        assert_eq!(layouts[0].array_stride, 8);
        assert_eq!(layouts[1].array_stride, 4);
        assert_eq!(layouts[1].attributes[0].shader_location, 1);
    }

    #[test]
    fn offset_mutates_only_slot0_bytes() {
        let mut data = VertexData::new(Layout::SplitBuffers);
        data.apply_offset(0.2);

        let VertexData::Split { xy, z } = &data else {
            panic!("expected split data");
        };
        assert!((xy[0] - 0.2).abs() < 1e-6);
        assert_eq!(*z, geometry::TRIANGLE_Z);
    }

    #[test]
    fn slot0_bytes_match_cpu_array_length() {
        let packed = VertexData::new(Layout::SplitAttributes);
        assert_eq!(packed.slot0_bytes().len(), 36);

        let split = VertexData::new(Layout::SplitBuffers);
        assert_eq!(split.slot0_bytes().len(), 24);
    }
}
