//! Demo 02 family: a triangle hardcoded in the vertex shader, drawn with
//! varying primitive topologies.
//!
//! All five topology entries share this module; the topology is the only
//! thing that changes between them, so it is the one pipeline parameter.
//! Three vertices are drawn regardless; a line list, for example, shows
//! up as a single segment plus a dangling vertex.

use anyhow::Result;

use trigon_engine::core::App;
use trigon_engine::device::{Gpu, GpuInit};
use trigon_engine::paint::Color;
use trigon_engine::render::{DrawSpec, PipelineSpec, build_render_pipeline, submit_frame};
use trigon_engine::window::{Runtime, RuntimeConfig};

use crate::geometry;

struct TriangleDemo {
    topology: wgpu::PrimitiveTopology,
    pipeline: Option<wgpu::RenderPipeline>,
}

impl App for TriangleDemo {
    fn setup(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let pipeline = build_render_pipeline(
            gpu.device(),
            gpu.surface_format(),
            &PipelineSpec {
                label: "topology demo",
                vertex_shader: include_str!("shaders/triangle.vert.wgsl"),
                fragment_shader: include_str!("shaders/red.frag.wgsl"),
                vertex_buffers: &[],
                topology: self.topology,
                bind_group_layouts: &[],
            },
        );

        self.pipeline = Some(pipeline);
        Ok(())
    }

    fn frame(&mut self, gpu: &Gpu<'_>) -> Result<(), wgpu::SurfaceError> {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return Ok(());
        };

        submit_frame(
            gpu,
            &DrawSpec {
                pipeline,
                vertex_buffers: &[],
                bind_group: None,
                vertex_count: geometry::VERTEX_COUNT,
                clear: Color::BLACK,
            },
        )
    }
}

pub fn run(slug: &str, topology: wgpu::PrimitiveTopology) -> Result<()> {
    Runtime::run(
        RuntimeConfig {
            title: format!("trigon /{slug}"),
            ..Default::default()
        },
        GpuInit::default(),
        TriangleDemo {
            topology,
            pipeline: None,
        },
    )
}
