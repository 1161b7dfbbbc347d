/// Entry point name both shader stages must export.
///
/// Fixed contract between the pipeline builder and every WGSL asset.
pub const SHADER_ENTRY: &str = "main";

/// Configuration record for a render pipeline.
///
/// The demos vary only in shader pair, vertex-buffer layout, and topology,
/// so one builder covers all of them.
pub struct PipelineSpec<'a> {
    pub label: &'a str,

    /// WGSL source for the vertex stage (entry point [`SHADER_ENTRY`]).
    pub vertex_shader: &'a str,

    /// WGSL source for the fragment stage (entry point [`SHADER_ENTRY`]).
    pub fragment_shader: &'a str,

    /// Vertex-buffer layouts, one per buffer slot. Empty when the vertex
    /// shader hardcodes its positions.
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],

    /// How the fixed vertex sequence is interpreted.
    pub topology: wgpu::PrimitiveTopology,

    /// Bind group layouts, one per group index. Empty for bindless demos.
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
}

/// Builds a render pipeline from `spec`.
///
/// `format` must be the configured surface format; a mismatch renders
/// undefined output. Shader compilation errors surface through wgpu's
/// device error handling.
pub fn build_render_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    spec: &PipelineSpec<'_>,
) -> wgpu::RenderPipeline {
    let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(spec.label),
        source: wgpu::ShaderSource::Wgsl(spec.vertex_shader.into()),
    });
    let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(spec.label),
        source: wgpu::ShaderSource::Wgsl(spec.fragment_shader.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(spec.label),
        bind_group_layouts: spec.bind_group_layouts,
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(spec.label),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: Some(SHADER_ENTRY),
            compilation_options: Default::default(),
            buffers: spec.vertex_buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment_module,
            entry_point: Some(SHADER_ENTRY),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: spec.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
