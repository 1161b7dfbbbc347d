/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when
/// a concrete demo or platform requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is broadly supported.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference for the surface.
    ///
    /// If unsupported on the current surface, a supported mode is selected.
    /// The demos composit opaquely, so `Opaque` is the default preference.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Optional wgpu features, requested only when the adapter reports them.
    pub optional_features: wgpu::Features,

    /// Base limits requested from the device.
    ///
    /// `max_storage_buffer_binding_size` is always raised to the adapter's
    /// reported maximum on top of these.
    pub base_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            optional_features: wgpu::Features::TEXTURE_COMPRESSION_BC,
            base_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
