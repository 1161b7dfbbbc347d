use crate::device::Gpu;
use crate::paint::Color;

/// Everything one frame submission needs.
///
/// Vertex buffers bind at slots `0..n` in order; the bind group, when
/// present, binds at group index 0.
pub struct DrawSpec<'a> {
    pub pipeline: &'a wgpu::RenderPipeline,
    pub vertex_buffers: &'a [&'a wgpu::Buffer],
    pub bind_group: Option<&'a wgpu::BindGroup>,
    pub vertex_count: u32,
    pub clear: Color,
}

/// Records and submits one frame: a single render pass that clears the
/// surface, binds whatever `spec` declares, and issues one draw call for
/// `spec.vertex_count` vertices.
///
/// Synchronous from the caller's perspective; presentation happens when the
/// submitted frame's surface texture drops. Buffer writes issued before this
/// call are ordered ahead of the draw on the queue.
pub fn submit_frame(gpu: &Gpu<'_>, spec: &DrawSpec<'_>) -> Result<(), wgpu::SurfaceError> {
    let mut frame = gpu.begin_frame()?;

    // Pass scope: rpass must drop before the encoder moves into submit().
    {
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon draw pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(spec.clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(spec.pipeline);

        for (slot, buffer) in spec.vertex_buffers.iter().enumerate() {
            rpass.set_vertex_buffer(slot as u32, buffer.slice(..));
        }

        if let Some(bind_group) = spec.bind_group {
            rpass.set_bind_group(0, bind_group, &[]);
        }

        rpass.draw(0..spec.vertex_count, 0..1);
    }

    gpu.submit(frame);
    Ok(())
}
