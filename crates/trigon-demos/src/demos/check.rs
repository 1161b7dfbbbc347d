//! Demo 01: report whether a WebGPU-class adapter is available.
//!
//! Headless on purpose: the check needs no window, only the instance and
//! an adapter probe. Absence of an adapter is an error, never a silent
//! no-op.

use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let adapter = pollster::block_on(request_adapter())?;

    let info = adapter.get_info();
    log::info!(
        "GPU support confirmed: {} ({:?}, {:?})",
        info.name,
        info.backend,
        info.device_type
    );
    log::debug!("adapter features: {:?}", adapter.features());

    Ok(())
}

async fn request_adapter() -> Result<wgpu::Adapter> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .context("this system has no WebGPU-class adapter")
}
