use anyhow::Result;

use crate::device::Gpu;
use crate::input::Key;

/// Application contract implemented by each windowed demo.
///
/// The runtime drives the one-directional control flow: `setup` runs once
/// after the window and GPU context exist, `frame` runs on the initial
/// redraw and again whenever `on_key` requests it. Nothing redraws
/// continuously.
pub trait App {
    /// Called once after GPU initialization. Builds pipelines and buffers.
    ///
    /// Errors here are terminal for the run and propagate out of
    /// `Runtime::run`.
    fn setup(&mut self, gpu: &Gpu<'_>) -> Result<()>;

    /// Records and submits one frame.
    ///
    /// Surface errors are returned to the runtime, which reconfigures,
    /// skips, or exits depending on their severity.
    fn frame(&mut self, gpu: &Gpu<'_>) -> std::result::Result<(), wgpu::SurfaceError>;

    /// Called on a key press. Returns `true` to request a redraw.
    fn on_key(&mut self, key: Key, gpu: &Gpu<'_>) -> bool {
        let _ = (key, gpu);
        false
    }
}
