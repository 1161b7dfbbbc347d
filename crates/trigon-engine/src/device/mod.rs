//! GPU device layer.
//!
//! `Gpu` owns the wgpu core objects (instance/adapter/device/queue) and the
//! configured window surface. Everything above this module receives an
//! already-initialised context.

mod gpu;
mod init;
pub(crate) mod surface;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
