//! Trigon engine crate.
//!
//! Owns the platform + GPU runtime pieces shared by the demo binaries:
//! device/surface acquisition, the window runtime, the pipeline builder and
//! draw routine, and small color/input/logging helpers.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
