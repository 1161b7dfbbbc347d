//! Window runtime.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
