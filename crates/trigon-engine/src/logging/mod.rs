use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `RUST_LOG` takes precedence; `default_filter` applies otherwise
/// (`env_logger` filter syntax, e.g. "info" or "trigon_engine=debug,wgpu=warn").
/// Idempotent; intended usage is early in `main`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        )
        .init();

        log::debug!("logging initialized");
    });
}
