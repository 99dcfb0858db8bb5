use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a compact fmt subscriber.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Writes to stderr so command output on stdout stays parseable
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    init_logging_with("info");
}

pub fn init_logging_with(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
