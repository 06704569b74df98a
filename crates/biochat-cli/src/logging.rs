//! Logging bootstrap for the command-line surface.

use tracing_subscriber::EnvFilter;

use biochat_core::config::LogConfig;

/// Initialize the tracing subscriber.
///
/// Respects the `BIOCHAT_LOG` environment variable for filtering and falls
/// back to the configured level. Logs go to stderr; stdout carries the
/// chat transcript.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_env("BIOCHAT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
