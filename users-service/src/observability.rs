//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize the tracing subscriber
///
/// JSON output with an env-filter seeded from the configured log level;
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.service.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().json().with_env_filter(filter).init();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}

/// Shutdown tracing and flush any buffered output
pub fn shutdown_tracing() {
    tracing::info!("Tracing shutdown complete");
}
