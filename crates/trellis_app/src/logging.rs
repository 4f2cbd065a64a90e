//! Logging initialisation
//!
//! Installs a `tracing_subscriber` fmt layer filtered by `RUST_LOG`, falling
//! back to the configured filter directives.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

/// Build the filter: `RUST_LOG` wins over the configured directives
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| AppError::Logging(format!("bad filter {:?}: {e}", config.filter))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
