use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{EngineConfig, LogFormat};
use crate::error::AppError;

pub const APP_NAME: &str = "stylewise";

/// Install the global subscriber. Logs go to stderr; stdout carries responses.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &EngineConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", config.log_level, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.log_format {
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize tracing: {}", e)))
}
