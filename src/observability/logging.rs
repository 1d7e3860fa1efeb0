//! Structured logging.
//!
//! Builds the `tracing-subscriber` registry from `LoggingConfig`. `RUST_LOG`
//! overrides the configured level when present.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, LogFormat, LoggingConfig};

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    select_filter(from_env.as_deref(), config)
}

/// A usable `env` directive wins; otherwise `config.level` must parse.
fn select_filter(env: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    let env = env.filter(|directive| !directive.trim().is_empty());
    if let Some(filter) = env.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(config.level.trim()).map_err(|e| ConfigError::Subscriber(e.to_string()))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(config.ansi)
                    .with_target(config.with_target)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.ansi)
                    .with_target(config.with_target)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::Subscriber(e.to_string()))?;

    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        "log subscriber installed"
    );
    Ok(())
}
