//! Configuration validation.
//!
//! Serde handles syntax; this checks values serde cannot. All problems are
//! reported, not just the first.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::RalogConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logging.level is empty")]
    EmptyLevel,

    #[error("logging.level {directive:?} is not a valid filter: {reason}")]
    InvalidLevel { directive: String, reason: String },
}

/// Check a deserialized configuration.
pub fn validate_config(config: &RalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let level = config.logging.level.trim();

    if level.is_empty() {
        errors.push(ValidationError::EmptyLevel);
    } else if let Err(e) = EnvFilter::try_new(level) {
        errors.push(ValidationError::InvalidLevel {
            directive: level.to_string(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
