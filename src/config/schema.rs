//! Configuration schema definitions.
//!
//! All types derive Serde traits and default every field, so an empty file is
//! a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RalogConfig {
    /// Host subscriber settings.
    pub logging: LoggingConfig,
}

/// Output settings for the `tracing` subscriber behind the default handler.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "ra_logger=debug,warn".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Colored output.
    pub ansi: bool,

    /// Include the event target (module path).
    pub with_target: bool,

    /// Line layout.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            with_target: false,
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}
