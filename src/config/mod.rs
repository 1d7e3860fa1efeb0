//! Host wiring configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RalogConfig (validated, immutable)
//!     → observability::init (installs the tracing subscriber)
//! ```
//!
//! This only configures where the host sends records. Whether the shim logs
//! at all is decided at compile time (see `build`).

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{LogFormat, LoggingConfig, RalogConfig};
