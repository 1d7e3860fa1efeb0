//! Release-aware tagged logging.
//!
//! Two thin wrappers over a host logging subsystem:
//!
//! - [`TaggedLogger`] prefixes a fixed tag and forwards to a [`LogSink`].
//! - [`ReleaseAwareLogHandler`] wraps another [`LogHandler`].
//!
//! Both do nothing unless the build is debug-like: `debug_assertions` on, or
//! the `always-log` feature enabled. The host is `tracing`, reached through
//! [`TracingHandler`] and the process default slot in [`host`].

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod host;
pub mod level;
pub mod mode;
pub mod observability;
pub mod release_aware;
pub mod sink;
pub mod tagged;

pub use config::RalogConfig;
pub use error::{FormatError, LogError, LogResult};
pub use handler::{LogContext, LogHandler, TracingHandler};
pub use level::LogType;
pub use mode::{BuildMode, Current, DebugLike, Release, DEBUG_LIKE};
pub use release_aware::ReleaseAwareLogHandler;
pub use sink::{HandlerSink, LogSink, NullSink};
pub use tagged::TaggedLogger;
