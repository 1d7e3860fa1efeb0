//! Host subscriber setup.
//!
//! # Data Flow
//! ```text
//! TaggedLogger / ReleaseAwareLogHandler
//!     → HandlerSink → TracingHandler (tracing events)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! Library code never installs a subscriber; binaries call `init` once.

pub mod logging;

pub use logging::init;
