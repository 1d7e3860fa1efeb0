//! Log sinks.
//!
//! A sink is what a `TaggedLogger` writes to. It has a structured entry point
//! taking the tag as its own parameter and a formatted entry point taking a
//! composite format string.

use std::fmt::Display;
use std::sync::Arc;

use crate::error::LogResult;
use crate::handler::LogHandler;
use crate::level::LogType;

/// Host sink capability.
pub trait LogSink: Send + Sync {
    /// Structured entry point.
    fn log(&self, level: LogType, tag: &str, message: &dyn Display) -> LogResult<()>;

    /// Formatted entry point.
    fn log_format(&self, level: LogType, format: &str, args: &[&dyn Display]) -> LogResult<()>;
}

/// Sink that forwards everything to a `LogHandler`.
///
/// Structured records become the composite format `"{0}: {1}"` with the tag
/// and message as arguments. No context is attached.
#[derive(Clone)]
pub struct HandlerSink {
    handler: Arc<dyn LogHandler>,
}

impl HandlerSink {
    /// Format used for structured records.
    pub const TAGGED_FORMAT: &'static str = "{0}: {1}";

    pub fn new(handler: Arc<dyn LogHandler>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }
}

impl std::fmt::Debug for HandlerSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSink").finish_non_exhaustive()
    }
}

impl LogSink for HandlerSink {
    fn log(&self, level: LogType, tag: &str, message: &dyn Display) -> LogResult<()> {
        self.handler
            .log_format(level, None, Self::TAGGED_FORMAT, &[&tag, message])
    }

    fn log_format(&self, level: LogType, format: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.handler.log_format(level, None, format, args)
    }
}

/// Sink that drops everything. Backs loggers that can never be active.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _level: LogType, _tag: &str, _message: &dyn Display) -> LogResult<()> {
        Ok(())
    }

    fn log_format(&self, _level: LogType, _format: &str, _args: &[&dyn Display]) -> LogResult<()> {
        Ok(())
    }
}
