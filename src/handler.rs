//! Log handlers.
//!
//! A handler is the host's final destination for records: it takes either an
//! error object or a composite format string plus arguments, both with an
//! optional context. `TracingHandler` is the default one and emits through
//! `tracing`.

use std::error::Error as StdError;
use std::fmt::{self, Display};

use crate::error::LogResult;
use crate::format;
use crate::level::LogType;

/// Identifies the object a record is about.
///
/// Borrowed from the caller for the duration of one call; handlers must not
/// keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogContext<'a> {
    name: &'a str,
}

impl<'a> LogContext<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }
}

impl Display for LogContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Host log handler capability.
pub trait LogHandler: Send + Sync {
    /// Report an error object.
    fn log_exception(&self, error: &(dyn StdError + 'static), context: Option<&LogContext<'_>>);

    /// Render and emit a composite-format message.
    fn log_format(
        &self,
        level: LogType,
        context: Option<&LogContext<'_>>,
        format: &str,
        args: &[&dyn Display],
    ) -> LogResult<()>;
}

/// Default host handler backed by `tracing`.
///
/// Error, Assert and Exception map to `ERROR`, Warning to `WARN`, Log to
/// `INFO`. Whatever subscriber is installed decides where events go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl TracingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LogHandler for TracingHandler {
    fn log_exception(&self, error: &(dyn StdError + 'static), context: Option<&LogContext<'_>>) {
        let mut caused_by = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            caused_by.push(cause.to_string());
            source = cause.source();
        }

        tracing::error!(
            log_type = %LogType::Exception,
            context = context.map(LogContext::name),
            caused_by = ?caused_by,
            "{}",
            error
        );
    }

    fn log_format(
        &self,
        level: LogType,
        context: Option<&LogContext<'_>>,
        format: &str,
        args: &[&dyn Display],
    ) -> LogResult<()> {
        let message = format::render(format, args)?;
        let context = context.map(LogContext::name);

        match level {
            LogType::Error | LogType::Assert | LogType::Exception => {
                tracing::error!(log_type = %level, context, "{}", message)
            }
            LogType::Warning => tracing::warn!(log_type = %level, context, "{}", message),
            LogType::Log => tracing::info!(log_type = %level, context, "{}", message),
        }
        Ok(())
    }
}
