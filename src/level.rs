//! Log severity.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kind of a log record, as understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    /// Error message.
    Error,
    /// Failed assertion.
    Assert,
    /// Warning message.
    Warning,
    /// Regular message.
    Log,
    /// Exception / error object report.
    Exception,
}

impl LogType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogType::Error => "Error",
            LogType::Assert => "Assert",
            LogType::Warning => "Warning",
            LogType::Log => "Log",
            LogType::Exception => "Exception",
        }
    }

    /// Error-class records (Error, Assert, Exception).
    pub const fn is_error(&self) -> bool {
        matches!(self, LogType::Error | LogType::Assert | LogType::Exception)
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known log type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log type: {0:?}")]
pub struct ParseLogTypeError(pub String);

impl FromStr for LogType {
    type Err = ParseLogTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogType::Error),
            "assert" => Ok(LogType::Assert),
            "warning" | "warn" => Ok(LogType::Warning),
            "log" | "info" => Ok(LogType::Log),
            "exception" => Ok(LogType::Exception),
            _ => Err(ParseLogTypeError(s.to_string())),
        }
    }
}
