//! Error types.

use thiserror::Error;

/// Problems found while rendering a composite format string.
///
/// Positions are byte offsets into the format string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unclosed placeholder starting at {position}")]
    UnclosedPlaceholder { position: usize },

    #[error("unmatched '}}' at {position}")]
    UnmatchedClosingBrace { position: usize },

    #[error("invalid placeholder at {position}")]
    InvalidPlaceholder { position: usize },

    #[error("placeholder index {index} out of range ({count} arguments)")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Errors surfaced by sinks and handlers.
///
/// Loggers and the release-aware handler never produce these themselves; they
/// hand back whatever the underlying sink returned.
#[derive(Debug, Error)]
pub enum LogError {
    /// Malformed format string.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// Failure reported by a custom handler.
    #[error("handler error: {0}")]
    Handler(String),
}

/// Result type for log operations.
pub type LogResult<T> = Result<T, LogError>;
