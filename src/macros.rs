//! Logging macros that skip argument evaluation when the logger is inactive.
//!
//! ```ignore
//! ra_log!(logger, "loaded {0} assets in {1} ms", count, elapsed_ms)?;
//! ra_warn!(logger, "cache miss for {0}", key)?;
//! ra_log!(logger, level = LogType::Assert, "bad state {0}", state)?;
//! ```
//!
//! Each expands to a `LogResult<()>`. Arguments only need `Display`.

/// Formatted record at `Log` level, or at `level = ...`.
#[macro_export]
macro_rules! ra_log {
    ($logger:expr, level = $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        if logger.is_active() {
            logger.log_type_format($level, $format, &[$(&$arg as &dyn ::core::fmt::Display),*])
        } else {
            ::core::result::Result::<(), $crate::LogError>::Ok(())
        }
    }};
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::ra_log!($logger, level = $crate::LogType::Log, $format $(, $arg)*)
    };
}

/// Formatted record at `Warning` level.
#[macro_export]
macro_rules! ra_warn {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::ra_log!($logger, level = $crate::LogType::Warning, $format $(, $arg)*)
    };
}

/// Formatted record at `Error` level.
#[macro_export]
macro_rules! ra_error {
    ($logger:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::ra_log!($logger, level = $crate::LogType::Error, $format $(, $arg)*)
    };
}
