//! Tagged, release-aware logger.
//!
//! Every record carries a fixed tag. Plain messages hand the tag to the sink
//! as its own parameter; formatted messages get it baked into the format
//! string as `"<tag>: <format>"`. Both paths are no-ops unless the build mode
//! is active, and in that case the sink is never touched and the arguments
//! are never formatted.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::LogResult;
use crate::host;
use crate::level::LogType;
use crate::mode::{BuildMode, Current};
use crate::sink::{LogSink, NullSink};

/// Logger that prefixes a tag and only logs in debug-like builds.
pub struct TaggedLogger<M: BuildMode = Current> {
    tag: Arc<str>,
    sink: Arc<dyn LogSink>,
    _mode: PhantomData<M>,
}

impl TaggedLogger {
    /// Logger writing to the host default handler as installed right now.
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        Self::with_default_sink(tag)
    }

    /// Logger writing to `sink`.
    pub fn with_sink(tag: impl Into<Arc<str>>, sink: Arc<dyn LogSink>) -> Self {
        Self::with_mode(tag, sink)
    }
}

impl<M: BuildMode> TaggedLogger<M> {
    /// Logger pinned to the build mode `M`.
    pub fn with_mode(tag: impl Into<Arc<str>>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            tag: tag.into(),
            sink,
            _mode: PhantomData,
        }
    }

    /// Logger pinned to `M`, bound to the current host default handler.
    ///
    /// Inactive modes never look the default up.
    pub fn with_default_sink(tag: impl Into<Arc<str>>) -> Self {
        let sink: Arc<dyn LogSink> = if M::ACTIVE {
            Arc::new(host::default_sink())
        } else {
            Arc::new(NullSink)
        };
        Self::with_mode(tag, sink)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether calls on this logger reach the sink.
    #[inline]
    pub const fn is_active(&self) -> bool {
        M::ACTIVE
    }

    #[inline]
    pub fn log(&self, message: impl Display) -> LogResult<()> {
        self.structured(LogType::Log, &message)
    }

    #[inline]
    pub fn log_warning(&self, message: impl Display) -> LogResult<()> {
        self.structured(LogType::Warning, &message)
    }

    #[inline]
    pub fn log_error(&self, message: impl Display) -> LogResult<()> {
        self.structured(LogType::Error, &message)
    }

    #[inline]
    pub fn log_format(&self, format: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log_type_format(LogType::Log, format, args)
    }

    #[inline]
    pub fn log_warning_format(&self, format: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log_type_format(LogType::Warning, format, args)
    }

    #[inline]
    pub fn log_error_format(&self, format: &str, args: &[&dyn Display]) -> LogResult<()> {
        self.log_type_format(LogType::Error, format, args)
    }

    /// Formatted record at an arbitrary level.
    pub fn log_type_format(
        &self,
        level: LogType,
        format: &str,
        args: &[&dyn Display],
    ) -> LogResult<()> {
        if !M::ACTIVE {
            return Ok(());
        }
        let tagged = format!("{}: {}", self.tag, format);
        self.sink.log_format(level, &tagged, args)
    }

    fn structured(&self, level: LogType, message: &dyn Display) -> LogResult<()> {
        if !M::ACTIVE {
            return Ok(());
        }
        self.sink.log(level, &self.tag, message)
    }
}

impl<M: BuildMode> Clone for TaggedLogger<M> {
    fn clone(&self) -> Self {
        Self {
            tag: Arc::clone(&self.tag),
            sink: Arc::clone(&self.sink),
            _mode: PhantomData,
        }
    }
}

impl<M: BuildMode> fmt::Debug for TaggedLogger<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedLogger")
            .field("tag", &self.tag)
            .field("mode", &M::NAME)
            .finish_non_exhaustive()
    }
}
