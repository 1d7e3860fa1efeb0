//! Release-aware log handler.
//!
//! Wraps another handler and forwards to it verbatim in debug-like builds.
//! In release builds both entry points do nothing.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::LogResult;
use crate::handler::{LogContext, LogHandler};
use crate::host;
use crate::level::LogType;
use crate::mode::{BuildMode, Current};

pub struct ReleaseAwareLogHandler<M: BuildMode = Current> {
    inner: Arc<dyn LogHandler>,
    _mode: PhantomData<M>,
}

impl ReleaseAwareLogHandler {
    pub fn new(inner: Arc<dyn LogHandler>) -> Self {
        Self::with_mode(inner)
    }

    /// Delegate to the handler that is the process default right now.
    ///
    /// The delegate is captured once, so installing the result as the new
    /// default does not make it call itself.
    pub fn wrapping_default() -> Self {
        Self::with_mode(host::default_handler())
    }

    /// Wrap the current default and install the wrapper in its place.
    ///
    /// Returns the handler that was replaced.
    pub fn install() -> Arc<dyn LogHandler> {
        let handler = Arc::new(Self::wrapping_default());
        let mode = <Current as BuildMode>::NAME;
        tracing::debug!(mode, "installing release-aware log handler");
        host::set_default_handler(handler)
    }
}

impl<M: BuildMode> ReleaseAwareLogHandler<M> {
    pub fn with_mode(inner: Arc<dyn LogHandler>) -> Self {
        Self {
            inner,
            _mode: PhantomData,
        }
    }

    pub fn inner(&self) -> &Arc<dyn LogHandler> {
        &self.inner
    }
}

impl<M: BuildMode> LogHandler for ReleaseAwareLogHandler<M> {
    fn log_exception(&self, error: &(dyn StdError + 'static), context: Option<&LogContext<'_>>) {
        if M::ACTIVE {
            self.inner.log_exception(error, context);
        }
    }

    fn log_format(
        &self,
        level: LogType,
        context: Option<&LogContext<'_>>,
        format: &str,
        args: &[&dyn Display],
    ) -> LogResult<()> {
        if !M::ACTIVE {
            return Ok(());
        }
        self.inner.log_format(level, context, format, args)
    }
}

impl<M: BuildMode> Clone for ReleaseAwareLogHandler<M> {
    fn clone(&self) -> Self {
        Self::with_mode(Arc::clone(&self.inner))
    }
}

impl<M: BuildMode> fmt::Debug for ReleaseAwareLogHandler<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseAwareLogHandler")
            .field("mode", &M::NAME)
            .finish_non_exhaustive()
    }
}
