//! Process-wide default handler.
//!
//! Holds the handler that `TaggedLogger::new` and
//! `ReleaseAwareLogHandler::wrapping_default` bind to. Starts out as a
//! `TracingHandler`. Replacing it is atomic but otherwise unsynchronised:
//! concurrent installers race, and the last store wins.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::handler::{LogHandler, TracingHandler};
use crate::sink::HandlerSink;

// `ArcSwap` only stores `Arc<T>` with a sized `T`, so the trait object sits
// behind a second `Arc`. Loads hand out clones of that inner `Arc`.
type HandlerSlot = ArcSwap<Arc<dyn LogHandler>>;

static DEFAULT_HANDLER: LazyLock<HandlerSlot> =
    LazyLock::new(|| ArcSwap::from_pointee(Arc::new(TracingHandler) as Arc<dyn LogHandler>));

/// Handler currently installed as the process default.
pub fn default_handler() -> Arc<dyn LogHandler> {
    let slot = DEFAULT_HANDLER.load();
    Arc::clone(&**slot)
}

/// Install `handler` as the process default, returning the previous one.
///
/// Loggers that already captured the old default keep using it.
pub fn set_default_handler(handler: Arc<dyn LogHandler>) -> Arc<dyn LogHandler> {
    let previous = DEFAULT_HANDLER.swap(Arc::new(handler));
    tracing::debug!("default log handler replaced");
    Arc::clone(&*previous)
}

/// Sink over the current default handler.
pub fn default_sink() -> HandlerSink {
    HandlerSink::new(default_handler())
}
