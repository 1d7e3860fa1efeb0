//! Build mode.
//!
//! Logging is active in "debug-like" builds: either `debug_assertions` is on
//! or the crate was compiled with the `always-log` feature. Everything else is
//! a release build and every logging call is a no-op.
//!
//! The mode is also available at the type level so that loggers and handlers
//! can be pinned to one behaviour (`DebugLike` / `Release`). `Current` is the
//! marker the compiler picked for this build.

/// True when this build logs.
pub const DEBUG_LIKE: bool = cfg!(any(debug_assertions, feature = "always-log"));

/// Type-level build mode.
pub trait BuildMode: Send + Sync + 'static {
    /// Whether calls gated on this mode reach the sink.
    const ACTIVE: bool;

    /// Human readable mode name.
    const NAME: &'static str;
}

/// Development build, or release build with `always-log`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugLike;

/// Release build without override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Release;

impl BuildMode for DebugLike {
    const ACTIVE: bool = true;
    const NAME: &'static str = "debug-like";
}

impl BuildMode for Release {
    const ACTIVE: bool = false;
    const NAME: &'static str = "release";
}

/// Mode selected by the current compilation.
#[cfg(any(debug_assertions, feature = "always-log"))]
pub type Current = DebugLike;

/// Mode selected by the current compilation.
#[cfg(not(any(debug_assertions, feature = "always-log")))]
pub type Current = Release;
