//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled, the scope macros expand to nothing
//! and the frame functions are no-ops.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

/// Turn scope recording on or off.
///
/// Scopes are off by default, so instrumented code costs a single atomic
/// load until a viewer is attached.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);

    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Whether scope recording is currently on.
#[cfg(feature = "profiling")]
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Whether scope recording is currently on.
#[cfg(not(feature = "profiling"))]
pub fn is_enabled() -> bool {
    false
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per render tick so scopes are grouped by frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
