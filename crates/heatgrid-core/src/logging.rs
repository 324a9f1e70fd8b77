//! Logging bootstrap based on `tracing-subscriber`.
//!
//! Library code only emits `tracing` events; binaries and demos call one of
//! the `init` functions once at startup to print them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Install a fmt subscriber with explicit filter directives
/// (e.g. `"heatgrid=trace"`), ignoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_filter(directives: &str) -> bool {
    install(EnvFilter::new(directives))
}

fn install(filter: EnvFilter) -> bool {
    let directives = filter.to_string();
    match tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        Ok(()) => {
            tracing::debug!(%directives, "logging initialized");
            true
        }
        Err(e) => {
            tracing::warn!("Logging already initialized: {}", e);
            false
        }
    }
}
