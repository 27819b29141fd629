//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber filtered by the `STRATA_LOG`
/// environment variable (defaulting to `info`).
///
/// Opt-in: the library never installs a subscriber on its own, and calling
/// this twice is harmless (the second call is ignored).
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("STRATA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}
