//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: compact fmt output, `RUST_LOG`
/// filtering with an `info` fallback.
///
/// Subsequent calls are no-ops (`try_init` result discarded), so tests and
/// benches can each call this without coordinating.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
