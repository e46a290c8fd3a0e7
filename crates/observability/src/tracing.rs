//! Subscriber construction.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// JSON lines, filtered through `RUST_LOG` (default `info`). Repeat calls
/// are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();

    tracing::debug!("tracing initialized");
}

/// Initialization for test binaries: compact human-readable lines routed
/// through the test writer so they attach to the right test's output.
///
/// Like [`init`], repeat calls are no-ops.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_test_writer()
        .try_init();
}
