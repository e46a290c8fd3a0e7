//! Shared logging setup.

/// Install the process-wide log subscriber.
///
/// Calling this more than once is harmless; only the first install wins.
pub fn init() {
    tracing::init();
}

/// Test-binary variant: compact output through the test writer.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Subscriber construction (filter, format).
pub mod tracing;
