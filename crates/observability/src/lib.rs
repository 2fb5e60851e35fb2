//! Tracing/logging (shared setup).
//!
//! The domain and repository layers never log; consumers (services, tests,
//! future binaries) decide whether to install a subscriber.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
