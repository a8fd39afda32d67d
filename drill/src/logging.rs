//! Development-time tracing for debugging drills.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Check results,
//! solved values and pattern lines are product output and go to stdout,
//! unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` so inventory rejections stay
/// visible. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=drill=debug,katas=debug drill run two-sum
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
