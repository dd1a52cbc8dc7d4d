//! Diagnostic tracing for runs
//!
//! Output goes to stderr so it never mixes with the sorted values printed
//! on stdout. `RUST_LOG` takes precedence over the command-line level.

use crate::io::configuration::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter for this process
///
/// Uses `RUST_LOG` when set and valid, then `level`, then [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber, compact format on stderr
///
/// Returns `false` if a subscriber was already installed.
pub fn init(level: &str) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .is_ok()
}
