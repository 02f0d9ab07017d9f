//! Development-time tracing for debugging the cleaner.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. The lines the
//! cleaner prints to stdout (root, removed paths, completion notice) are
//! product output and are not affected by it.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the stderr subscriber, filtered by `RUST_LOG`.
///
/// ```bash
/// RUST_LOG=cleaner=debug CODE_DIR=./ros2_code_dir clean-generated
/// ```
pub fn init() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// Build the filter for `directives`, falling back to [`DEFAULT_DIRECTIVES`].
///
/// Blank or malformed directives fall back to the default.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
