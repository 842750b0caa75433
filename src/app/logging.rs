//! Diagnostic logging setup.
//!
//! User-facing progress goes to stdout; diagnostics go to stderr through `tracing`.

use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `ALLCOUNT_LOG=allcount=debug`.
pub const LOG_ENV: &str = "ALLCOUNT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
