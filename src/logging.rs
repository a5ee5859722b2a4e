// src/logging.rs
// =============================================================================
// Diagnostics go through `tracing` and land on stderr.
//
// stdout is reserved for the summary and the --json report, so nothing here
// ever writes to it. RUST_LOG wins over the --verbose flag when both are set.
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Builds the filter used when RUST_LOG is not set
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,doc_link_check=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber. Call once, before any scanning starts.
pub fn init_logging(verbose: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    // try_init: a second call (tests) is not an error worth crashing over
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
