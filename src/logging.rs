// src/logging.rs
// =============================================================================
// Progress and diagnostic output.
//
// Everything the crawl says while it runs goes through `tracing` to stderr.
// stdout is reserved for the final report, so `--json` output can be piped
// straight into another tool.
//
// Level defaults to `info` (one line per page). Set RUST_LOG to change it:
//   RUST_LOG=debug site-archiver ...                 # also skips, idle waits
//   RUST_LOG=site_archiver=debug,chromiumoxide=warn  # per-crate levels
// =============================================================================

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second call (e.g. from tests) is not an error worth failing on
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
