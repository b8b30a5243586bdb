// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the Cli struct below *is* the CLI definition, and
// clap generates the parser, --help and --version from it.
//
// Example:
//   site-archiver https://docs.prequel.co/docs/ --max-depth 2 --output-dir pdfs
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_MAX_DEPTH, DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "site-archiver",
    version,
    about = "Crawl a documentation site and save every page as a PDF",
    long_about = "site-archiver starts at a seed URL, follows every link that begins with that URL, \
                  and prints each page it reaches to an A4 PDF using headless Chromium. \
                  Each page is saved once, no matter how many pages link to it."
)]
pub struct Cli {
    /// Page to start from; only links starting with this exact text are followed
    ///
    /// Example: https://docs.example.com/docs/
    pub seed_url: String,

    /// Directory the PDFs are written to (created if missing)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Maximum crawl depth
    ///
    /// Depth 1 = just the seed page
    /// Depth 2 = seed page + all in-scope pages it links to
    /// etc.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Give up on a page that has not finished loading after this many seconds
    #[arg(long, default_value_t = DEFAULT_NAVIGATION_TIMEOUT_SECS, conflicts_with = "no_timeout")]
    pub timeout_secs: u64,

    /// Wait for every page as long as it takes
    #[arg(long)]
    pub no_timeout: bool,

    /// Print as soon as the load event fires instead of waiting for the network to go quiet
    #[arg(long)]
    pub skip_idle_wait: bool,

    /// Chrome/Chromium executable (auto-detected when omitted)
    #[arg(long, env = "CHROMIUM_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headful: bool,

    /// Print the final report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
