// src/error.rs
// =============================================================================
// Error types for the archiver.
//
// Two layers:
// - RenderError: something went wrong talking to the browser (or the fake
//   renderer in tests). Carries no URL, the caller knows which page it was.
// - ArchiveError: a single page could not be processed. These are always
//   recovered by the crawl engine; they never stop the crawl.
//
// The application edge (main.rs) uses anyhow for the few fatal errors.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page did not finish loading in time
    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// The DevTools protocol returned an error
    #[error("browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    /// Writing the exported document failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else (bad script result, fake failures in tests, ...)
    #[error("{0}")]
    Other(String),
}

/// Failure while processing one page of the crawl.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to load {url}: {source}")]
    Navigation { url: String, source: RenderError },

    #[error("failed to export {url} to {}: {source}", path.display())]
    Export {
        url: String,
        path: PathBuf,
        source: RenderError,
    },

    #[error("failed to read links from {url}: {source}")]
    Extraction { url: String, source: RenderError },
}

impl ArchiveError {
    /// The page this error belongs to
    pub fn url(&self) -> &str {
        match self {
            ArchiveError::Navigation { url, .. }
            | ArchiveError::Export { url, .. }
            | ArchiveError::Extraction { url, .. } => url,
        }
    }
}
