// src/archive/archiver.rs
// =============================================================================
// Renders one URL and saves it as a document.
//
// Steps for archive(url):
// 1. Navigate, waiting for network idle, bounded by the navigation timeout
// 2. Work out the output path from the URL (see naming.rs)
// 3. Export the rendered page as an A4 document to that path
// 4. Hand back an OutputArtifact describing what was written
//
// The page stays loaded in the renderer afterwards, so the crawl engine can
// read its links without loading it a second time.
// =============================================================================

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use super::naming::artifact_path;
use crate::error::{ArchiveError, RenderError};
use crate::render::{NavigateOptions, PageSize, Renderer, WaitUntil};

/// One exported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputArtifact {
    /// The URL the document was rendered from
    pub source_url: String,
    /// Where the document was written
    pub path: PathBuf,
}

/// Renders pages and writes them into one output directory
#[derive(Debug, Clone)]
pub struct PageArchiver {
    output_dir: PathBuf,
    navigation_timeout: Option<Duration>,
    wait_until: WaitUntil,
    page_size: PageSize,
}

impl PageArchiver {
    pub fn new(output_dir: impl Into<PathBuf>, navigation_timeout: Option<Duration>) -> Self {
        Self {
            output_dir: output_dir.into(),
            navigation_timeout,
            wait_until: WaitUntil::NetworkIdle,
            page_size: PageSize::A4,
        }
    }

    /// Changes when a navigation counts as finished (network idle by default)
    pub fn wait_until(mut self, wait_until: WaitUntil) -> Self {
        self.wait_until = wait_until;
        self
    }

    /// Loads `url` in `renderer` and exports it
    pub async fn archive<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        url: &str,
    ) -> Result<OutputArtifact, ArchiveError> {
        let options = NavigateOptions {
            wait_until: self.wait_until,
            timeout: self.navigation_timeout,
        };

        let navigation = renderer.navigate(url, options);
        let loaded = match self.navigation_timeout {
            Some(limit) => match tokio::time::timeout(limit, navigation).await {
                Ok(result) => result,
                Err(_) => Err(RenderError::Timeout(limit)),
            },
            None => navigation.await,
        };
        loaded.map_err(|source| ArchiveError::Navigation {
            url: url.to_string(),
            source,
        })?;

        let path = artifact_path(&self.output_dir, url);
        renderer
            .export_document(&path, self.page_size)
            .await
            .map_err(|source| ArchiveError::Export {
                url: url.to_string(),
                path: path.clone(),
                source,
            })?;

        Ok(OutputArtifact {
            source_url: url.to_string(),
            path,
        })
    }
}
