// src/archive/links.rs
// =============================================================================
// Reads the outbound links of the page that was just archived.
//
// The renderer already has the page loaded (archive() leaves it there), so
// this is a single query. The list is returned exactly as found: document
// order, duplicates included. Deduplication is the crawl engine's job.
// =============================================================================

use crate::error::ArchiveError;
use crate::render::Renderer;

// Returns every link target of the currently loaded page
//
// Parameters:
//   renderer: the session that just loaded `url`
//   url: the page's URL, only used to label errors
pub async fn extract_links<R: Renderer + ?Sized>(
    renderer: &mut R,
    url: &str,
) -> Result<Vec<String>, ArchiveError> {
    renderer
        .query_links()
        .await
        .map_err(|source| ArchiveError::Extraction {
            url: url.to_string(),
            source,
        })
}
