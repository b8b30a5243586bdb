// src/crawl/report.rs
// =============================================================================
// What a crawl did, collected while it runs and printed at the end.
//
// #[derive(Serialize)] lets main.rs print the whole thing as JSON.
// =============================================================================

use serde::Serialize;

use crate::archive::OutputArtifact;
use crate::error::ArchiveError;

/// A page that could not be (fully) processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    pub url: String,
    pub depth: usize,
    pub error: String,
}

impl FailedPage {
    pub fn new(error: &ArchiveError, depth: usize) -> Self {
        Self {
            url: error.url().to_string(),
            depth,
            error: error.to_string(),
        }
    }
}

/// Summary of one crawl run
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    pub seed_url: String,
    pub max_depth: usize,
    /// In the order the pages were archived
    pub archived: Vec<OutputArtifact>,
    /// Pages that failed to load or export; no artifact exists for them
    pub failed: Vec<FailedPage>,
    /// Pages that were archived but whose links could not be read
    pub link_errors: Vec<FailedPage>,
    /// In-scope links not followed because their page was already taken
    pub skipped: usize,
    /// Links rejected by the scope filter
    pub out_of_scope: usize,
}

impl CrawlReport {
    pub fn new(seed_url: &str, max_depth: usize) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            max_depth,
            ..Self::default()
        }
    }

    /// Pages the crawl attempted, whether or not they succeeded
    pub fn pages_attempted(&self) -> usize {
        self.archived.len() + self.failed.len()
    }

    /// True when every attempted page produced an artifact
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use std::path::PathBuf;

    #[test]
    fn test_counts() {
        let mut report = CrawlReport::new("https://docs.example.com/", 3);
        assert!(report.is_complete());

        report.archived.push(OutputArtifact {
            source_url: "https://docs.example.com/".to_string(),
            path: PathBuf::from("output/https___docs_example_com_.pdf"),
        });
        let err = ArchiveError::Navigation {
            url: "https://docs.example.com/a".to_string(),
            source: RenderError::Other("boom".to_string()),
        };
        report.failed.push(FailedPage::new(&err, 2));

        assert_eq!(report.pages_attempted(), 2);
        assert!(!report.is_complete());
        assert_eq!(report.failed[0].url, "https://docs.example.com/a");
        assert_eq!(report.failed[0].depth, 2);
    }

    #[test]
    fn test_serializes_to_json() {
        let report = CrawlReport::new("https://docs.example.com/", 3);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["seed_url"], "https://docs.example.com/");
        assert_eq!(value["max_depth"], 3);
        assert!(value["archived"].as_array().unwrap().is_empty());
    }
}
