// src/crawl/registry.rs
// =============================================================================
// The set of URLs the crawl has already taken on.
//
// A URL goes in *before* its page is archived, not after. That ordering is
// what guarantees one artifact per URL: by the time any other page links to
// it, it is already marked.
//
// Lives for one crawl and is then dropped; nothing is persisted.
// =============================================================================

use std::collections::HashSet;

/// URLs already scheduled or processed in this crawl
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    urls: HashSet<String>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_visited(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Idempotent
    pub fn mark_visited(&mut self, url: &str) {
        self.urls.insert(url.to_string());
    }

    /// Marks `url` and returns true, or returns false if it was already marked
    pub fn check_and_mark(&mut self, url: &str) -> bool {
        if self.has_visited(url) {
            return false;
        }
        self.mark_visited(url);
        true
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}
