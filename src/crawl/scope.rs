// src/crawl/scope.rs
// =============================================================================
// Decides which discovered links the crawl may follow.
//
// A link is in scope when its text starts with the seed URL's text. This is a
// plain string prefix test, not an origin comparison: http vs https, a
// missing trailing slash or a differently ordered query string all count as
// out of scope, even when they would load the same page.
//
//   seed: https://docs.example.com/docs/
//   https://docs.example.com/docs/intro   -> in scope
//   https://docs.example.com/docs         -> out (no trailing slash)
//   http://docs.example.com/docs/intro    -> out (scheme differs)
//   https://docs.example.com/blog/        -> out
// =============================================================================

/// Prefix-based scope test, anchored on the seed URL
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    seed: String,
}

impl ScopeFilter {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn allows(&self, candidate: &str) -> bool {
        in_scope(candidate, &self.seed)
    }
}

/// True if `candidate` textually begins with `seed`
pub fn in_scope(candidate: &str, seed: &str) -> bool {
    candidate.starts_with(seed)
}
