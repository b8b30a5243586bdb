// src/crawl/mod.rs
// =============================================================================
// This module handles crawling the site.
//
// Features:
// - Depth-first crawling starting from the seed URL
// - Scope restriction: only links that start with the seed URL are followed
// - Configurable depth limit
// - Each URL is archived at most once
//
// Submodules:
// - engine: the crawl loop (CrawlEngine)
// - frontier: the stack of pages still to visit
// - registry: URLs already taken
// - scope: which links may be followed
// - report: what the crawl did
// =============================================================================

mod engine;
mod frontier;
mod registry;
mod report;
mod scope;

pub use engine::CrawlEngine;
pub use report::CrawlReport;
