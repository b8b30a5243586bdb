// src/archive/mod.rs
// =============================================================================
// This module turns visited pages into files.
//
// Submodules:
// - archiver: navigate + export one page (PageArchiver)
// - links: read the outbound links of the page that was just archived
// - naming: URL -> output file name
// =============================================================================

mod archiver;
mod links;
pub mod naming;

pub use archiver::{OutputArtifact, PageArchiver};
pub use links::extract_links;
