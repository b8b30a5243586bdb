// src/render/mod.rs
// =============================================================================
// This module is the boundary to the rendering engine.
//
// The crawler never talks to Chromium directly. It talks to the `Renderer`
// trait, which has exactly the three operations the crawl needs:
// - navigate: load a URL and wait for the network to go quiet
// - export_document: print the current page to a file
// - query_links: list the <a href> targets of the current page
//
// Submodules:
// - browser: the real implementation, backed by chromiumoxide
// - dom: HTML parsing used to read links out of the rendered DOM
// - idle: the network-idle heuristic used after navigation
//
// Tests use a fake renderer (see crawl::engine tests) so no browser is needed.
// =============================================================================

mod browser;
pub mod dom;
mod idle;
#[cfg(test)]
pub mod testing;

pub use browser::{BrowserOptions, ChromeRenderer};

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::error::RenderError;

/// When a navigation counts as finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitUntil {
    /// The load event fired
    Load,
    /// The load event fired and network activity has settled
    NetworkIdle,
}

/// Options for a single navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    pub wait_until: WaitUntil,
    /// Upper bound for the whole navigation, None = wait as long as it takes
    pub timeout: Option<Duration>,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            wait_until: WaitUntil::NetworkIdle,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Paper format for exported documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    A4,
}

impl PageSize {
    /// (width, height) in inches, the unit the print-to-PDF command expects
    pub fn inches(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (8.27, 11.7),
        }
    }
}

/// A rendering session that holds one current page.
///
/// The crawl owns the renderer exclusively for its whole lifetime, so every
/// method takes `&mut self` and no call ever overlaps another.
#[async_trait]
pub trait Renderer: Send {
    /// Loads `url` and returns once `options.wait_until` is satisfied
    async fn navigate(&mut self, url: &str, options: NavigateOptions) -> Result<(), RenderError>;

    /// Writes the currently rendered page to `path`
    async fn export_document(&mut self, path: &Path, page_size: PageSize) -> Result<(), RenderError>;

    /// Absolute targets of every link on the currently rendered page
    async fn query_links(&mut self) -> Result<Vec<String>, RenderError>;
}
