// src/render/testing.rs
// In-memory renderer for tests: a fixed site map instead of a browser.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{NavigateOptions, PageSize, Renderer};
use crate::error::RenderError;

#[derive(Debug, Default)]
pub struct FakeRenderer {
    pages: HashMap<String, Vec<String>>,
    slow: HashMap<String, Duration>,
    broken_links: HashSet<String>,
    failing_exports: HashSet<String>,
    current: Option<String>,

    /// Every navigate() call, in order
    pub navigations: Vec<(String, NavigateOptions)>,
    /// Every successful export, in order
    pub exports: Vec<(PathBuf, PageSize)>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page that links to `links`; unknown URLs fail to load
    pub fn page(mut self, url: &str, links: &[&str]) -> Self {
        self.pages
            .insert(url.to_string(), links.iter().map(|l| l.to_string()).collect());
        self
    }

    /// Makes loading `url` take `delay`
    pub fn slow(mut self, url: &str, delay: Duration) -> Self {
        self.slow.insert(url.to_string(), delay);
        self
    }

    /// Makes query_links() fail while `url` is loaded
    pub fn broken_links(mut self, url: &str) -> Self {
        self.broken_links.insert(url.to_string());
        self
    }

    /// Makes export_document() fail while `url` is loaded
    pub fn failing_export(mut self, url: &str) -> Self {
        self.failing_exports.insert(url.to_string());
        self
    }

    /// URLs in the order they were navigated to
    pub fn visited(&self) -> Vec<&str> {
        self.navigations.iter().map(|(url, _)| url.as_str()).collect()
    }
}

#[async_trait]
impl Renderer for FakeRenderer {
    async fn navigate(&mut self, url: &str, options: NavigateOptions) -> Result<(), RenderError> {
        self.navigations.push((url.to_string(), options));
        self.current = None;

        if let Some(delay) = self.slow.get(url) {
            tokio::time::sleep(*delay).await;
        }
        if !self.pages.contains_key(url) {
            return Err(RenderError::Other(format!("net::ERR_NAME_NOT_RESOLVED at {url}")));
        }

        self.current = Some(url.to_string());
        Ok(())
    }

    async fn export_document(&mut self, path: &Path, page_size: PageSize) -> Result<(), RenderError> {
        let current = self
            .current
            .clone()
            .ok_or_else(|| RenderError::Other("no page loaded".to_string()))?;
        if self.failing_exports.contains(&current) {
            return Err(RenderError::Other("printing failed".to_string()));
        }

        std::fs::write(path, format!("%PDF-fake {current}"))?;
        self.exports.push((path.to_path_buf(), page_size));
        Ok(())
    }

    async fn query_links(&mut self) -> Result<Vec<String>, RenderError> {
        let current = self
            .current
            .as_ref()
            .ok_or_else(|| RenderError::Other("no page loaded".to_string()))?;
        if self.broken_links.contains(current) {
            return Err(RenderError::Other("execution context was destroyed".to_string()));
        }
        Ok(self.pages.get(current).cloned().unwrap_or_default())
    }
}
