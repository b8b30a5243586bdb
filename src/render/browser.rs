// src/render/browser.rs
// =============================================================================
// The real renderer: one headless Chromium, one tab, reused for the whole
// crawl.
//
// Lifecycle:
// 1. launch(): start the browser, spawn the task that pumps DevTools events,
//    open a blank tab
// 2. navigate / export_document / query_links, called by the crawl, one at a
//    time, always on the same tab
// 3. close(): shut the browser down and wait for the event task to finish
//
// If launch() fails the whole run fails; nothing else in here is fatal.
// =============================================================================

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;

use super::idle::{wait_for_network_idle, IdleHeuristic};
use super::{dom, NavigateOptions, PageSize, Renderer, WaitUntil};
use crate::error::RenderError;

/// How to start the browser
#[derive(Debug, Clone, Default)]
pub struct BrowserOptions {
    /// Explicit Chrome/Chromium binary, otherwise chromiumoxide looks for one
    pub chrome_path: Option<PathBuf>,
    /// Show the browser window (useful when debugging a site)
    pub headful: bool,
    /// Longest a page may take to load, None = no limit
    pub navigation_timeout: Option<Duration>,
}

/// Per-command limit used when navigations are unbounded
const UNBOUNDED_REQUEST_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Per-command limit for everything else (printing, DOM reads)
const MIN_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl BrowserOptions {
    // chromiumoxide drops any DevTools command (including Page.navigate) that
    // runs past this, so it must never be shorter than the navigation timeout
    fn request_timeout(&self) -> Duration {
        match self.navigation_timeout {
            Some(limit) => limit.max(MIN_REQUEST_TIMEOUT),
            None => UNBOUNDED_REQUEST_TIMEOUT,
        }
    }
}

/// Renderer backed by a single Chromium tab
pub struct ChromeRenderer {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Page,
    idle: IdleHeuristic,
}

impl ChromeRenderer {
    /// Starts Chromium and opens the tab the crawl will use
    pub async fn launch(options: &BrowserOptions) -> Result<Self, RenderError> {
        let mut builder = BrowserConfig::builder()
            .request_timeout(options.request_timeout())
            .window_size(1280, 1024)
            .arg("--disable-extensions")
            .arg("--disable-notifications")
            .arg("--hide-scrollbars")
            .arg("--mute-audio")
            .arg("--no-first-run")
            .arg("--no-default-browser-check");

        if let Some(path) = &options.chrome_path {
            builder = builder.chrome_executable(path);
        }
        if options.headful {
            builder = builder.with_head();
        }

        let config = builder
            .build()
            .map_err(|e| RenderError::Other(format!("invalid browser config: {e}")))?;

        tracing::debug!("launching browser: {:?}", config);
        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler stream must be polled for the browser to make progress
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("browser handler error: {}", e);
                }
            }
            tracing::debug!("browser handler finished");
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            handler,
            page,
            idle: IdleHeuristic::default(),
        })
    }

    /// Shuts the browser down
    pub async fn close(mut self) -> Result<(), RenderError> {
        let closed = self.browser.close().await;
        // Reap the child process even if the close command failed
        match self.browser.wait().await {
            Ok(status) => tracing::debug!("browser exited: {:?}", status),
            Err(e) => tracing::debug!("failed to reap browser process: {}", e),
        }
        self.handler.abort();
        closed?;
        Ok(())
    }
}

#[async_trait]
impl Renderer for ChromeRenderer {
    async fn navigate(&mut self, url: &str, options: NavigateOptions) -> Result<(), RenderError> {
        self.page.goto(url).await?;

        if options.wait_until == WaitUntil::NetworkIdle {
            wait_for_network_idle(&self.page, self.idle).await?;
        }
        Ok(())
    }

    async fn export_document(&mut self, path: &Path, page_size: PageSize) -> Result<(), RenderError> {
        let (width, height) = page_size.inches();
        let params = PrintToPdfParams {
            paper_width: Some(width),
            paper_height: Some(height),
            ..Default::default()
        };

        let pdf = self.page.pdf(params).await?;
        tokio::fs::write(path, pdf).await?;
        Ok(())
    }

    async fn query_links(&mut self) -> Result<Vec<String>, RenderError> {
        let html = self.page.content().await?;
        let page_url = require_page_url(self.page.url().await?)?;
        Ok(dom::extract_anchor_targets(&html, &page_url))
    }
}

// Links can only be resolved against a known document URL
fn require_page_url(url: Option<String>) -> Result<String, RenderError> {
    url.ok_or_else(|| RenderError::Other("page has no URL".to_string()))
}
