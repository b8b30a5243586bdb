// src/crawl/engine.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Start with the seed URL (depth 1) on the frontier
// 2. Pop a node; skip it if its depth is past the limit or its URL was
//    already taken
// 3. Mark the URL as visited, *then* archive the page
// 4. Read the page's links, keep the ones inside the seed's scope
// 5. Push them at depth + 1, in the order they appear on the page
// 6. Repeat until the frontier is empty
//
// Failures stay local. A page that cannot be loaded or exported is recorded
// and dropped together with whatever it would have linked to; everything else
// carries on. A page whose links cannot be read keeps its PDF and simply has
// no children.
//
// One renderer, one page at a time. The engine borrows the renderer for the
// whole crawl and never runs two navigations at once, so the visited set
// needs no locking.
// =============================================================================

use tracing::{debug, info, warn};

use super::frontier::{CrawlNode, Frontier};
use super::registry::VisitedRegistry;
use super::report::{CrawlReport, FailedPage};
use super::scope::ScopeFilter;
use crate::archive::{extract_links, PageArchiver};
use crate::config::CrawlConfig;
use crate::render::Renderer;

// What happened to a single popped node
#[derive(Debug, PartialEq, Eq)]
enum NodeOutcome {
    /// Already visited or too deep; nothing was done
    Skipped,
    /// Loading or exporting failed; no artifact, no children
    Failed,
    /// Archived; these are its in-scope, not yet visited links
    Done(Vec<CrawlNode>),
}

/// Depth-first, scope-limited crawler
#[derive(Debug, Clone)]
pub struct CrawlEngine {
    scope: ScopeFilter,
    archiver: PageArchiver,
    max_depth: usize,
}

impl CrawlEngine {
    pub fn new(scope: ScopeFilter, archiver: PageArchiver, max_depth: usize) -> Self {
        Self {
            scope,
            archiver,
            max_depth,
        }
    }

    pub fn from_config(config: &CrawlConfig) -> Self {
        Self::new(
            ScopeFilter::new(config.seed_url.clone()),
            PageArchiver::new(config.output_dir.clone(), config.navigation_timeout)
                .wait_until(config.wait_until),
            config.max_depth,
        )
    }

    /// Crawls from the seed until there is nothing left to visit
    pub async fn run<R: Renderer + ?Sized>(&self, renderer: &mut R) -> CrawlReport {
        let mut registry = VisitedRegistry::new();
        let mut frontier = Frontier::with_seed(self.scope.seed());
        let mut report = CrawlReport::new(self.scope.seed(), self.max_depth);

        info!("Crawling {} (max depth {})", self.scope.seed(), self.max_depth);

        while let Some(node) = frontier.pop() {
            let outcome = self
                .process_node(renderer, &mut registry, &node, &mut report)
                .await;

            match outcome {
                NodeOutcome::Done(children) => frontier.push_children(children),
                NodeOutcome::Skipped => report.skipped += 1,
                NodeOutcome::Failed => {}
            }
        }

        info!(
            "Crawling complete: {} archived, {} failed, {} URLs visited",
            report.archived.len(),
            report.failed.len(),
            registry.len()
        );
        report
    }

    async fn process_node<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        registry: &mut VisitedRegistry,
        node: &CrawlNode,
        report: &mut CrawlReport,
    ) -> NodeOutcome {
        if node.depth > self.max_depth {
            debug!("Skipping {} (depth {} > {})", node.url, node.depth, self.max_depth);
            return NodeOutcome::Skipped;
        }
        if !registry.check_and_mark(&node.url) {
            debug!("Skipping {} (already visited)", node.url);
            return NodeOutcome::Skipped;
        }

        info!("Crawling [depth {}]: {}", node.depth, node.url);

        let artifact = match self.archiver.archive(renderer, &node.url).await {
            Ok(artifact) => artifact,
            Err(e) => {
                warn!("Failed to crawl {}: {}", node.url, e);
                report.failed.push(FailedPage::new(&e, node.depth));
                return NodeOutcome::Failed;
            }
        };
        info!("Saved PDF: {}", artifact.path.display());
        report.archived.push(artifact);

        // Children of the deepest level would all be skipped
        if node.depth >= self.max_depth {
            return NodeOutcome::Done(Vec::new());
        }

        let links = match extract_links(renderer, &node.url).await {
            Ok(links) => links,
            Err(e) => {
                warn!("{}", e);
                report.link_errors.push(FailedPage::new(&e, node.depth));
                return NodeOutcome::Done(Vec::new());
            }
        };

        let mut children = Vec::new();
        for link in links {
            if !self.scope.allows(&link) {
                report.out_of_scope += 1;
            } else if registry.has_visited(&link) {
                report.skipped += 1;
            } else {
                children.push(CrawlNode::new(link, node.depth + 1));
            }
        }

        debug!("{} has {} link(s) to follow", node.url, children.len());
        NodeOutcome::Done(children)
    }
}
