// src/render/idle.rs
// =============================================================================
// Network-idle detection.
//
// `page.goto()` returns once the load event fires, but documentation sites
// often keep fetching (fonts, lazy images, client-side navigation data) after
// that. Printing too early gives half-rendered PDFs.
//
// Heuristic:
// 1. Poll the page every `poll_interval`
// 2. Ask for document.readyState and the number of resource timing entries
// 3. Once readyState is "complete" and the entry count has not changed for
//    `quiet_period`, the page is considered idle
//
// There is no upper bound in here; the caller wraps the whole navigation in
// a timeout.
// =============================================================================

use chromiumoxide::Page;
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::error::RenderError;

const IDLE_PROBE_SCRIPT: &str = r"
    (() => ({
        readyState: document.readyState,
        resources: performance.getEntriesByType('resource').length
    }))()
";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdleProbe {
    ready_state: String,
    resources: u64,
}

/// Tuning for the idle wait
#[derive(Debug, Clone, Copy)]
pub struct IdleHeuristic {
    pub poll_interval: Duration,
    pub quiet_period: Duration,
}

impl Default for IdleHeuristic {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            quiet_period: Duration::from_millis(500),
        }
    }
}

// Tracks the last observed resource count and since when it has been stable
#[derive(Debug, Default)]
struct QuietTracker {
    last_count: Option<u64>,
    stable_since: Option<Instant>,
}

impl QuietTracker {
    // Records one observation, returns true once the page has been quiet long enough
    fn observe(&mut self, complete: bool, count: u64, now: Instant, quiet_period: Duration) -> bool {
        if !complete || self.last_count != Some(count) {
            self.last_count = Some(count);
            self.stable_since = Some(now);
            return false;
        }

        match self.stable_since {
            Some(since) => now.duration_since(since) >= quiet_period,
            None => {
                self.stable_since = Some(now);
                false
            }
        }
    }
}

/// Waits until `page` has stopped loading resources
pub async fn wait_for_network_idle(page: &Page, heuristic: IdleHeuristic) -> Result<(), RenderError> {
    let started = Instant::now();
    let mut tracker = QuietTracker::default();

    loop {
        let probe: IdleProbe = page
            .evaluate(IDLE_PROBE_SCRIPT)
            .await?
            .into_value()
            .map_err(|e| RenderError::Other(format!("unexpected idle probe result: {e}")))?;

        let complete = probe.ready_state == "complete";
        if tracker.observe(complete, probe.resources, Instant::now(), heuristic.quiet_period) {
            tracing::debug!(
                "network idle after {:.2}s ({} resources)",
                started.elapsed().as_secs_f64(),
                probe.resources
            );
            return Ok(());
        }

        tokio::time::sleep(heuristic.poll_interval).await;
    }
}
