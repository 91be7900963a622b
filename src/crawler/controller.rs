//! Crawl controller - the depth loop itself
//!
//! The controller is the single owner of all mutable crawl state. Renders
//! within one depth run concurrently through a bounded fan-out, but their
//! results are merged sequentially by the one task draining the join set,
//! and depths never overlap: depth N+1's frontier exists only once every
//! target of depth N has finished rendering, canonicalizing and filtering.

use crate::blacklist::Blacklist;
use crate::config::Config;
use crate::render::{RenderedPage, Renderer};
use crate::report::{CrawlOutcome, CrawlReport, DepthResult, TargetResult};
use crate::state::{collapse, SeenTargets};
use crate::url::resolve_href;
use crate::RenderError;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;

/// Depth-bounded crawl controller
///
/// Owns the cumulative seen set and the growing report; both start empty,
/// grow through the depth loop, and are handed off whole when `run`
/// returns.
pub struct Controller {
    config: Config,
    renderer: Arc<dyn Renderer>,
    blacklist: Blacklist,
    seen: SeenTargets,
    report: CrawlReport,
}

impl Controller {
    /// Creates a controller over a renderer and a blacklist.
    pub fn new(config: Config, renderer: Arc<dyn Renderer>, blacklist: Blacklist) -> Self {
        let report = CrawlReport::new(config.max_depth, config.mode);
        Self {
            config,
            renderer,
            blacklist,
            seen: SeenTargets::new(),
            report,
        }
    }

    /// Runs the crawl to completion and returns the full report.
    ///
    /// Per depth, starting at 1:
    /// 1. Render every frontier target (bounded fan-out, per-render timeout);
    ///    a failed render yields an empty link set but the target still
    ///    counts as seen.
    /// 2. Resolve each href against its page's final URL, dropping
    ///    unresolvable and non-http links, and collapse to `result_set`.
    /// 3. Canonicalize per the configured mode and collapse to `result_base`.
    /// 4. Filter `result_base` through the blacklist to `result_after_filter`.
    /// 5. Record all three sets per target, along with the pre-depth
    ///    snapshot of the seen set.
    /// 6. Union the filtered sets, mark the whole frontier seen, and subtract
    ///    the seen set to form the next frontier.
    /// 7. Stop on an empty frontier or at the depth limit.
    pub async fn run(mut self, seeds: Vec<String>) -> CrawlReport {
        let mut frontier = collapse(seeds);
        self.report.run.seed_count = frontier.len();
        let mut depth: u32 = 1;

        tracing::info!(
            "starting crawl: {} seed targets, max depth {}",
            frontier.len(),
            self.config.max_depth
        );

        let outcome = loop {
            if frontier.is_empty() {
                break CrawlOutcome::FrontierExhausted;
            }

            tracing::info!("depth {}: rendering {} targets", depth, frontier.len());
            let depth_result = self.render_depth(&frontier).await;

            // Candidate pool: union of every target's filtered set
            let pool: BTreeSet<String> = depth_result
                .targets
                .values()
                .flat_map(|target| target.result_after_filter.iter().cloned())
                .collect();

            self.seen.extend(frontier.iter().cloned());
            self.report.record_depth(depth, depth_result);

            let next_frontier = self.seen.next_frontier(&pool);
            tracing::debug!(
                "depth {}: {} candidates, {} new after subtracting {} seen",
                depth,
                pool.len(),
                next_frontier.len(),
                self.seen.len()
            );

            if next_frontier.is_empty() {
                break CrawlOutcome::FrontierExhausted;
            }
            if depth == self.config.max_depth {
                break CrawlOutcome::DepthLimitReached;
            }

            depth += 1;
            frontier = next_frontier;
        };

        tracing::info!(
            "crawl finished after {} depth(s): {:?}, {} targets seen",
            self.report.depth_count(),
            outcome,
            self.seen.len()
        );
        self.report.finish(outcome);
        self.report
    }

    /// Renders one depth's frontier and assembles its `DepthResult`.
    ///
    /// Targets are independent, so they render concurrently up to the
    /// configured fan-out; this method is the single place their results
    /// are merged.
    async fn render_depth(&self, frontier: &BTreeSet<String>) -> DepthResult {
        let seen_before = self.seen.snapshot();
        let permits = Arc::new(Semaphore::new(self.config.fan_out));
        let mut renders: JoinSet<(String, Result<RenderedPage, RenderError>)> = JoinSet::new();

        for target in frontier.iter().cloned() {
            let renderer = Arc::clone(&self.renderer);
            let permits = Arc::clone(&permits);
            let budget = self.config.render_timeout;

            renders.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .expect("render semaphore closed");

                let outcome = match timeout(budget, renderer.extract_links(&target)).await {
                    Ok(result) => result,
                    Err(_) => Err(RenderError::Timeout {
                        url: target.clone(),
                    }),
                };

                (target, outcome)
            });
        }

        let mut depth_result = DepthResult {
            targets: Default::default(),
            seen_before,
        };

        while let Some(joined) = renders.join_next().await {
            let (target, outcome) = match joined {
                Ok(pair) => pair,
                Err(e) => {
                    // The target still counts as seen via the frontier; it
                    // just contributes nothing to this depth.
                    tracing::error!("render task failed: {}", e);
                    continue;
                }
            };

            let page = match outcome {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("render failed, recording empty result: {}", e);
                    RenderedPage {
                        final_url: target.clone(),
                        hrefs: Vec::new(),
                    }
                }
            };

            depth_result
                .targets
                .insert(target, self.collect_target(&page));
        }

        depth_result
    }

    /// Builds the three per-target sets from a rendered page.
    fn collect_target(&self, page: &RenderedPage) -> TargetResult {
        let resolved = page.hrefs.iter().filter_map(|href| {
            match resolve_href(href, &page.final_url) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::debug!("dropping link {:?}: {}", href, e);
                    None
                }
            }
        });
        let result_set = collapse(resolved);

        let result_base = collapse(
            result_set
                .iter()
                .map(|url| self.config.mode.canonicalize(url)),
        );

        let result_after_filter = self.blacklist.filter(&result_base);

        TargetResult {
            result_set,
            result_base,
            result_after_filter,
        }
    }
}
