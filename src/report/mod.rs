//! Report module: the structured record of a whole crawl
//!
//! Every depth contributes one `DepthResult`; once recorded it is never
//! touched again. The assembled `CrawlReport` is handed off whole to the
//! writers in this module when the crawl ends.

mod writer;

pub use writer::{write_flat, write_json, DEFAULT_RESULT_PATH};

use crate::url::CanonicalMode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Why the crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlOutcome {
    /// The next frontier came up empty before the depth limit
    FrontierExhausted,

    /// The configured maximum depth was reached
    DepthLimitReached,
}

/// Link sets collected for a single rendered target
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetResult {
    /// Deduplicated absolute URLs extracted from the page
    pub result_set: BTreeSet<String>,

    /// `result_set` after canonicalization, deduplicated again
    pub result_base: BTreeSet<String>,

    /// `result_base` minus blacklisted entries; feeds the next frontier
    pub result_after_filter: BTreeSet<String>,
}

/// Everything recorded for one depth level
#[derive(Debug, Clone, Default, Serialize)]
pub struct DepthResult {
    /// Per-target link sets for this depth's frontier
    pub targets: BTreeMap<String, TargetResult>,

    /// Targets already seen before this depth began
    pub seen_before: BTreeSet<String>,
}

/// Run-level metadata carried alongside the per-depth results
#[derive(Debug, Clone, Serialize)]
pub struct RunInfo {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub max_depth: u32,
    pub mode: CanonicalMode,
    pub seed_count: usize,
    pub outcome: Option<CrawlOutcome>,
}

/// Ordered record of the whole run, keyed by depth index starting at 1
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub run: RunInfo,
    pub depths: BTreeMap<u32, DepthResult>,
}

impl CrawlReport {
    pub fn new(max_depth: u32, mode: CanonicalMode) -> Self {
        Self {
            run: RunInfo {
                started_at: Utc::now(),
                finished_at: None,
                max_depth,
                mode,
                seed_count: 0,
                outcome: None,
            },
            depths: BTreeMap::new(),
        }
    }

    /// Records a completed depth. Depth indices must arrive strictly
    /// increasing from 1.
    pub fn record_depth(&mut self, depth: u32, result: DepthResult) {
        debug_assert!(
            self.depths.keys().all(|&recorded| recorded < depth),
            "depth {} recorded out of order",
            depth
        );
        self.depths.insert(depth, result);
    }

    /// Stamps the report as finished with the reason the crawl stopped.
    pub fn finish(&mut self, outcome: CrawlOutcome) {
        self.run.finished_at = Some(Utc::now());
        self.run.outcome = Some(outcome);
    }

    pub fn depth_count(&self) -> usize {
        self.depths.len()
    }

    pub fn depth(&self, depth: u32) -> Option<&DepthResult> {
        self.depths.get(&depth)
    }

    pub fn outcome(&self) -> Option<CrawlOutcome> {
        self.run.outcome
    }

    /// Flat union of every target's `result_set` across the whole run.
    pub fn all_urls(&self) -> BTreeSet<String> {
        self.depths
            .values()
            .flat_map(|depth| depth.targets.values())
            .flat_map(|target| target.result_set.iter().cloned())
            .collect()
    }
}
