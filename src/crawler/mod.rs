//! Crawler module: the depth-bounded orchestration engine
//!
//! This module drives the whole crawl:
//! - rendering every frontier target through the `Renderer` collaborator
//! - resolving, deduplicating and canonicalizing the extracted links
//! - filtering blacklisted entries out of the next frontier
//! - deciding after each depth whether to continue or stop

mod controller;

pub use controller::Controller;

use crate::blacklist::Blacklist;
use crate::config::{validate, Config};
use crate::render::HttpRenderer;
use crate::report::CrawlReport;
use crate::Result;
use std::sync::Arc;

/// Runs a complete crawl with the bundled HTTP renderer.
///
/// Validates the configuration, builds the renderer, and drives the
/// controller over the seeds until the frontier dries up or the depth limit
/// is hit. Render failures along the way surface as empty link sets in the
/// report, never as errors from this function.
pub async fn crawl(config: Config, seeds: Vec<String>, blacklist: Blacklist) -> Result<CrawlReport> {
    validate(&config)?;

    let renderer = Arc::new(HttpRenderer::new(config.render_timeout)?);
    let controller = Controller::new(config, renderer, blacklist);

    Ok(controller.run(seeds).await)
}
