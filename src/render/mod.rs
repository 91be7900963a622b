//! Rendering module: loading a target and reading its outbound hrefs
//!
//! The controller only ever talks to the `Renderer` trait; the bundled
//! `HttpRenderer` fetches pages over HTTP and reads anchors out of the
//! returned document. Hrefs come back raw, exactly as written in the page —
//! resolving them against the page's final URL is the canonicalizer's job.

mod http;
mod page;

pub use http::HttpRenderer;
pub use page::extract_hrefs;

use crate::RenderError;
use async_trait::async_trait;

/// A rendered page: where navigation finally landed plus the raw hrefs
/// found there
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Final URL after any redirects
    pub final_url: String,

    /// Raw href attributes, unresolved
    pub hrefs: Vec<String>,
}

/// External collaborator that loads a target URL and reports its links
///
/// Implementations must be shareable across concurrent render tasks; the
/// controller holds one behind an `Arc` and calls it for every frontier
/// target.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Loads `target` and returns its final URL plus the raw hrefs found on
    /// the page.
    async fn extract_links(&self, target: &str) -> Result<RenderedPage, RenderError>;
}
