//! Linkrake: a depth-bounded link harvester
//!
//! This crate implements a crawler that renders a seed list of URLs one depth
//! level at a time, collecting the outbound links of every page, canonicalizing
//! and deduplicating them, and filtering blacklisted entries before they can
//! propagate into the next depth's frontier.

pub mod blacklist;
pub mod config;
pub mod crawler;
pub mod render;
pub mod report;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for linkrake operations
#[derive(Debug, Error)]
pub enum LinkrakeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// The only failures that terminate the process before any crawling happens.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Seed list not found: {0}")]
    SeedListNotFound(String),

    #[error("Failed to read list file {path}: {source}")]
    ListIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
///
/// A link that produces one of these is dropped; it never aborts a crawl.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Renderer errors
///
/// Any of these makes the affected target yield an empty link set for its
/// depth; the crawl itself continues.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Navigation failed for {url}: HTTP {status}")]
    Navigation { url: String, status: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Render timeout for {url}")]
    Timeout { url: String },
}

/// Result type alias for linkrake operations
pub type Result<T> = std::result::Result<T, LinkrakeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use blacklist::Blacklist;
pub use config::Config;
pub use crawler::{crawl, Controller};
pub use render::{HttpRenderer, RenderedPage, Renderer};
pub use report::{CrawlOutcome, CrawlReport, DepthResult, TargetResult};
pub use state::{collapse, SeenTargets};
pub use url::{resolve_href, to_base, CanonicalMode};
