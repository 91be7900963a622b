use crate::url::CanonicalMode;
use std::time::Duration;

/// Crawl configuration handed to the controller at construction
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum depth to crawl; depth 1 is the seed round itself
    pub max_depth: u32,

    /// Canonical form applied before dedup and blacklist comparison
    pub mode: CanonicalMode,

    /// Maximum number of concurrent renders within one depth
    pub fan_out: usize,

    /// Budget for a single render; a render that outlives it counts as failed
    pub render_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 1,
            mode: CanonicalMode::Base,
            fan_out: 4,
            render_timeout: Duration::from_secs(30),
        }
    }
}
