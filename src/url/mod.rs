//! URL handling module for linkrake
//!
//! This module provides href-to-absolute resolution, base (origin-only)
//! reduction, and the canonicalization mode switch used for dedup and
//! blacklist comparison.

mod base;
mod resolve;

use serde::Serialize;

// Re-export main functions
pub use base::to_base;
pub use resolve::resolve_href;

/// Canonical form applied to discovered links before dedup and blacklist
/// comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalMode {
    /// Use the absolute URL (fragment already stripped) as-is
    Full,

    /// Reduce the absolute URL to its scheme + host\[:port\] base form
    #[default]
    Base,
}

impl CanonicalMode {
    /// Applies this mode to an already-resolved absolute URL.
    pub fn canonicalize(&self, absolute_url: &str) -> String {
        match self {
            Self::Full => absolute_url.to_string(),
            Self::Base => to_base(absolute_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_base() {
        assert_eq!(CanonicalMode::default(), CanonicalMode::Base);
    }

    #[test]
    fn test_full_mode_passes_through() {
        let url = "http://host.example/search?q=1";
        assert_eq!(CanonicalMode::Full.canonicalize(url), url);
    }

    #[test]
    fn test_base_mode_reduces_to_origin() {
        assert_eq!(
            CanonicalMode::Base.canonicalize("http://host.example/search?q=1"),
            "http://host.example"
        );
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let urls = [
            "http://www.example.com/search?q=1337",
            "https://example.com/",
            "http://host.example:8080/a/b/c",
            "https://example.com/page?a=1&b=2",
        ];

        for mode in [CanonicalMode::Full, CanonicalMode::Base] {
            for url in urls {
                let once = mode.canonicalize(url);
                let twice = mode.canonicalize(&once);
                assert_eq!(once, twice, "mode {:?} not idempotent for {}", mode, url);
            }
        }
    }
}
