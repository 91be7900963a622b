//! Exact-match blacklist gating propagation between depths
//!
//! Blacklisted URLs still show up in the per-target report sets; the filter
//! only keeps them out of the next depth's frontier.

use std::collections::BTreeSet;

/// Set of exact-match URL strings excluded from frontier propagation
///
/// Matching is raw string equality: no case folding, no wildcards, no
/// trailing-slash tolerance.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: BTreeSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from its entries. An empty iterator yields a
    /// no-op filter.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// An empty blacklist; filtering with it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true iff `url` exactly matches one of the entries.
    pub fn is_listed(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    /// Drops every candidate that exactly matches a blacklist entry.
    pub fn filter(&self, candidates: &BTreeSet<String>) -> BTreeSet<String> {
        candidates
            .iter()
            .filter(|candidate| !self.is_listed(candidate))
            .cloned()
            .collect()
    }
}
