use std::collections::BTreeSet;

/// Collapses a sequence of URLs into a duplicate-free set.
///
/// Insertion order is irrelevant; the result is ordered so report output is
/// deterministic.
pub fn collapse<I, S>(urls: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    urls.into_iter().map(Into::into).collect()
}

/// Cumulative set of every target rendered in any prior or current depth
///
/// Grows monotonically over a run and never shrinks; subtracting it from a
/// candidate pool is what keeps a target from ever being rendered twice.
#[derive(Debug, Clone, Default)]
pub struct SeenTargets {
    seen: BTreeSet<String>,
}

impl SeenTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, target: &str) -> bool {
        self.seen.contains(target)
    }

    /// Marks a whole depth's targets as seen.
    pub fn extend<I>(&mut self, targets: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.seen.extend(targets);
    }

    /// Copies the current contents, used for the pre-depth snapshot recorded
    /// in each depth's report entry.
    pub fn snapshot(&self) -> BTreeSet<String> {
        self.seen.clone()
    }

    /// Computes `candidates − seen`: the targets that survive into the next
    /// depth's frontier.
    pub fn next_frontier(&self, candidates: &BTreeSet<String>) -> BTreeSet<String> {
        candidates.difference(&self.seen).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_dedups() {
        let collapsed = collapse(["http://a.test", "http://a.test", "http://b.test"]);
        assert_eq!(collapsed.len(), 2);
        assert!(collapsed.contains("http://a.test"));
        assert!(collapsed.contains("http://b.test"));
    }

    #[test]
    fn test_collapse_order_irrelevant() {
        let forward = collapse(["http://a.test", "http://b.test"]);
        let backward = collapse(["http://b.test", "http://a.test"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_collapse_empty() {
        let collapsed = collapse(Vec::<String>::new());
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_seen_grows_monotonically() {
        let mut seen = SeenTargets::new();
        assert!(seen.is_empty());

        seen.extend(["http://a.test".to_string()]);
        seen.extend(["http://b.test".to_string()]);
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("http://a.test"));
        assert!(seen.contains("http://b.test"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut seen = SeenTargets::new();
        seen.extend(["http://a.test".to_string()]);

        let snapshot = seen.snapshot();
        seen.extend(["http://b.test".to_string()]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_next_frontier_subtracts_seen() {
        let mut seen = SeenTargets::new();
        seen.extend(["http://a.test".to_string()]);

        let candidates = collapse(["http://a.test", "http://b.test"]);
        let frontier = seen.next_frontier(&candidates);

        assert_eq!(frontier, collapse(["http://b.test"]));
    }

    #[test]
    fn test_next_frontier_empty_when_all_seen() {
        let mut seen = SeenTargets::new();
        seen.extend(["http://a.test".to_string(), "http://b.test".to_string()]);

        let candidates = collapse(["http://a.test", "http://b.test"]);
        assert!(seen.next_frontier(&candidates).is_empty());
    }
}
