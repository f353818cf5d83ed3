//! Most-recently-used list maintenance
//!
//! An MRU list is most-recent first, holds each repository at most once and
//! never exceeds the configured bound. Everything here is pure: loading and
//! saving the list is the job of [`crate::state::MruStore`].

use std::collections::HashSet;

/// A full repository list split for presentation.
///
/// `recent` keeps MRU order, `remaining` keeps the full list's order, and no
/// repository appears in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Repositories from the MRU list that still exist, most recent first
    pub recent: Vec<String>,
    /// Every other repository, in the order the source listed them
    pub remaining: Vec<String>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.remaining.is_empty()
    }

    /// Total number of selectable repositories.
    pub fn len(&self) -> usize {
        self.recent.len() + self.remaining.len()
    }
}

/// Split `full_list` into a recent prefix and a remaining suffix.
///
/// MRU entries that are not in `full_list` are dropped from `recent` but
/// are not otherwise touched.
pub fn partition(full_list: &[String], mru: &[String]) -> Partition {
    let available: HashSet<&str> = full_list.iter().map(String::as_str).collect();

    let recent: Vec<String> = mru
        .iter()
        .filter(|repo| available.contains(repo.as_str()))
        .cloned()
        .collect();

    let in_recent: HashSet<&str> = recent.iter().map(String::as_str).collect();
    let remaining = full_list
        .iter()
        .filter(|repo| !in_recent.contains(repo.as_str()))
        .cloned()
        .collect();

    Partition { recent, remaining }
}

/// Promote `identifier` to the front of the MRU list.
///
/// The rest of `current_mru` keeps its relative order, and the result is cut
/// to `max_entries`. A bound of zero disables tracking.
pub fn record_opened(identifier: &str, current_mru: &[String], max_entries: usize) -> Vec<String> {
    let mut next = uniq_preserve_order(
        std::iter::once(identifier.to_string()).chain(current_mru.iter().cloned()),
    );
    next.truncate(max_entries);
    next
}

/// Drop `identifier` from the MRU list, keeping the order of the rest.
pub fn forget(identifier: &str, current_mru: &[String]) -> Vec<String> {
    current_mru
        .iter()
        .filter(|repo| repo.as_str() != identifier)
        .cloned()
        .collect()
}

/// Remove duplicates, keeping the first occurrence of each item.
pub fn uniq_preserve_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_drops_stale_mru_entries() {
        let full = strings(&["a/b", "c/d", "e/f"]);
        let mru = strings(&["e/f", "z/missing"]);

        let p = partition(&full, &mru);

        assert_eq!(p.recent, strings(&["e/f"]));
        assert_eq!(p.remaining, strings(&["a/b", "c/d"]));
    }

    #[test]
    fn test_partition_empty_inputs() {
        let p = partition(&[], &[]);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_partition_keeps_mru_order_not_list_order() {
        let full = strings(&["a", "b", "c", "d"]);
        let mru = strings(&["d", "b"]);

        let p = partition(&full, &mru);

        assert_eq!(p.recent, strings(&["d", "b"]));
        assert_eq!(p.remaining, strings(&["a", "c"]));
    }

    #[test]
    fn test_record_opened_promotes_existing() {
        let mru = strings(&["a", "b", "c"]);
        assert_eq!(record_opened("b", &mru, 5), strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_record_opened_truncates() {
        let mru = strings(&["a", "b", "c"]);
        assert_eq!(record_opened("z", &mru, 2), strings(&["z", "a"]));
    }

    #[test]
    fn test_record_opened_zero_bound_disables_tracking() {
        let mru = strings(&["a", "b"]);
        assert!(record_opened("a", &mru, 0).is_empty());
    }

    #[test]
    fn test_forget_removes_only_target() {
        let mru = strings(&["a", "b", "c"]);
        assert_eq!(forget("b", &mru), strings(&["a", "c"]));
        assert_eq!(forget("missing", &mru), mru);
    }

    #[test]
    fn test_uniq_preserve_order_first_wins() {
        let items = strings(&["b", "a", "b", "c", "a"]);
        assert_eq!(uniq_preserve_order(items), strings(&["b", "a", "c"]));
    }
}
