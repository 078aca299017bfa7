//! Reject-set snapshot store with lock-free reads.

use std::collections::HashSet;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// An immutable set of rejected usernames.
///
/// Built wholesale by [`RejectListStore::load`] and never mutated in
/// place: a reader holding a snapshot keeps it intact across reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectSet {
    users: HashSet<String>,
    case_insensitive: bool,
}

impl RejectSet {
    /// Parse free-form comma-delimited config text into a set.
    ///
    /// Tokens are trimmed, empty tokens dropped, duplicates collapsed.
    /// Parsing cannot fail: a malformed token costs that token, not the
    /// reload.
    #[must_use]
    pub fn parse(config_text: &str, case_insensitive: bool) -> Self {
        let users = config_text
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                if case_insensitive {
                    token.to_lowercase()
                } else {
                    token.to_owned()
                }
            })
            .collect();

        Self {
            users,
            case_insensitive,
        }
    }

    /// Whether `username` is rejected under this set's match policy.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        if self.case_insensitive {
            self.users.contains(&username.to_lowercase())
        } else {
            self.users.contains(username)
        }
    }

    /// Number of distinct rejected usernames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when no username is rejected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Holds the authoritative reject set behind an atomic pointer.
///
/// Readers take a snapshot ([`current`](Self::current)) and never block;
/// [`load`](Self::load) replaces the whole set in a single swap, so a
/// reader mid-lookup keeps the set it started with. `None` means no load
/// has happened yet, a distinct state from an explicitly loaded empty
/// set, so a startup race cannot silently admit everyone.
#[derive(Debug)]
pub struct RejectListStore {
    active: ArcSwapOption<RejectSet>,
    case_insensitive: bool,
}

impl RejectListStore {
    /// Store with the given match policy, not yet initialized.
    #[must_use]
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            active: ArcSwapOption::empty(),
            case_insensitive,
        }
    }

    /// Replace the active set with one parsed from `config_text`.
    ///
    /// Idempotent, non-blocking for concurrent readers; concurrent loads
    /// serialize at the swap, last writer wins.
    pub fn load(&self, config_text: &str) {
        let set = RejectSet::parse(config_text, self.case_insensitive);
        if set.is_empty() {
            tracing::warn!("reject list is empty, every username will be accepted");
        } else {
            tracing::info!(rejected = set.len(), "reject list loaded");
        }
        self.active.store(Some(Arc::new(set)));
    }

    /// Snapshot of the active set, `None` before the first
    /// [`load`](Self::load).
    #[must_use]
    pub fn current(&self) -> Option<Arc<RejectSet>> {
        self.active.load_full()
    }

    /// True once [`load`](Self::load) has run at least once; never reverts.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.active.load().is_some()
    }
}

impl Default for RejectListStore {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_deduplicates() {
        let set = RejectSet::parse("alice, bob ,carol,alice,, ,", false);

        assert_eq!(set.len(), 3);
        assert!(set.contains("alice"));
        assert!(set.contains("bob"));
        assert!(set.contains("carol"));
        assert!(!set.contains("dave"));
    }

    #[test]
    fn parse_of_blank_text_is_empty() {
        assert!(RejectSet::parse("", false).is_empty());
        assert!(RejectSet::parse("   ", false).is_empty());
        assert!(RejectSet::parse(",,,", false).is_empty());
    }

    #[test]
    fn exact_match_is_case_sensitive() {
        let set = RejectSet::parse("Alice", false);

        assert!(set.contains("Alice"));
        assert!(!set.contains("alice"));
        assert!(!set.contains("ALICE"));
    }

    #[test]
    fn case_insensitive_match_normalizes_both_sides() {
        let set = RejectSet::parse("Alice", true);

        assert!(set.contains("alice"));
        assert!(set.contains("ALICE"));
        assert!(set.contains("Alice"));
    }

    #[test]
    fn store_starts_uninitialized() {
        let store = RejectListStore::default();

        assert!(!store.is_initialized());
        assert!(store.current().is_none());
    }

    #[test]
    fn blank_load_initializes_to_empty() {
        let store = RejectListStore::default();
        store.load("");

        assert!(store.is_initialized());
        let set = store.current().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn load_is_idempotent() {
        let store = RejectListStore::default();
        store.load("alice, bob ,carol");
        let first = store.current().unwrap();

        store.load("alice, bob ,carol");
        let second = store.current().unwrap();

        assert_eq!(*first, *second);
    }

    #[test]
    fn readers_keep_their_snapshot_across_reload() {
        let store = RejectListStore::default();
        store.load("alice");
        let snapshot = store.current().unwrap();

        store.load("bob");

        assert!(snapshot.contains("alice"));
        assert!(!snapshot.contains("bob"));
        let fresh = store.current().unwrap();
        assert!(fresh.contains("bob"));
        assert!(!fresh.contains("alice"));
    }

    #[test]
    fn concurrent_readers_never_observe_a_partial_set() {
        let store = Arc::new(RejectListStore::default());
        let old = RejectSet::parse("alice,bob,carol", false);
        let new = RejectSet::parse("dave,erin,frank", false);
        store.load("alice,bob,carol");

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let old = old.clone();
                let new = new.clone();
                std::thread::spawn(move || {
                    for _ in 0..10_000 {
                        let set = store.current().unwrap();
                        assert!(*set == old || *set == new, "observed a mixed set");
                    }
                })
            })
            .collect();

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 0..1_000 {
                    if i % 2 == 0 {
                        store.load("dave,erin,frank");
                    } else {
                        store.load("alice,bob,carol");
                    }
                }
            })
        };

        for reader in readers {
            reader.join().unwrap();
        }
        writer.join().unwrap();
    }
}
