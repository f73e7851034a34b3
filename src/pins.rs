//! pins.rs — the user's watchlist: a set of asset ids that always surface
//! first in the ordered view. Single writer (the toggle handler), copy-on-read
//! for everyone else, so the ordering engine never observes a half-updated
//! set. Lives in app state for the process lifetime; survives record
//! refreshes, cleared only by explicit user action.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::model::Identifier;

#[derive(Debug, Default)]
pub struct PinSet {
    inner: RwLock<HashSet<Identifier>>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one id's membership; returns whether the id is pinned afterwards.
    pub fn toggle(&self, id: &str) -> bool {
        let mut set = self.inner.write().expect("pinset rwlock poisoned");
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner
            .read()
            .expect("pinset rwlock poisoned")
            .contains(id)
    }

    /// Detached copy for a single pipeline run; later toggles do not affect
    /// an ordering already in flight.
    pub fn snapshot(&self) -> HashSet<Identifier> {
        self.inner.read().expect("pinset rwlock poisoned").clone()
    }

    pub fn clear(&self) {
        self.inner.write().expect("pinset rwlock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("pinset rwlock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let pins = PinSet::new();
        assert!(pins.toggle("dogecoin"));
        assert!(pins.contains("dogecoin"));
        assert!(!pins.toggle("dogecoin"));
        assert!(!pins.contains("dogecoin"));
        assert!(pins.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_toggles() {
        let pins = PinSet::new();
        pins.toggle("bitcoin");
        let snap = pins.snapshot();
        pins.toggle("ethereum");
        assert!(snap.contains("bitcoin"));
        assert!(!snap.contains("ethereum"));
        assert_eq!(pins.len(), 2);
    }

    #[test]
    fn clear_empties_the_set() {
        let pins = PinSet::new();
        pins.toggle("bitcoin");
        pins.toggle("ethereum");
        pins.clear();
        assert!(pins.is_empty());
    }
}
