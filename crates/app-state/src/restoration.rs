//! Saved-state registry
//!
//! Keeps the local state of each navigation destination alive while the
//! destination is off screen, so returning to it shows exactly what was left
//! behind instead of a freshly mounted screen.

use std::collections::HashMap;
use std::hash::Hash;

/// Per-destination state cache
///
/// Entries are created lazily on first mount and live as long as the
/// registry.
#[derive(Debug)]
pub struct SavedStateRegistry<K, V> {
    entries: HashMap<K, V>,
    mounts: u64,
}

impl<K, V> Default for SavedStateRegistry<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            mounts: 0,
        }
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug, V> SavedStateRegistry<K, V> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state for `key`, creating it with `init` on first mount
    pub fn get_or_mount(&mut self, key: &K, init: impl FnOnce() -> V) -> &mut V {
        let mounts = &mut self.mounts;
        self.entries.entry(key.clone()).or_insert_with(|| {
            tracing::debug!(?key, "mounting destination state");
            *mounts += 1;
            init()
        })
    }

    /// Get the saved state for `key` if it has been mounted
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check whether `key` has live state
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over every live state
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// Total number of mounts performed
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }
}
