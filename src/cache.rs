//! Per-formula memo tables.
//!
//! The manager keeps one [`Cache`] for truth tables and one for one-step
//! equivalents, both keyed by [`Ref`]. A formula behind a handle never
//! changes, so an entry is computed once and kept for the lifetime of the
//! manager. Nothing is evicted or invalidated. Hit and miss counters are
//! exposed through [`Logic::truth_table_cache`] and
//! [`Logic::equivalents_cache`].
//!
//! [`Ref`]: crate::reference::Ref
//! [`Logic::truth_table_cache`]: crate::logic::Logic::truth_table_cache
//! [`Logic::equivalents_cache`]: crate::logic::Logic::equivalents_cache

use std::collections::HashMap;
use std::hash::Hash;

pub struct Cache<K, V> {
    entries: HashMap<K, V>,
    hits: usize,
    misses: usize,
}

impl<K, V> Cache<K, V> {
    /// Creates an empty cache with room for `2^bits` results (capped at `2^20`).
    pub fn new(bits: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(1 << bits.min(20)),
            hits: 0,
            misses: 0,
        }
    }

    /// Number of memoized formulas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute the result.
    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl<K: Hash + Eq, V> Cache<K, V> {
    /// Looks up the memoized result for `key`, counting the outcome.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let res = self.entries.get(key);
        if res.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        res
    }

    /// Records the result for `key`. A key is only ever inserted once.
    pub fn insert(&mut self, key: K, value: V) {
        let old = self.entries.insert(key, value);
        debug_assert!(old.is_none(), "result memoized twice");
    }
}
