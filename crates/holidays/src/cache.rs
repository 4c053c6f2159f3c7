//! Year-keyed memoization seam.

use std::collections::BTreeMap;

/// A store of per-year results.
///
/// Holiday dates are fixed historical facts, so entries never expire.
/// A cache that forgets everything is still correct, only slower.
pub trait YearCache<V> {
    /// Returns the cached value for `year`, if any.
    fn get(&self, year: i32) -> Option<V>;

    /// Stores `value` for `year`, replacing any previous entry.
    fn put(&mut self, year: i32, value: V);
}

/// In-process cache backed by a `BTreeMap`.
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    entries: BTreeMap<i32, V>,
}

impl<V> MemoryCache<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of cached years.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over cached entries in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &V)> {
        self.entries.iter().map(|(&year, value)| (year, value))
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> YearCache<V> for MemoryCache<V> {
    fn get(&self, year: i32) -> Option<V> {
        self.entries.get(&year).cloned()
    }

    fn put(&mut self, year: i32, value: V) {
        self.entries.insert(year, value);
    }
}
