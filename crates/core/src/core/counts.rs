//! Insertion-ordered frequency counting.
//!
//! Every tie-break in training and cataloguing resolves to "first discovered
//! wins", so counts are kept in a `Vec` in discovery order with an `AHashMap`
//! index on the side instead of relying on hash map iteration order.

use ahash::AHashMap;
use std::hash::Hash;

/// Accumulating counter that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct OrderedCounts<K> {
    /// (key, count) in first-insertion order
    entries: Vec<(K, u64)>,
    /// Key -> position in `entries`
    index: AHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> OrderedCounts<K> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Create an empty counter with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Add `count` to `key`, appending it if it has not been seen yet.
    ///
    /// Returns the accumulated count.
    pub fn add(&mut self, key: K, count: u64) -> u64 {
        match self.index.get(&key) {
            Some(&pos) => {
                self.entries[pos].1 += count;
                self.entries[pos].1
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
                count
            }
        }
    }

    /// Get the accumulated count for a key.
    #[inline]
    pub fn get(&self, key: &K) -> Option<u64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    /// Check whether a key has been seen.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, count)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// The entry with the strictly highest count; ties go to the earliest key.
    pub fn max_first(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best
    }

    /// Consume the counter, yielding entries in first-insertion order.
    pub fn into_entries(self) -> Vec<(K, u64)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone> Default for OrderedCounts<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<(K, u64)> for OrderedCounts<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (key, count) in iter {
            counts.add(key, count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_in_place() {
        let mut counts = OrderedCounts::new();
        counts.add("b", 1);
        counts.add("a", 2);
        assert_eq!(counts.add("b", 4), 5);

        let order: Vec<_> = counts.iter().collect();
        assert_eq!(order, vec![(&"b", 5), (&"a", 2)]);
    }

    #[test]
    fn test_max_first_prefers_earliest_on_tie() {
        let counts: OrderedCounts<&str> = [("x", 1), ("y", 3), ("z", 3)].into_iter().collect();
        assert_eq!(counts.max_first(), Some((&"y", 3)));
    }

    #[test]
    fn test_max_first_empty() {
        let counts: OrderedCounts<u32> = OrderedCounts::new();
        assert!(counts.max_first().is_none());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_get_and_contains() {
        let mut counts = OrderedCounts::with_capacity(4);
        counts.add(7u32, 2);
        assert_eq!(counts.get(&7), Some(2));
        assert_eq!(counts.get(&8), None);
        assert!(counts.contains(&7));
        assert_eq!(counts.len(), 1);
    }
}
