//! Insertion-ordered multiset standing in for main memory.
//!
//! Values may be written any number of times; every write is kept. A fetch
//! consumes a single occurrence (the earliest one), leaving later duplicates in
//! place.
//!
//! ## Architecture
//!
//! ```text
//!   entries: Vec<T>                      counts: FxHashMap<T, usize>
//!   [x] ─ [y] ─ [x] ─ [z]                ┌─────┬───┐
//!    ▲ oldest          ▲ newest          │  x  │ 2 │
//!                                        │  y  │ 1 │
//!                                        │  z  │ 1 │
//!                                        └─────┴───┘
//! ```
//!
//! `counts` answers membership without scanning; `entries` keeps the order the
//! values arrived in for display.

use std::hash::Hash;
use std::slice;

use rustc_hash::FxHashMap;

/// Unbounded multiset of values with stable insertion order.
#[derive(Debug, Clone)]
pub struct MainMemory<T>
where
    T: Eq + Hash,
{
    entries: Vec<T>,
    counts: FxHashMap<T, usize>,
}

impl<T> Default for MainMemory<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            counts: FxHashMap::default(),
        }
    }
}

impl<T> MainMemory<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty main memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored occurrences, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if at least one occurrence of `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }

    /// Number of stored occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Appends one occurrence of `value`.
    pub fn push(&mut self, value: T) {
        *self.counts.entry(value.clone()).or_insert(0) += 1;
        self.entries.push(value);
    }

    /// Removes the earliest occurrence of `value`; returns `false` if absent.
    pub fn take_one(&mut self, value: &T) -> bool {
        let Some(count) = self.counts.get_mut(value) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(value);
        }
        if let Some(idx) = self.entries.iter().position(|v| v == value) {
            self.entries.remove(idx);
        }
        true
    }

    /// Iterates occurrences in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Removes every stored occurrence.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.counts.clear();
    }

    /// Returns `true` if the occurrence index matches `entries` exactly: no
    /// stale keys, no miscounts.
    pub fn index_in_sync(&self) -> bool {
        let mut tally: FxHashMap<&T, usize> = FxHashMap::default();
        for value in &self.entries {
            *tally.entry(value).or_insert(0) += 1;
        }
        tally.len() == self.counts.len()
            && tally
                .iter()
                .all(|(value, &n)| self.counts.get(*value) == Some(&n))
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let total: usize = self.counts.values().sum();
        assert_eq!(total, self.entries.len());
        for (value, &count) in &self.counts {
            assert!(count > 0);
            assert_eq!(self.entries.iter().filter(|v| *v == value).count(), count);
        }
    }
}

impl<'a, T> IntoIterator for &'a MainMemory<T>
where
    T: Eq + Hash,
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
