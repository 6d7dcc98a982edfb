//! Bounded recency list of unique values.
//!
//! Backs the cache tier of [`BoundedLruStore`](crate::store::BoundedLruStore).
//! Values are their own keys, so there is no separate index: membership is a
//! linear scan, which is the right trade for the handful of entries an L1-sized
//! tier holds.
//!
//! ## Architecture
//!
//! ```text
//!   VecDeque<T>
//!   front ─► [A] ─ [B] ─ [C] ─ [D] ◄─ back
//!            LRU                 MRU
//! ```
//!
//! ## Behavior
//! - `touch(v)`: moves a resident value to the MRU end
//! - `push_evicting(v)`: drops the LRU value if full, then appends `v`
//! - `remove(v)`: unlinks a value wherever it sits
//! - `clear()`: empties the list
//!
//! ## Performance
//! - `contains` / `touch` / `remove`: O(n) scan
//! - `push_evicting` / `pop_lru`: O(1)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::collections::VecDeque;
use std::collections::vec_deque;

/// Bounded sequence of unique values ordered from least to most recently used.
#[derive(Debug, Clone)]
pub struct RecencyList<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RecencyList<T>
where
    T: Eq,
{
    /// Creates an empty list that holds at most `capacity` values.
    ///
    /// A zero-capacity list admits nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of resident values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` once the list holds `capacity` values.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns `true` if `value` is resident.
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    /// Position of `value` counted from the LRU end (0 = next to be evicted).
    pub fn position(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|v| v == value)
    }

    /// Moves a resident `value` to the MRU end; returns `false` if absent.
    pub fn touch(&mut self, value: &T) -> bool {
        let Some(idx) = self.position(value) else {
            return false;
        };
        if idx + 1 != self.entries.len()
            && let Some(v) = self.entries.remove(idx)
        {
            self.entries.push_back(v);
        }
        true
    }

    /// Appends `value` at the MRU end, first evicting the LRU value if full.
    ///
    /// Callers must ensure `value` is not already resident. Returns the evicted
    /// value, if any. A zero-capacity list hands `value` straight back.
    pub fn push_evicting(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        debug_assert!(!self.contains(&value), "value already resident");
        let evicted = if self.is_full() {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(value);
        evicted
    }

    /// Removes `value` from the list; returns it if it was resident.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let idx = self.position(value)?;
        self.entries.remove(idx)
    }

    /// Removes and returns the least recently used value.
    pub fn pop_lru(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    /// Returns the least recently used value without removing it.
    pub fn peek_lru(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Returns the most recently used value.
    pub fn peek_mru(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Iterates from LRU to MRU.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }

    /// Clears all resident values.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.entries.len() <= self.capacity);
        for (i, a) in self.entries.iter().enumerate() {
            for b in self.entries.iter().skip(i + 1) {
                assert!(a != b, "duplicate resident value");
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a RecencyList<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
