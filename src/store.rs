//! # Bounded LRU Store
//!
//! A fixed-capacity cache tier in front of an unbounded main-memory tier.
//! Values are their own keys.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                      BoundedLruStore<T>                          │
//!   │                                                                  │
//!   │   order: RecencyList<T>           (capacity-bounded, unique)     │
//!   │     front ─► [A] ─ [B] ─ [C] ◄─ back                             │
//!   │              LRU          MRU                                    │
//!   │                                                                  │
//!   │   backing: MainMemory<T>          (unbounded multiset)           │
//!   │     [x] ─ [y] ─ [x]                                              │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   access(v)                              store(v, dest)
//!   ═════════════════════════════          ═════════════════════════════
//!   v in order?                            dest == Backing?
//!     yes ─► HIT: move v to back             yes ─► backing.push(v)
//!     no  ─► MISS: admit(v)                  no  ─► admit(v)
//!
//!   admit(v)
//!   ═════════════════════════════════════════════════════════════════════
//!     1. order full?      ─► pop front (drop, or push to backing when
//!                            EvictionMode::WriteBack)
//!     2. push v to back of order
//!     3. v in backing?    ─► remove one occurrence (fetch)
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use cachefusion::policy::{Destination, Outcome};
//! use cachefusion::store::BoundedLruStore;
//!
//! let mut store: BoundedLruStore<&str> = BoundedLruStore::new(2);
//! store.store("x", Destination::Backing);
//!
//! let report = store.access("x");
//! assert_eq!(report.outcome, Outcome::Miss);
//! assert!(report.fetched);
//! assert_eq!(store.snapshot_cache(), vec!["x"]);
//! assert!(store.snapshot_backing().is_empty());
//!
//! assert_eq!(store.access("x").outcome, Outcome::Hit);
//! ```
//!
//! ## Thread Safety
//!
//! Not synchronized. Wrap in a lock if shared; the admit path mutates both
//! tiers and must run as one critical section.

use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::ds::{MainMemory, RecencyList};
use crate::error::{ConfigError, InvariantError};
use crate::latency::LatencyMagnitude;
use crate::policy::{Destination, EvictionMode, Outcome};
use crate::traits::TieredStore;

/// Capacity used by [`BoundedLruStore::default`].
pub const DEFAULT_CAPACITY: usize = 5;

/// Result of [`BoundedLruStore::access`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessReport<T> {
    /// Hit if the value was resident before the call.
    pub outcome: Outcome,
    /// Time from just before the lookup to just after the hit reorder, or to
    /// the miss decision.
    pub elapsed: Duration,
    /// `true` if a miss consumed an occurrence from main memory.
    pub fetched: bool,
    /// Entry pushed out of the cache tier by this access, if any.
    pub evicted: Option<T>,
}

impl<T> AccessReport<T> {
    /// Order-of-magnitude view of [`elapsed`](Self::elapsed).
    pub fn latency(&self) -> LatencyMagnitude {
        LatencyMagnitude::from_elapsed(self.elapsed)
    }
}

/// Result of [`BoundedLruStore::store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReceipt<T> {
    pub destination: Destination,
    /// `true` if a cache write consumed an occurrence from main memory.
    pub fetched: bool,
    /// Entry pushed out of the cache tier, if any.
    pub evicted: Option<T>,
}

/// Outcome of the shared admit procedure.
struct Admission<T> {
    fetched: bool,
    evicted: Option<T>,
}

/// Fixed-capacity LRU cache tier with a main-memory backing tier.
///
/// See the [module documentation](self) for the operation flow.
#[derive(Clone)]
pub struct BoundedLruStore<T>
where
    T: Eq + Hash + Clone,
{
    order: RecencyList<T>,
    backing: MainMemory<T>,
    eviction: EvictionMode,
}

impl<T> BoundedLruStore<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a store whose cache tier holds `capacity` values, dropping
    /// evicted entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(store) => store,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_eviction(capacity, EvictionMode::default())
    }

    /// Creates a store with an explicit [`EvictionMode`].
    pub fn try_with_eviction(capacity: usize, eviction: EvictionMode) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        Ok(Self {
            order: RecencyList::new(capacity),
            backing: MainMemory::new(),
            eviction,
        })
    }

    /// Writes `value` to the chosen tier.
    ///
    /// `Destination::Backing` appends unconditionally and leaves the cache
    /// tier alone. `Destination::Cache` admits the value, evicting the LRU
    /// entry when full. A value that is already resident is moved to the MRU
    /// end instead of being duplicated.
    pub fn store(&mut self, value: T, destination: Destination) -> StoreReceipt<T> {
        match destination {
            Destination::Backing => {
                debug!(backing_len = self.backing.len() + 1, "write to main memory");
                self.backing.push(value);
                StoreReceipt {
                    destination,
                    fetched: false,
                    evicted: None,
                }
            },
            Destination::Cache => {
                let admission = if self.order.touch(&value) {
                    trace!("write to resident entry, moved to MRU");
                    Admission {
                        fetched: self.backing.take_one(&value),
                        evicted: None,
                    }
                } else {
                    self.admit(value)
                };
                StoreReceipt {
                    destination,
                    fetched: admission.fetched,
                    evicted: admission.evicted,
                }
            },
        }
    }

    /// Looks `value` up in the cache tier.
    ///
    /// On a hit the value moves to the MRU end. On a miss it is admitted,
    /// fetching one occurrence from main memory if present.
    pub fn access(&mut self, value: T) -> AccessReport<T> {
        let start = Instant::now();
        if self.order.touch(&value) {
            let elapsed = start.elapsed();
            debug!(?elapsed, "cache hit");
            return AccessReport {
                outcome: Outcome::Hit,
                elapsed,
                fetched: false,
                evicted: None,
            };
        }
        let elapsed = start.elapsed();
        debug!(?elapsed, "cache miss");

        let Admission { fetched, evicted } = self.admit(value);
        AccessReport {
            outcome: Outcome::Miss,
            elapsed,
            fetched,
            evicted,
        }
    }

    /// Insertion-with-eviction for a value that is not resident.
    fn admit(&mut self, value: T) -> Admission<T> {
        let evicted = self.order.push_evicting(value.clone());
        if let Some(old) = &evicted {
            match self.eviction {
                EvictionMode::Discard => debug!("evicted LRU entry (discarded)"),
                EvictionMode::WriteBack => {
                    debug!("evicted LRU entry (written back to main memory)");
                    self.backing.push(old.clone());
                },
            }
        }
        let fetched = self.backing.take_one(&value);
        if fetched {
            debug!("fetched from main memory");
        }
        Admission { fetched, evicted }
    }

    /// Resident values from LRU to MRU.
    pub fn snapshot_cache(&self) -> Vec<T> {
        self.order.iter().cloned().collect()
    }

    /// Main-memory contents in insertion order, duplicates included.
    pub fn snapshot_backing(&self) -> Vec<T> {
        self.backing.iter().cloned().collect()
    }

    /// Iterates resident values from LRU to MRU without cloning.
    pub fn cache_iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// Iterates main-memory contents in insertion order.
    pub fn backing_iter(&self) -> impl Iterator<Item = &T> {
        self.backing.iter()
    }

    /// Maximum number of resident values.
    pub fn capacity(&self) -> usize {
        self.order.capacity()
    }

    /// Number of resident values.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of occurrences held in main memory.
    pub fn backing_len(&self) -> usize {
        self.backing.len()
    }

    /// Returns `true` if `value` is resident. Does not affect recency.
    pub fn contains(&self, value: &T) -> bool {
        self.order.contains(value)
    }

    /// Returns `true` if main memory holds at least one occurrence of `value`.
    pub fn in_backing(&self, value: &T) -> bool {
        self.backing.contains(value)
    }

    /// Position of `value` from the LRU end (0 = next to be evicted).
    pub fn recency_rank(&self, value: &T) -> Option<usize> {
        self.order.position(value)
    }

    pub fn eviction_mode(&self) -> EvictionMode {
        self.eviction
    }

    /// Empties both tiers. Capacity and eviction mode are kept.
    pub fn clear(&mut self) {
        self.order.clear();
        self.backing.clear();
    }

    /// Validates the capacity bound, resident uniqueness and the main-memory
    /// occurrence index.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.order.len() > self.order.capacity() {
            return Err(InvariantError::over_capacity(
                self.order.len(),
                self.order.capacity(),
            ));
        }
        for (i, a) in self.order.iter().enumerate() {
            if self.order.iter().skip(i + 1).any(|b| b == a) {
                return Err(InvariantError::duplicate_resident(i));
            }
        }
        if !self.backing.index_in_sync() {
            return Err(InvariantError::backing_index_out_of_sync());
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        self.backing.debug_validate_invariants();
    }
}

impl<T> Default for BoundedLruStore<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> fmt::Debug for BoundedLruStore<T>
where
    T: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedLruStore")
            .field("capacity", &self.capacity())
            .field("cache", &self.order.iter().collect::<Vec<_>>())
            .field("backing", &self.backing.iter().collect::<Vec<_>>())
            .field("eviction", &self.eviction)
            .finish()
    }
}

impl<T> TieredStore<T> for BoundedLruStore<T>
where
    T: Eq + Hash + Clone,
{
    fn store(&mut self, value: T, destination: Destination) -> StoreReceipt<T> {
        BoundedLruStore::store(self, value, destination)
    }

    fn access(&mut self, value: T) -> AccessReport<T> {
        BoundedLruStore::access(self, value)
    }

    fn snapshot_cache(&self) -> Vec<T> {
        BoundedLruStore::snapshot_cache(self)
    }

    fn snapshot_backing(&self) -> Vec<T> {
        BoundedLruStore::snapshot_backing(self)
    }

    fn capacity(&self) -> usize {
        BoundedLruStore::capacity(self)
    }

    fn len(&self) -> usize {
        BoundedLruStore::len(self)
    }

    fn clear(&mut self) {
        BoundedLruStore::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[&'static str]) -> BoundedLruStore<&'static str> {
        let mut store = BoundedLruStore::new(capacity);
        for v in values {
            assert_eq!(store.access(*v).outcome, Outcome::Miss);
        }
        store
    }

    // ==============================================
    // Construction
    // ==============================================

    #[test]
    fn zero_capacity_is_rejected() {
        let err = BoundedLruStore::<String>::try_new(0).unwrap_err();
        assert_eq!(err, ConfigError::zero_capacity());
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn new_panics_on_zero_capacity() {
        let _ = BoundedLruStore::<String>::new(0);
    }

    #[test]
    fn default_capacity_is_five() {
        let store: BoundedLruStore<String> = BoundedLruStore::default();
        assert_eq!(store.capacity(), 5);
        assert!(store.is_empty());
        assert_eq!(store.eviction_mode(), EvictionMode::Discard);
    }

    // ==============================================
    // access()
    // ==============================================

    #[test]
    fn hit_moves_to_mru_and_next_miss_evicts_new_lru() {
        let mut store = filled(5, &["a", "b", "c", "d", "e"]);
        assert_eq!(store.snapshot_cache(), vec!["a", "b", "c", "d", "e"]);

        let report = store.access("a");
        assert_eq!(report.outcome, Outcome::Hit);
        assert_eq!(report.evicted, None);
        assert_eq!(store.snapshot_cache(), vec!["b", "c", "d", "e", "a"]);

        let report = store.access("f");
        assert_eq!(report.outcome, Outcome::Miss);
        assert_eq!(report.evicted, Some("b"));
        assert_eq!(store.snapshot_cache(), vec!["c", "d", "e", "a", "f"]);
        store.debug_validate_invariants();
    }

    #[test]
    fn miss_fetches_from_backing() {
        let mut store = BoundedLruStore::new(2);
        store.store("x", Destination::Backing);

        let report = store.access("x");
        assert_eq!(report.outcome, Outcome::Miss);
        assert!(report.fetched);
        assert_eq!(store.snapshot_cache(), vec!["x"]);
        assert!(!store.in_backing(&"x"));
    }

    #[test]
    fn miss_without_backing_copy_does_not_fetch() {
        let mut store = BoundedLruStore::new(2);
        let report = store.access("y");
        assert!(!report.fetched);
        assert_eq!(store.len(), 1);
        assert_eq!(store.backing_len(), 0);
    }

    #[test]
    fn fetch_consumes_single_duplicate() {
        let mut store = BoundedLruStore::new(2);
        store.store("x", Destination::Backing);
        store.store("x", Destination::Backing);

        store.access("x");
        assert_eq!(store.snapshot_backing(), vec!["x"]);
        assert_eq!(store.access("x").outcome, Outcome::Hit);
        assert_eq!(store.snapshot_backing(), vec!["x"]);
    }

    #[test]
    fn empty_string_is_an_ordinary_value() {
        let mut store: BoundedLruStore<String> = BoundedLruStore::new(2);
        assert_eq!(store.access(String::new()).outcome, Outcome::Miss);
        assert_eq!(store.access(String::new()).outcome, Outcome::Hit);
        assert_eq!(store.len(), 1);
    }

    // ==============================================
    // store()
    // ==============================================

    #[test]
    fn store_to_backing_never_touches_cache() {
        let mut store = filled(2, &["a", "b"]);
        let receipt = store.store("a", Destination::Backing);
        assert_eq!(receipt.destination, Destination::Backing);
        assert_eq!(receipt.evicted, None);
        assert_eq!(store.snapshot_cache(), vec!["a", "b"]);
        assert_eq!(store.snapshot_backing(), vec!["a"]);
    }

    #[test]
    fn store_to_cache_evicts_when_full() {
        let mut store = BoundedLruStore::new(2);
        store.store("a", Destination::Cache);
        store.store("b", Destination::Cache);
        let receipt = store.store("c", Destination::Cache);

        assert_eq!(receipt.evicted, Some("a"));
        assert_eq!(store.snapshot_cache(), vec!["b", "c"]);
        assert!(store.snapshot_backing().is_empty());
    }

    #[test]
    fn store_to_cache_consumes_backing_copy() {
        let mut store = BoundedLruStore::new(3);
        store.store("m", Destination::Backing);
        let receipt = store.store("m", Destination::Cache);
        assert!(receipt.fetched);
        assert!(store.snapshot_backing().is_empty());
        assert_eq!(store.snapshot_cache(), vec!["m"]);
    }

    #[test]
    fn store_to_cache_on_resident_value_refreshes_without_duplicating() {
        let mut store = filled(3, &["a", "b", "c"]);
        let receipt = store.store("a", Destination::Cache);
        assert_eq!(receipt.evicted, None);
        assert_eq!(store.snapshot_cache(), vec!["b", "c", "a"]);
        store.debug_validate_invariants();
    }

    // ==============================================
    // Eviction modes
    // ==============================================

    #[test]
    fn discard_mode_loses_evicted_entry() {
        let mut store = filled(1, &["a"]);
        store.access("b");
        assert!(!store.contains(&"a"));
        assert!(!store.in_backing(&"a"));
    }

    #[test]
    fn write_back_mode_flushes_evicted_entry() {
        let mut store = BoundedLruStore::try_with_eviction(1, EvictionMode::WriteBack).unwrap();
        store.access("a");
        let report = store.access("b");
        assert_eq!(report.evicted, Some("a"));
        assert_eq!(store.snapshot_backing(), vec!["a"]);

        // Round trip: a comes back from main memory and b is flushed.
        let report = store.access("a");
        assert!(report.fetched);
        assert_eq!(store.snapshot_cache(), vec!["a"]);
        assert_eq!(store.snapshot_backing(), vec!["b"]);
        store.debug_validate_invariants();
    }

    // ==============================================
    // Introspection / maintenance
    // ==============================================

    #[test]
    fn recency_rank_and_contains_do_not_reorder() {
        let store = filled(3, &["a", "b", "c"]);
        assert_eq!(store.recency_rank(&"a"), Some(0));
        assert_eq!(store.recency_rank(&"c"), Some(2));
        assert!(store.contains(&"b"));
        assert_eq!(store.snapshot_cache(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clear_empties_both_tiers() {
        let mut store = filled(3, &["a", "b"]);
        store.store("z", Destination::Backing);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.backing_len(), 0);
        assert_eq!(store.capacity(), 3);
        assert!(store.check_invariants().is_ok());
    }

    #[test]
    fn backing_index_stays_in_sync_through_duplicate_fetches() {
        let mut store = BoundedLruStore::try_with_eviction(1, EvictionMode::WriteBack).unwrap();
        for v in ["x", "y", "x", "x"] {
            store.store(v, Destination::Backing);
            assert!(store.check_invariants().is_ok());
        }
        // "x" is fetched, then written back when "y" takes its slot.
        assert_eq!(store.access("x").outcome, Outcome::Miss);
        assert!(store.check_invariants().is_ok());
        assert_eq!(store.access("y").outcome, Outcome::Miss);
        assert!(store.check_invariants().is_ok());
        assert_eq!(store.snapshot_backing(), vec!["x", "x", "x"]);
        assert!(store.backing.index_in_sync());
    }

    #[test]
    fn debug_output_lists_both_tiers() {
        let mut store = filled(2, &["a"]);
        store.store("z", Destination::Backing);
        let dbg = format!("{store:?}");
        assert!(dbg.contains("\"a\""));
        assert!(dbg.contains("\"z\""));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Access(u8),
        Store(u8, Destination),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..12).prop_map(Op::Access),
            (0u8..12).prop_map(|v| Op::Store(v, Destination::Cache)),
            (0u8..12).prop_map(|v| Op::Store(v, Destination::Backing)),
        ]
    }

    /// Vec-based model of the two tiers.
    #[derive(Default)]
    struct Model {
        order: Vec<u8>,
        backing: Vec<u8>,
    }

    impl Model {
        fn admit(&mut self, capacity: usize, v: u8) {
            if self.order.len() >= capacity {
                self.order.remove(0);
            }
            self.order.push(v);
            if let Some(idx) = self.backing.iter().position(|b| *b == v) {
                self.backing.remove(idx);
            }
        }

        fn apply(&mut self, capacity: usize, op: &Op) -> Option<Outcome> {
            match *op {
                Op::Access(v) => {
                    if let Some(idx) = self.order.iter().position(|o| *o == v) {
                        let v = self.order.remove(idx);
                        self.order.push(v);
                        Some(Outcome::Hit)
                    } else {
                        self.admit(capacity, v);
                        Some(Outcome::Miss)
                    }
                },
                Op::Store(v, Destination::Backing) => {
                    self.backing.push(v);
                    None
                },
                Op::Store(v, Destination::Cache) => {
                    if let Some(idx) = self.order.iter().position(|o| *o == v) {
                        let v = self.order.remove(idx);
                        self.order.push(v);
                        if let Some(idx) = self.backing.iter().position(|b| *b == v) {
                            self.backing.remove(idx);
                        }
                    } else {
                        self.admit(capacity, v);
                    }
                    None
                },
            }
        }
    }

    proptest! {
        /// Property: the store agrees with the Vec model after every operation
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_model(
            capacity in 1usize..8,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut store: BoundedLruStore<u8> = BoundedLruStore::new(capacity);
            let mut model = Model::default();

            for op in &ops {
                let expected = model.apply(capacity, op);
                let actual = match *op {
                    Op::Access(v) => Some(store.access(v).outcome),
                    Op::Store(v, dest) => {
                        store.store(v, dest);
                        None
                    },
                };
                prop_assert_eq!(actual, expected);
                prop_assert_eq!(store.snapshot_cache(), model.order.clone());
                prop_assert_eq!(store.snapshot_backing(), model.backing.clone());
            }
        }

        /// Property: len() never exceeds capacity and invariants hold
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_len_within_capacity(
            capacity in 1usize..6,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut store: BoundedLruStore<u8> = BoundedLruStore::new(capacity);
            for op in ops {
                match op {
                    Op::Access(v) => { store.access(v); },
                    Op::Store(v, dest) => { store.store(v, dest); },
                }
                prop_assert!(store.len() <= store.capacity());
                prop_assert!(store.check_invariants().is_ok());
            }
        }

        /// Property: write-back eviction conserves every admitted value
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_write_back_eviction_loses_nothing(
            capacity in 1usize..5,
            values in prop::collection::vec(0u8..20, 0..100)
        ) {
            let mut store: BoundedLruStore<u8> =
                BoundedLruStore::try_with_eviction(capacity, EvictionMode::WriteBack).unwrap();
            let mut distinct = Vec::new();
            for v in values {
                store.access(v);
                if !distinct.contains(&v) {
                    distinct.push(v);
                }
            }
            prop_assert_eq!(store.len() + store.backing_len(), distinct.len());
        }
    }
}
