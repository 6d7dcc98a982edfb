//! # Store Trait
//!
//! [`TieredStore`] is the seam between a two-tier store and whatever drives it
//! (the [`CacheSimulator`](crate::simulator::CacheSimulator), benches, tests).
//!
//! ```text
//!   ┌─────────────────────────────────────────────┐
//!   │              TieredStore<T>                 │
//!   │                                             │
//!   │  store(&mut, T, Destination) → receipt      │   write-through path
//!   │  access(&mut, T) → AccessReport             │   write-back path
//!   │  snapshot_cache(&) → Vec<T>   (LRU → MRU)   │
//!   │  snapshot_backing(&) → Vec<T>               │
//!   │  capacity / len / is_empty / clear          │
//!   └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cachefusion::policy::Destination;
//! use cachefusion::store::BoundedLruStore;
//! use cachefusion::traits::TieredStore;
//!
//! fn preload<S: TieredStore<String>>(store: &mut S, values: &[&str]) {
//!     for v in values {
//!         store.store(v.to_string(), Destination::Backing);
//!     }
//! }
//!
//! let mut store = BoundedLruStore::new(5);
//! preload(&mut store, &["a", "b"]);
//! assert_eq!(TieredStore::snapshot_backing(&store), vec!["a", "b"]);
//! assert!(TieredStore::is_empty(&store));
//! ```

use crate::policy::Destination;
use crate::store::{AccessReport, StoreReceipt};

/// A bounded cache tier in front of a main-memory tier.
pub trait TieredStore<T> {
    /// Writes `value` to the tier named by `destination`.
    fn store(&mut self, value: T, destination: Destination) -> StoreReceipt<T>;

    /// Looks `value` up in the cache tier, promoting it on a miss.
    fn access(&mut self, value: T) -> AccessReport<T>;

    /// Resident values from least to most recently used.
    fn snapshot_cache(&self) -> Vec<T>;

    /// Main-memory contents.
    fn snapshot_backing(&self) -> Vec<T>;

    /// Maximum number of resident values.
    fn capacity(&self) -> usize;

    /// Number of resident values.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties both tiers.
    fn clear(&mut self);
}
