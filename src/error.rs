//! Errors reported by store construction and invariant checks.
//!
//! Reads and writes never fail: a miss is an [`Outcome`](crate::policy::Outcome),
//! not an error. Only two things can go wrong:
//!
//! - [`ConfigError`]: the requested store cannot exist (zero capacity).
//! - [`InvariantError`]: [`BoundedLruStore::check_invariants`] found a tier
//!   disagreeing with its own bookkeeping.
//!
//! Each failure has a named constructor so every code path reporting it
//! produces the same message.
//!
//! ```
//! use cachefusion::config::StoreConfig;
//! use cachefusion::error::ConfigError;
//! use cachefusion::store::BoundedLruStore;
//!
//! let from_store = BoundedLruStore::<String>::try_new(0).unwrap_err();
//! let from_config = StoreConfig { capacity: 0, ..StoreConfig::default() }
//!     .validate()
//!     .unwrap_err();
//! assert_eq!(from_store, ConfigError::zero_capacity());
//! assert_eq!(from_store, from_config);
//! ```
//!
//! [`BoundedLruStore::check_invariants`]: crate::store::BoundedLruStore::check_invariants

use std::fmt;

/// A store configuration that cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// The cache tier must hold at least one value.
    pub fn zero_capacity() -> Self {
        Self::new("capacity must be greater than zero")
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid store config: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// A broken store invariant, as found by
/// [`check_invariants`](crate::store::BoundedLruStore::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// The cache tier holds more entries than its capacity.
    pub fn over_capacity(len: usize, capacity: usize) -> Self {
        Self(format!("cache tier holds {len} entries, capacity is {capacity}"))
    }

    /// A value is resident twice; `position` is the first copy, counted from LRU.
    pub fn duplicate_resident(position: usize) -> Self {
        Self(format!("duplicate resident entry at position {position}"))
    }

    /// Main memory's occurrence counts no longer match its entries.
    pub fn backing_index_out_of_sync() -> Self {
        Self::new("main memory occurrence index out of sync")
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store invariant violated: {}", self.0)
    }
}

impl std::error::Error for InvariantError {}
