//! Builder for [`BoundedLruStore`] and [`CacheSimulator`].
//!
//! ## Example
//!
//! ```rust
//! use cachefusion::builder::StoreBuilder;
//! use cachefusion::policy::{EvictionMode, Outcome};
//!
//! let mut store = StoreBuilder::new(3)
//!     .eviction(EvictionMode::WriteBack)
//!     .build::<String>();
//! assert_eq!(store.access("a".to_string()).outcome, Outcome::Miss);
//! assert_eq!(store.capacity(), 3);
//! ```

use std::hash::Hash;

use crate::config::StoreConfig;
use crate::error::ConfigError;
use crate::policy::{EvictionMode, WritePolicy};
use crate::simulator::{CacheSimulator, LruSimulator};
use crate::store::{BoundedLruStore, DEFAULT_CAPACITY};

/// Builder for store and simulator instances.
#[derive(Debug, Clone, Copy)]
pub struct StoreBuilder {
    config: StoreConfig,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl StoreBuilder {
    /// Create a new builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            config: StoreConfig {
                capacity,
                ..StoreConfig::default()
            },
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self { config: *config }
    }

    /// What to do with the LRU entry pushed out of a full cache tier.
    pub fn eviction(mut self, mode: EvictionMode) -> Self {
        self.config.eviction = mode;
        self
    }

    /// Initial write policy for [`build_simulator`](Self::build_simulator).
    pub fn policy(mut self, policy: WritePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// The configuration accumulated so far.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Build a store.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. Use
    /// [`try_build`](Self::try_build) for user-supplied values.
    pub fn build<T>(self) -> BoundedLruStore<T>
    where
        T: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(store) => store,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a store, reporting invalid configuration.
    pub fn try_build<T>(self) -> Result<BoundedLruStore<T>, ConfigError>
    where
        T: Eq + Hash + Clone,
    {
        self.config.validate()?;
        BoundedLruStore::try_with_eviction(self.config.capacity, self.config.eviction)
    }

    /// Build a simulator driving a freshly built store.
    pub fn build_simulator<T>(self) -> Result<LruSimulator<T>, ConfigError>
    where
        T: Eq + Hash + Clone,
    {
        let store = self.try_build()?;
        Ok(CacheSimulator::with_store(store, self.config.policy))
    }
}
