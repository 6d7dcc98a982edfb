//! Store configuration.
//!
//! | Field      | Type           | Default          | Description                      |
//! |------------|----------------|------------------|----------------------------------|
//! | `capacity` | `usize`        | 5                | Maximum resident values          |
//! | `eviction` | `EvictionMode` | `Discard`        | Fate of the evicted LRU entry    |
//! | `policy`   | `WritePolicy`  | `WriteThrough`   | Initial simulator write policy   |
//!
//! With the `serde` feature enabled the config deserializes from any serde
//! format; missing fields take their defaults and enum values are kebab-case
//! (`"write-back"`, `"discard"`).

use crate::error::ConfigError;
use crate::policy::{EvictionMode, WritePolicy};
use crate::store::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StoreConfig {
    pub capacity: usize,
    pub eviction: EvictionMode,
    pub policy: WritePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            eviction: EvictionMode::default(),
            policy: WritePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Checks that the configuration can build a store.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::zero_capacity());
        }
        Ok(())
    }
}
