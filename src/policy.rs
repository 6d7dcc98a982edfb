//! Write policies and the small enums that flow through store operations.
//!
//! | Type            | Meaning                                                   |
//! |-----------------|-----------------------------------------------------------|
//! | `WritePolicy`   | Which operation the caller issues for each value          |
//! | `Destination`   | Tier targeted by a write-through `store`                  |
//! | `Outcome`       | Hit/miss result of a write-back `access`                  |
//! | `EvictionMode`  | What happens to the entry pushed out of a full cache tier |
//!
//! The store itself is mode-less. [`WritePolicy`] is only consulted by callers
//! (see [`CacheSimulator`](crate::simulator::CacheSimulator)) to choose between
//! [`store`](crate::store::BoundedLruStore::store) and
//! [`access`](crate::store::BoundedLruStore::access).

use std::fmt;

/// Selects which store operation a caller issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum WritePolicy {
    /// Every write is routed explicitly to the cache or to main memory.
    /// No hit/miss, no latency.
    #[default]
    WriteThrough,
    /// Every operation is an access against the cache; misses are promoted
    /// from main memory.
    WriteBack,
}

impl WritePolicy {
    /// Returns `true` if this policy reports hit/miss outcomes.
    pub fn reports_outcome(self) -> bool {
        matches!(self, WritePolicy::WriteBack)
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WritePolicy::WriteThrough => f.write_str("write-through"),
            WritePolicy::WriteBack => f.write_str("write-back"),
        }
    }
}

/// Target tier for a write-through store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Destination {
    /// The bounded LRU tier.
    Cache,
    /// Main memory.
    Backing,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Cache => f.write_str("L1 cache"),
            Destination::Backing => f.write_str("main memory"),
        }
    }
}

/// Result of a lookup against the cache tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// Fate of the least recently used entry when a full cache tier admits a
/// new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EvictionMode {
    /// The evicted entry is dropped and does not reappear in main memory.
    #[default]
    Discard,
    /// The evicted entry is appended to main memory.
    WriteBack,
}
