//! Write-policy simulator.
//!
//! Drives a [`TieredStore`] the way the L1 teaching visualization does: the
//! current [`WritePolicy`] picks the operation for each submitted value, and
//! the outcome of the last operation is kept as a [`Status`] for display.
//!
//! ```text
//!   submit(v, route)
//!   ═══════════════════════════════════════════════════════════════════
//!   WriteThrough ─► dest = route(&v) ─► store(v, dest) ─► status cleared
//!   WriteBack    ─► access(v)        ─► status = { Hit|Miss, 10^n ms }
//!
//!   set_policy(p) ─► status cleared
//! ```
//!
//! ## Example
//!
//! ```
//! use cachefusion::policy::{Destination, Outcome, WritePolicy};
//! use cachefusion::simulator::LruSimulator;
//!
//! let mut sim: LruSimulator<String> = LruSimulator::new(5);
//!
//! // Write-through: the router stands in for the "cache or main memory?" prompt.
//! sim.submit("x".to_string(), |_| Destination::Backing);
//! assert!(sim.status().outcome.is_none());
//!
//! sim.set_policy(WritePolicy::WriteBack);
//! let status = sim.submit("x".to_string(), |_| unreachable!());
//! assert_eq!(status.outcome, Some(Outcome::Miss));
//! assert_eq!(sim.store().snapshot_cache(), vec!["x".to_string()]);
//! ```

use std::hash::Hash;

use tracing::debug;

use crate::config::StoreConfig;
use crate::error::ConfigError;
use crate::latency::LatencyMagnitude;
use crate::policy::{Destination, Outcome, WritePolicy};
use crate::store::BoundedLruStore;
use crate::traits::TieredStore;

/// Simulator over the crate's own [`BoundedLruStore`].
pub type LruSimulator<T> = CacheSimulator<BoundedLruStore<T>>;

/// Result of the most recent submitted operation.
///
/// Empty after any write-through operation and after a policy switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    pub outcome: Option<Outcome>,
    pub latency: Option<LatencyMagnitude>,
}

impl Status {
    /// Message shown for a hit.
    pub fn hit_message(&self) -> Option<&'static str> {
        match self.outcome {
            Some(Outcome::Hit) => Some("Cache Hit in L1!"),
            _ => None,
        }
    }

    /// Message shown for a miss.
    pub fn miss_message(&self) -> Option<&'static str> {
        match self.outcome {
            Some(Outcome::Miss) => Some("Cache Miss! Fetching from Main Memory."),
            _ => None,
        }
    }

    /// Latency line, worded by where the value was served from.
    pub fn latency_label(&self) -> Option<String> {
        let latency = self.latency?;
        match self.outcome {
            Some(Outcome::Miss) => Some(format!("Latency from Main Memory: {latency}")),
            _ => Some(format!("Latency: {latency}")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcome.is_none() && self.latency.is_none()
    }
}

/// Routes submitted values to a [`TieredStore`] according to a write policy.
#[derive(Debug, Clone)]
pub struct CacheSimulator<S> {
    store: S,
    policy: WritePolicy,
    status: Status,
}

impl<T> CacheSimulator<BoundedLruStore<T>>
where
    T: Eq + Hash + Clone,
{
    /// Simulator over a fresh store of `capacity`, starting in write-through.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_store(BoundedLruStore::new(capacity), WritePolicy::default())
    }

    /// Builds the store and initial policy from `config`.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = BoundedLruStore::try_with_eviction(config.capacity, config.eviction)?;
        Ok(Self::with_store(store, config.policy))
    }

    /// Empties both tiers and clears the status. The policy is kept.
    pub fn reset(&mut self) {
        self.store.clear();
        self.status = Status::default();
    }
}

impl<S> CacheSimulator<S> {
    /// Wraps an existing store.
    pub fn with_store(store: S, policy: WritePolicy) -> Self {
        Self {
            store,
            policy,
            status: Status::default(),
        }
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Switches write policy and clears the last status.
    pub fn set_policy(&mut self, policy: WritePolicy) {
        if policy != self.policy {
            debug!(from = %self.policy, to = %policy, "write policy changed");
        }
        self.policy = policy;
        self.status = Status::default();
    }

    /// Status of the last submitted operation.
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Submits `value` under the current policy.
    ///
    /// Under write-through `route` picks the destination tier; it is not
    /// called under write-back.
    pub fn submit<T, F>(&mut self, value: T, route: F) -> Status
    where
        S: TieredStore<T>,
        F: FnOnce(&T) -> Destination,
    {
        self.status = match self.policy {
            WritePolicy::WriteThrough => {
                let destination = route(&value);
                self.store.store(value, destination);
                Status::default()
            },
            WritePolicy::WriteBack => {
                let report = self.store.access(value);
                Status {
                    outcome: Some(report.outcome),
                    latency: Some(report.latency()),
                }
            },
        };
        self.status
    }
}
