pub use crate::builder::StoreBuilder;
pub use crate::config::StoreConfig;
pub use crate::ds::{MainMemory, RecencyList};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::latency::LatencyMagnitude;
pub use crate::policy::{Destination, EvictionMode, Outcome, WritePolicy};
pub use crate::simulator::{CacheSimulator, LruSimulator, Status};
pub use crate::store::{AccessReport, BoundedLruStore, StoreReceipt};
pub use crate::traits::TieredStore;
