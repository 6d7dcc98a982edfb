//! cachefusion: a bounded LRU cache tier over a main-memory tier, with
//! write-through and write-back policies.
//!
//! Start with [`store::BoundedLruStore`] for the data structure itself, or
//! [`simulator::CacheSimulator`] to drive it by write policy.

pub mod builder;
pub mod config;
pub mod ds;
pub mod error;
pub mod latency;
pub mod policy;
pub mod prelude;
pub mod simulator;
pub mod store;
pub mod traits;

pub use crate::ds::{MainMemory, RecencyList};
pub use crate::store::BoundedLruStore;
