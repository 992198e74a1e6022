//! Capabilities cache loader.
//!
//! Reads a YAML capabilities seed, publishes it through a
//! [`CacheController`](capabilities_cache::CacheController) as a complete
//! update, applies observation batches incrementally and reports the result
//! as a [`CapabilitiesSummary`](capabilities_cache::CapabilitiesSummary).

pub mod config;
pub mod loader;

pub use config::{load_observations, load_seed, SeedDocument};
pub use loader::{load, summarize};
