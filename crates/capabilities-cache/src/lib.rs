//! In-memory capabilities cache for a Sensor Observation Service.
//!
//! The cache answers "what does this service offer" without touching the
//! observation database: which offerings exist, which procedures,
//! observable properties and features belong to them, their time ranges and
//! spatial envelopes, and the names they are shown under.
//!
//! Mutation goes through [`update::ContentCacheUpdate`] actions run by a
//! [`CacheController`], which publishes each successful result as a new
//! immutable snapshot.
//!
//! # Example
//!
//! ```ignore
//! use capabilities_cache::{CacheConfig, CacheController, ContentCacheExt};
//! use capabilities_cache::update::FeatureInsertion;
//!
//! let controller = CacheController::new(CacheConfig::from_env());
//! controller.update(&mut FeatureInsertion::new("urn:feature:1")).await?;
//! assert!(controller.snapshot().has_feature_of_interest("urn:feature:1"));
//! ```

pub mod aggregate;
pub mod config;
pub mod content;
pub mod controller;
pub mod hierarchy;
pub mod in_memory;
pub mod integrity;
pub mod model;
pub mod names;
pub mod store;
pub mod summary;
pub mod update;
pub mod validation;
pub mod vocabulary;

pub use config::CacheConfig;
pub use content::{ContentCache, WritableContentCache};
pub use controller::{CacheController, UpdateOutcome};
pub use in_memory::InMemoryContentCache;
pub use integrity::DanglingReference;
pub use model::{
    ComponentAggregation, Domain, EntitySet, EnvelopeKind, Hierarchy, NameKind, Relation, Scope,
    TimeKind, TypeInstance,
};
pub use summary::{CapabilitiesSummary, OfferingSummary};
pub use update::{ContentCacheUpdate, UpdateStatus};
pub use vocabulary::{ContentCacheExt, WritableContentCacheExt};

pub use sos_common::{CacheError, CacheResult};
