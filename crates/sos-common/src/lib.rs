//! Common types and utilities shared across the SOS capabilities cache crates.

pub mod crs;
pub mod envelope;
pub mod error;
pub mod i18n;
pub mod time;

pub use crs::{EpsgCode, EPSG_WGS84};
pub use envelope::{BoundingBox, Envelope};
pub use error::{CacheError, CacheResult};
pub use i18n::{Locale, MultilingualString};
pub use time::TimePeriod;
