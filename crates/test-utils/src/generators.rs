//! Generators for populated caches.

use capabilities_cache::update::{CapabilitiesSeed, InitialLoad, ObservationRecord};
use capabilities_cache::{ContentCacheUpdate, InMemoryContentCache};

use crate::fixtures::{OBSERVATIONS_YAML, SEED_YAML};

/// The fixture network as a [`CapabilitiesSeed`].
pub fn sample_seed() -> CapabilitiesSeed {
    serde_yaml::from_str(SEED_YAML).expect("SEED_YAML must deserialize")
}

/// The fixture observation batch.
pub fn sample_observations() -> Vec<ObservationRecord> {
    serde_yaml::from_str(OBSERVATIONS_YAML).expect("OBSERVATIONS_YAML must deserialize")
}

/// A cache loaded from [`sample_seed`].
pub fn populated_cache() -> InMemoryContentCache {
    let mut cache = InMemoryContentCache::new();
    let mut load = InitialLoad::new(sample_seed());
    load.execute(&mut cache);
    if let Some(cause) = load.failure_cause() {
        panic!("loading the sample seed failed: {cause}");
    }
    cache
}

/// `count` offering identifiers that do not collide with the fixture ones.
pub fn offering_ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("http://example.org/offering/{prefix}-{i}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ids;
    use capabilities_cache::ContentCacheExt;

    #[test]
    fn test_populated_cache() {
        let cache = populated_cache();
        assert_eq!(cache.offerings().len(), 3);
        assert!(cache.has_published_offering(ids::OFFERING_GAUGE_1));
        assert!(!cache.has_published_offering(ids::OFFERING_HIDDEN));
        assert!(cache.is_composite_phenomenon(ids::HYDROLOGY));
    }

    #[test]
    fn test_sample_observations() {
        let records = sample_observations();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].procedure, ids::PROCEDURE_GAUGE_2);
    }

    #[test]
    fn test_offering_ids() {
        let ids = offering_ids("bulk", 3);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[2], "http://example.org/offering/bulk-2");
    }
}
