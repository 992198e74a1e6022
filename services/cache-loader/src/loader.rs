//! Drives the controller through a seed and a series of observation batches.

use anyhow::{bail, Result};
use capabilities_cache::update::{InitialLoad, ObservationInsertion, ObservationRecord};
use capabilities_cache::{
    CacheConfig, CacheController, CapabilitiesSummary, ContentCacheUpdate, UpdateOutcome,
};
use tracing::info;

use crate::config::SeedDocument;

/// Load `document` as a complete update, then apply each batch in order.
///
/// Stops at the first update that is not published.
pub async fn load(
    config: CacheConfig,
    document: SeedDocument,
    batches: Vec<Vec<ObservationRecord>>,
) -> Result<CacheController> {
    let controller = CacheController::new(config);

    let mut initial = InitialLoad::new(document.seed);
    publish(&controller, &mut initial).await?;

    for (index, records) in batches.into_iter().enumerate() {
        let count = records.len();
        let mut insertion = ObservationInsertion::new(records);
        publish(&controller, &mut insertion).await?;
        info!(batch = index, observations = count, "Applied observation batch");
    }

    Ok(controller)
}

/// Summary of the controller's current snapshot.
pub fn summarize(controller: &CacheController) -> CapabilitiesSummary {
    CapabilitiesSummary::from_cache(controller.snapshot().as_ref())
}

async fn publish(controller: &CacheController, update: &mut dyn ContentCacheUpdate) -> Result<()> {
    match controller.update(update).await? {
        UpdateOutcome::Published => Ok(()),
        UpdateOutcome::Failed(cause) => bail!("{} failed: {}", update.name(), cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_batch_stops_loading() {
        let document: SeedDocument =
            serde_yaml::from_str("offerings:\n  - identifier: o1\n").unwrap();
        let bad_batch: Vec<ObservationRecord> = serde_yaml::from_str(
            "- procedure: p1\n  offerings: []\n  observable_property: op\n  feature_of_interest: f1\n  phenomenon_time: {start: 2024-01-01T00:00:00Z}\n",
        )
        .unwrap();

        let err = load(CacheConfig::default(), document, vec![bad_batch])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed"), "{}", err);
    }

    #[tokio::test]
    async fn test_empty_seed_loads() {
        let controller = load(CacheConfig::default(), SeedDocument::default(), Vec::new())
            .await
            .unwrap();
        let summary = summarize(&controller);
        assert!(summary.offerings.is_empty());
        assert_eq!(summary.default_epsg_code, 4326);
    }
}
