//! Snapshot publication through the cache controller.

use std::collections::HashSet;
use std::sync::Arc;

use capabilities_cache::update::{
    CompositeUpdate, FeatureInsertion, InitialLoad, ObservationInsertion, SensorInsertion,
    SensorOffering,
};
use capabilities_cache::{
    CacheConfig, CacheController, CacheError, ContentCache, ContentCacheExt, ContentCacheUpdate,
    UpdateOutcome, UpdateStatus, WritableContentCache, WritableContentCacheExt,
};
use test_utils::{ids, offering_ids, period, sample_observations, sample_seed};

struct AddOffering {
    offering: String,
    status: UpdateStatus,
}

impl AddOffering {
    fn new(offering: &str) -> Self {
        Self {
            offering: offering.to_string(),
            status: UpdateStatus::default(),
        }
    }
}

impl ContentCacheUpdate for AddOffering {
    fn name(&self) -> &str {
        "add-offering"
    }

    fn execute(&mut self, cache: &mut dyn WritableContentCache) {
        let result = cache
            .add_offering(&self.offering)
            .and_then(|_| cache.add_published_offering(&self.offering));
        if let Err(cause) = result {
            self.fail(cause);
        }
    }

    fn status(&self) -> &UpdateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut UpdateStatus {
        &mut self.status
    }
}

async fn loaded_controller() -> CacheController {
    let controller = CacheController::new(CacheConfig::default());
    let outcome = controller
        .update(&mut InitialLoad::new(sample_seed()))
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Published);
    controller
}

#[tokio::test]
async fn test_initial_load_publishes_seed() {
    let controller = loaded_controller().await;
    let snapshot = controller.snapshot();

    assert_eq!(snapshot.offerings().len(), 3);
    assert!(snapshot.has_epsg_code(31467));
    assert_eq!(snapshot.default_epsg_code(), 4326);
    assert!(controller.last_updated().is_some());
}

#[tokio::test]
async fn test_complete_update_replaces_previous_state() {
    let controller = loaded_controller().await;
    controller
        .update(&mut AddOffering::new("http://example.org/offering/extra"))
        .await
        .unwrap();

    let mut rebuild = CompositeUpdate::complete("rebuild").with(FeatureInsertion::new("f-only"));
    let outcome = controller.update(&mut rebuild).await.unwrap();

    assert!(outcome.is_published());
    let snapshot = controller.snapshot();
    assert!(snapshot.offerings().is_empty());
    assert!(snapshot.has_feature_of_interest("f-only"));
    // configured defaults survive the rebuild
    assert!(snapshot.has_epsg_code(4326));
}

#[tokio::test]
async fn test_incremental_updates_accumulate() {
    let controller = loaded_controller().await;

    let mut sensor = SensorInsertion::new("http://example.org/procedure/gauge-3")
        .with_description_format(ids::SENSOR_ML)
        .as_instance_of(ids::PROCEDURE_TYPE)
        .with_observable_property(ids::WATER_LEVEL)
        .with_offering(SensorOffering::new("http://example.org/offering/gauge-3"));
    assert!(controller.update(&mut sensor).await.unwrap().is_published());

    let mut observations = ObservationInsertion::new(sample_observations());
    assert!(controller.update(&mut observations).await.unwrap().is_published());

    let snapshot = controller.snapshot();
    assert!(snapshot.has_published_offering("http://example.org/offering/gauge-3"));
    assert!(snapshot
        .instances_for_procedure_type(ids::PROCEDURE_TYPE)
        .contains("http://example.org/procedure/gauge-3"));
    assert_eq!(
        snapshot.phenomenon_time_for_offering(ids::OFFERING_GAUGE_2),
        Some(period("2024-02-01T00:00:00Z", "2024-03-01T00:00:00Z"))
    );
}

#[tokio::test]
async fn test_failed_update_keeps_previous_snapshot() {
    let controller = loaded_controller().await;
    let before = controller.snapshot();

    // second offering is blank: the whole composite fails
    let mut update = CompositeUpdate::new("batch")
        .with(AddOffering::new("http://example.org/offering/new"))
        .with(AddOffering::new(""));
    let outcome = controller.update(&mut update).await.unwrap();

    match outcome {
        UpdateOutcome::Failed(CacheError::NullArgument { .. }) => {}
        other => panic!("unexpected outcome: {:?}", other),
    }
    let after = controller.snapshot();
    assert!(Arc::ptr_eq(&before, &after));
    assert!(!after.has_offering("http://example.org/offering/new"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_snapshots_during_writes() {
    let controller = Arc::new(loaded_controller().await);
    let base: HashSet<String> = controller.snapshot().offerings();
    let added = offering_ids("concurrent", 50);

    let writer = {
        let controller = Arc::clone(&controller);
        let added = added.clone();
        tokio::spawn(async move {
            for offering in &added {
                let outcome = controller.update(&mut AddOffering::new(offering)).await;
                assert!(outcome.unwrap().is_published());
            }
        })
    };

    let mut readers = Vec::new();
    for _ in 0..4 {
        let controller = Arc::clone(&controller);
        let base = base.clone();
        let added = added.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..200 {
                let snapshot = controller.snapshot();
                let seen = snapshot.offerings();

                // every read is some published state: the base plus a prefix
                // of the writer's offerings, nothing else
                assert!(base.is_subset(&seen));
                let new_count = seen.len() - base.len();
                for (i, offering) in added.iter().enumerate() {
                    assert_eq!(seen.contains(offering), i < new_count, "torn read at {}", i);
                }
                // the snapshot never changes underneath its reader
                assert_eq!(snapshot.offerings(), seen);
                tokio::task::yield_now().await;
            }
        }));
    }

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }

    let final_offerings = controller.snapshot().offerings();
    assert_eq!(final_offerings.len(), base.len() + added.len());
}
