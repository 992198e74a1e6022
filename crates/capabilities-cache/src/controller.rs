//! Owner of the live cache.
//!
//! Readers take an immutable snapshot with [`CacheController::snapshot`] and
//! never block. Writers run one at a time against a private copy; the copy is
//! swapped in atomically only if the update did not fail.

use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use metrics::{counter, gauge};
use sos_common::{CacheError, CacheResult};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::CacheConfig;
use crate::content::{ContentCache, WritableContentCache};
use crate::in_memory::InMemoryContentCache;
use crate::integrity;
use crate::model::EntitySet;
use crate::update::ContentCacheUpdate;

/// What happened to the result of an update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The updated cache is now the current snapshot.
    Published,
    /// The update failed; the current snapshot is unchanged.
    Failed(CacheError),
}

impl UpdateOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, UpdateOutcome::Published)
    }
}

#[derive(Debug)]
pub struct CacheController {
    config: CacheConfig,
    current: ArcSwap<InMemoryContentCache>,
    writer: Mutex<()>,
}

impl CacheController {
    /// Start with an empty cache carrying the configured defaults.
    pub fn new(config: CacheConfig) -> Self {
        info!(
            default_epsg_code = config.default_epsg_code,
            languages = ?config.supported_languages,
            "Initializing capabilities cache"
        );
        let initial = InMemoryContentCache::with_config(&config);
        Self {
            config,
            current: ArcSwap::from_pointee(initial),
            writer: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The current cache state. Later updates never modify it.
    pub fn snapshot(&self) -> Arc<InMemoryContentCache> {
        self.current.load_full()
    }

    /// When the current snapshot was published, if ever.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.current.load().last_updated()
    }

    /// Run `update` and publish its result unless it failed.
    ///
    /// A complete update starts from an empty cache, an incremental one from
    /// a copy of the current snapshot. Updates are serialised; reads continue
    /// against the previous snapshot meanwhile.
    ///
    /// Returns an error if `update` still carries a cause from an earlier run.
    pub async fn update(&self, update: &mut dyn ContentCacheUpdate) -> CacheResult<UpdateOutcome> {
        let _writer = self.writer.lock().await;

        if let Some(cause) = update.failure_cause() {
            return Err(CacheError::update_failed(
                update.name(),
                format!("reset before running again (previous cause: {})", cause),
            ));
        }

        let run_id = Uuid::new_v4();
        let complete = update.is_complete_update();
        let kind = if complete { "complete" } else { "incremental" };
        let started = Instant::now();

        let mut working = if complete {
            InMemoryContentCache::with_config(&self.config)
        } else {
            InMemoryContentCache::clone(&self.current.load())
        };
        debug!(update = update.name(), %run_id, kind, "Running cache update");

        update.execute(&mut working);

        if let Some(cause) = update.failure_cause() {
            counter!("sos_cache_update_failures_total", "kind" => kind).increment(1);
            warn!(
                update = update.name(),
                %run_id,
                kind,
                error = %cause,
                "Cache update failed, keeping previous snapshot"
            );
            return Ok(UpdateOutcome::Failed(cause.clone()));
        }

        if complete && self.config.validate_integrity_on_complete_update {
            let dangling = integrity::check(&working);
            if !dangling.is_empty() {
                warn!(
                    update = update.name(),
                    %run_id,
                    dangling = dangling.len(),
                    first = %dangling[0],
                    "Cache contains references to unregistered entities"
                );
            }
        }

        working.set_last_updated(Utc::now());
        let offerings = working.entity_count(EntitySet::Offerings);
        let procedures = working.entity_count(EntitySet::Procedures);
        self.current.store(Arc::new(working));

        counter!("sos_cache_updates_total", "kind" => kind).increment(1);
        gauge!("sos_cache_offerings").set(offerings as f64);
        info!(
            update = update.name(),
            %run_id,
            kind,
            offerings,
            procedures,
            duration_ms = started.elapsed().as_millis() as u64,
            "Published cache snapshot"
        );

        Ok(UpdateOutcome::Published)
    }

    /// Publish a prebuilt cache wholesale.
    pub async fn replace(&self, mut cache: InMemoryContentCache) {
        let _writer = self.writer.lock().await;
        cache.set_last_updated(Utc::now());
        let offerings = cache.entity_count(EntitySet::Offerings);
        self.current.store(Arc::new(cache));
        gauge!("sos_cache_offerings").set(offerings as f64);
        info!(offerings, "Replaced cache snapshot");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::{FeatureInsertion, UpdateStatus};
    use crate::vocabulary::{ContentCacheExt, WritableContentCacheExt};

    struct FailingUpdate {
        status: UpdateStatus,
    }

    impl ContentCacheUpdate for FailingUpdate {
        fn name(&self) -> &str {
            "failing"
        }

        fn execute(&mut self, cache: &mut dyn WritableContentCache) {
            // writes before failing must not leak into the published cache
            let _ = cache.add_offering("half-written");
            self.fail(CacheError::update_failed("failing", "upstream unavailable"));
        }

        fn status(&self) -> &UpdateStatus {
            &self.status
        }

        fn status_mut(&mut self) -> &mut UpdateStatus {
            &mut self.status
        }
    }

    #[tokio::test]
    async fn test_incremental_update_is_published() {
        let controller = CacheController::new(CacheConfig::default());
        assert!(controller.last_updated().is_none());

        let outcome = controller
            .update(&mut FeatureInsertion::new("f1"))
            .await
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Published);
        assert!(controller.snapshot().has_feature_of_interest("f1"));
        assert!(controller.last_updated().is_some());
    }

    #[tokio::test]
    async fn test_failed_update_is_not_published() {
        let controller = CacheController::new(CacheConfig::default());
        let before = controller.snapshot();

        let mut update = FailingUpdate {
            status: UpdateStatus::default(),
        };
        let outcome = controller.update(&mut update).await.unwrap();

        assert!(matches!(outcome, UpdateOutcome::Failed(CacheError::UpdateFailed { .. })));
        assert!(!controller.snapshot().has_offering("half-written"));
        assert!(Arc::ptr_eq(&before, &controller.snapshot()));
    }

    #[tokio::test]
    async fn test_stale_failure_must_be_reset() {
        let controller = CacheController::new(CacheConfig::default());
        let mut update = FeatureInsertion::new("f1");
        update.fail(CacheError::update_failed("feature-insertion", "earlier run"));

        assert!(controller.update(&mut update).await.is_err());

        update.reset();
        assert!(controller.update(&mut update).await.unwrap().is_published());
    }

    #[tokio::test]
    async fn test_snapshot_is_immutable() {
        let controller = CacheController::new(CacheConfig::default());
        let old = controller.snapshot();

        controller
            .update(&mut FeatureInsertion::new("f1"))
            .await
            .unwrap();

        assert!(!old.has_feature_of_interest("f1"));
        assert!(controller.snapshot().has_feature_of_interest("f1"));
    }

    #[tokio::test]
    async fn test_replace() {
        let controller = CacheController::new(CacheConfig::default());
        let mut cache = InMemoryContentCache::new();
        cache.add_offering("o1").unwrap();

        controller.replace(cache).await;

        assert!(controller.snapshot().has_offering("o1"));
        assert!(controller.last_updated().is_some());
    }
}
