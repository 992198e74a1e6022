//! Units of work that mutate the cache.
//!
//! An update receives the writable cache it should mutate when it is
//! executed, performs a bounded set of mutations and reports failure by
//! attaching a cause instead of returning an error. The
//! [`CacheController`](crate::CacheController) decides whether the result
//! gets published.

mod composite;
mod feature;
mod initial;
pub mod link;
mod observation;
mod result_template;
mod sensor;

pub use composite::CompositeUpdate;
pub use feature::FeatureInsertion;
pub use initial::{
    CapabilitiesSeed, FeatureSeed, InitialLoad, ObservablePropertySeed, OfferingSeed, ProcedureSeed,
};
pub use link::{link, link_all, unlink, unlink_everywhere};
pub use observation::{ObservationInsertion, ObservationRecord};
pub use result_template::ResultTemplateInsertion;
pub use sensor::{SensorDeletion, SensorInsertion, SensorOffering};

use sos_common::{CacheError, CacheResult};

use crate::content::WritableContentCache;

/// Failure state shared by every update.
///
/// There is no separate "failed" state: an update is failed exactly when a
/// cause is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateStatus {
    cause: Option<CacheError>,
}

impl UpdateStatus {
    pub fn fail(&mut self, cause: CacheError) {
        self.cause = Some(cause);
    }

    pub fn failed(&self) -> bool {
        self.cause.is_some()
    }

    pub fn cause(&self) -> Option<&CacheError> {
        self.cause.as_ref()
    }

    pub fn reset(&mut self) {
        self.cause = None;
    }
}

/// A unit of cache mutation.
///
/// Implementors provide [`execute`](Self::execute) and access to their
/// [`UpdateStatus`]; the failure bookkeeping comes for free.
pub trait ContentCacheUpdate: Send {
    /// Short name used in logs and failure causes.
    fn name(&self) -> &str;

    /// Apply this update to `cache`. Must not panic on bad input; record a
    /// cause with [`fail`](Self::fail) and stop instead.
    fn execute(&mut self, cache: &mut dyn WritableContentCache);

    fn status(&self) -> &UpdateStatus;

    fn status_mut(&mut self) -> &mut UpdateStatus;

    /// Record `cause`. Mutations already issued are not rolled back.
    fn fail(&mut self, cause: CacheError) {
        self.status_mut().fail(cause);
    }

    fn failed(&self) -> bool {
        self.status().failed()
    }

    fn failure_cause(&self) -> Option<&CacheError> {
        self.status().cause()
    }

    /// Clear the failure cause so the update can be retried.
    fn reset(&mut self) {
        self.status_mut().reset();
    }

    /// Complete updates rebuild the whole cache; their result replaces the
    /// current state instead of being merged into it.
    fn is_complete_update(&self) -> bool {
        false
    }
}

/// Record the error of `result`, if any, as the failure cause of `update`.
pub(crate) fn record<U: ContentCacheUpdate + ?Sized>(update: &mut U, result: CacheResult<()>) {
    if let Err(cause) = result {
        update.fail(cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::WritableContentCacheExt;
    use crate::InMemoryContentCache;

    struct AddOffering {
        offering: String,
        status: UpdateStatus,
    }

    impl ContentCacheUpdate for AddOffering {
        fn name(&self) -> &str {
            "add-offering"
        }

        fn execute(&mut self, cache: &mut dyn WritableContentCache) {
            let result = cache.add_offering(&self.offering);
            record(self, result);
        }

        fn status(&self) -> &UpdateStatus {
            &self.status
        }

        fn status_mut(&mut self) -> &mut UpdateStatus {
            &mut self.status
        }
    }

    #[test]
    fn test_fail_and_reset() {
        let mut update = AddOffering {
            offering: "o1".to_string(),
            status: UpdateStatus::default(),
        };
        assert!(!update.failed());
        assert!(!update.is_complete_update());

        let cause = CacheError::update_failed("add-offering", "source unavailable");
        update.fail(cause.clone());
        assert!(update.failed());
        assert_eq!(update.failure_cause(), Some(&cause));

        update.reset();
        assert!(!update.failed());
        assert!(update.failure_cause().is_none());
    }

    #[test]
    fn test_invalid_input_becomes_cause() {
        let mut cache = InMemoryContentCache::new();
        let mut update = AddOffering {
            offering: String::new(),
            status: UpdateStatus::default(),
        };
        update.execute(&mut cache);

        assert!(matches!(
            update.failure_cause(),
            Some(CacheError::NullArgument { .. })
        ));
    }
}
