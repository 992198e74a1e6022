use sos_common::CacheResult;

use super::{link, record, ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;
use crate::model::Relation;
use crate::validation;
use crate::vocabulary::WritableContentCacheExt;

/// Registers a feature of interest.
#[derive(Debug, Clone)]
pub struct FeatureInsertion {
    feature: String,
    human_readable_name: Option<String>,
    parents: Vec<String>,
    feature_type: Option<String>,
    offerings: Vec<String>,
    status: UpdateStatus,
}

impl FeatureInsertion {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            human_readable_name: None,
            parents: Vec::new(),
            feature_type: None,
            offerings: Vec::new(),
            status: UpdateStatus::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.human_readable_name = Some(name.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    pub fn with_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_type = Some(feature_type.into());
        self
    }

    /// Also associate the feature (and its type) with `offering`.
    pub fn with_offering(mut self, offering: impl Into<String>) -> Self {
        self.offerings.push(offering.into());
        self
    }

    pub(super) fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        validation::not_null_or_empty("feature of interest", &self.feature)?;
        validation::no_null_or_empty_values("parent feature", &self.parents)?;
        validation::no_null_or_empty_values("offering", &self.offerings)?;

        cache.add_feature_of_interest(&self.feature)?;
        if let Some(name) = &self.human_readable_name {
            cache.add_feature_of_interest_human_readable_name(&self.feature, name)?;
        }
        cache.add_parent_features(&self.feature, &self.parents)?;
        if let Some(feature_type) = &self.feature_type {
            cache.add_feature_of_interest_type(feature_type)?;
        }

        for offering in &self.offerings {
            link(cache, Relation::FeaturesOfInterestForOffering, offering, &self.feature)?;
            if let Some(feature_type) = &self.feature_type {
                link(cache, Relation::FeatureOfInterestTypesForOffering, offering, feature_type)?;
            }
        }
        Ok(())
    }
}

impl ContentCacheUpdate for FeatureInsertion {
    fn name(&self) -> &str {
        "feature-insertion"
    }

    fn execute(&mut self, cache: &mut dyn WritableContentCache) {
        let result = self.apply(cache);
        record(self, result);
    }

    fn status(&self) -> &UpdateStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut UpdateStatus {
        &mut self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::ContentCacheExt;
    use crate::InMemoryContentCache;

    #[test]
    fn test_registers_feature_with_metadata() {
        let mut cache = InMemoryContentCache::new();
        let mut update = FeatureInsertion::new("urn:feature:elbe-1")
            .with_name("Elbe, Dresden")
            .with_parent("urn:feature:elbe")
            .with_type("http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint")
            .with_offering("o1");

        update.execute(&mut cache);

        assert!(!update.failed());
        assert!(cache.has_feature_of_interest("urn:feature:elbe-1"));
        assert_eq!(
            cache.feature_of_interest_identifier_for_human_readable_name("Elbe, Dresden"),
            Some("urn:feature:elbe-1".to_string())
        );
        assert!(cache
            .child_features("urn:feature:elbe", false, false)
            .contains("urn:feature:elbe-1"));
        assert!(cache.offerings_for_feature_of_interest("urn:feature:elbe-1").contains("o1"));
        assert_eq!(cache.feature_of_interest_types_for_offering("o1").len(), 1);
    }

    #[test]
    fn test_blank_parent_fails_before_any_write() {
        let mut cache = InMemoryContentCache::new();
        let mut update = FeatureInsertion::new("f1").with_parent("");
        update.execute(&mut cache);

        assert!(update.failed());
        assert!(!cache.has_feature_of_interest("f1"));
    }
}
