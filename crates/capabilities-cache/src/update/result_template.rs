use sos_common::CacheResult;

use super::{link, record, ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;
use crate::model::Relation;
use crate::validation;
use crate::vocabulary::WritableContentCacheExt;

/// Registers a result template for an offering.
#[derive(Debug, Clone)]
pub struct ResultTemplateInsertion {
    template: String,
    offering: String,
    observable_property: String,
    feature_of_interest: String,
    status: UpdateStatus,
}

impl ResultTemplateInsertion {
    pub fn new(
        template: impl Into<String>,
        offering: impl Into<String>,
        observable_property: impl Into<String>,
        feature_of_interest: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            offering: offering.into(),
            observable_property: observable_property.into(),
            feature_of_interest: feature_of_interest.into(),
            status: UpdateStatus::default(),
        }
    }

    fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        validation::not_null_or_empty("result template", &self.template)?;
        validation::not_null_or_empty("offering", &self.offering)?;
        validation::not_null_or_empty("observable property", &self.observable_property)?;
        validation::not_null_or_empty("feature of interest", &self.feature_of_interest)?;

        let template = self.template.as_str();
        cache.add_result_template(template)?;
        cache.add_feature_of_interest(&self.feature_of_interest)?;

        link(cache, Relation::ResultTemplatesForOffering, &self.offering, template)?;
        link(
            cache,
            Relation::ObservablePropertiesForResultTemplate,
            template,
            &self.observable_property,
        )?;
        link(
            cache,
            Relation::FeaturesOfInterestForResultTemplate,
            template,
            &self.feature_of_interest,
        )?;
        link(
            cache,
            Relation::FeaturesOfInterestForOffering,
            &self.offering,
            &self.feature_of_interest,
        )
    }
}

impl ContentCacheUpdate for ResultTemplateInsertion {
    fn name(&self) -> &str {
        "result-template-insertion"
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
    fn test_template_is_reachable_from_every_side() {
        let mut cache = InMemoryContentCache::new();
        let mut update = ResultTemplateInsertion::new("rt-1", "o1", "temperature", "f1");
        update.execute(&mut cache);
        assert!(!update.failed());

        assert!(cache.has_result_template("rt-1"));
        assert!(cache.result_templates_for_offering("o1").contains("rt-1"));
        assert!(cache.offerings_for_result_template("rt-1").contains("o1"));
        assert!(cache.result_templates_for_observable_property("temperature").contains("rt-1"));
        assert!(cache.features_of_interest_for_result_template("rt-1").contains("f1"));
        assert!(cache.result_templates_for_feature_of_interest("f1").contains("rt-1"));
    }

    #[test]
    fn test_missing_offering_fails() {
        let mut cache = InMemoryContentCache::new();
        let mut update = ResultTemplateInsertion::new("rt-1", "", "temperature", "f1");
        update.execute(&mut cache);
        assert!(update.failed());
        assert!(!cache.has_result_template("rt-1"));
    }
}
