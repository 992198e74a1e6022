use serde::{Deserialize, Serialize};
use sos_common::CacheResult;
use tracing::debug;

use super::{link, link_all, record, unlink_everywhere, ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;
use crate::model::{
    ComponentAggregation, Domain, EntitySet, Hierarchy, NameKind, Relation, TypeInstance,
};
use crate::validation;
use crate::vocabulary::{ContentCacheExt, WritableContentCacheExt};

/// An offering a sensor is inserted into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorOffering {
    pub identifier: String,
    pub name: Option<String>,
    pub parent_offerings: Vec<String>,
}

impl SensorOffering {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }
}

/// Registers a procedure together with its offerings and capabilities.
#[derive(Debug, Clone)]
pub struct SensorInsertion {
    procedure: String,
    description_format: Option<String>,
    offerings: Vec<SensorOffering>,
    observable_properties: Vec<String>,
    observation_types: Vec<String>,
    feature_of_interest_types: Vec<String>,
    parent_procedures: Vec<String>,
    hidden_child_procedures: Vec<String>,
    type_instance: Option<TypeInstance>,
    procedure_type: Option<String>,
    component_aggregation: Option<ComponentAggregation>,
    related_features: Vec<(String, Vec<String>)>,
    status: UpdateStatus,
}

impl SensorInsertion {
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
            description_format: None,
            offerings: Vec::new(),
            observable_properties: Vec::new(),
            observation_types: Vec::new(),
            feature_of_interest_types: Vec::new(),
            parent_procedures: Vec::new(),
            hidden_child_procedures: Vec::new(),
            type_instance: None,
            procedure_type: None,
            component_aggregation: None,
            related_features: Vec::new(),
            status: UpdateStatus::default(),
        }
    }

    pub fn with_description_format(mut self, format: impl Into<String>) -> Self {
        self.description_format = Some(format.into());
        self
    }

    pub fn with_offering(mut self, offering: SensorOffering) -> Self {
        self.offerings.push(offering);
        self
    }

    pub fn with_observable_property(mut self, observable_property: impl Into<String>) -> Self {
        self.observable_properties.push(observable_property.into());
        self
    }

    pub fn with_observation_type(mut self, observation_type: impl Into<String>) -> Self {
        self.observation_types.push(observation_type.into());
        self
    }

    pub fn with_feature_of_interest_type(mut self, feature_type: impl Into<String>) -> Self {
        self.feature_of_interest_types.push(feature_type.into());
        self
    }

    pub fn with_parent_procedure(mut self, parent: impl Into<String>) -> Self {
        self.parent_procedures.push(parent.into());
        self
    }

    /// A child procedure that is listed for the offerings but not advertised on its own.
    pub fn with_hidden_child_procedure(mut self, child: impl Into<String>) -> Self {
        self.hidden_child_procedures.push(child.into());
        self
    }

    pub fn as_type(mut self) -> Self {
        self.type_instance = Some(TypeInstance::Type);
        self
    }

    /// Mark the procedure as an instance of `procedure_type`.
    pub fn as_instance_of(mut self, procedure_type: impl Into<String>) -> Self {
        self.type_instance = Some(TypeInstance::Instance);
        self.procedure_type = Some(procedure_type.into());
        self
    }

    pub fn with_component_aggregation(mut self, kind: ComponentAggregation) -> Self {
        self.component_aggregation = Some(kind);
        self
    }

    pub fn with_related_feature(mut self, feature: impl Into<String>, roles: Vec<String>) -> Self {
        self.related_features.push((feature.into(), roles));
        self
    }

    fn validate(&self) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", &self.procedure)?;
        if self.offerings.is_empty() {
            return Err(sos_common::CacheError::null_argument("offering"));
        }
        for offering in &self.offerings {
            validation::not_null_or_empty("offering", &offering.identifier)?;
            validation::no_null_or_empty_values("parent offering", &offering.parent_offerings)?;
        }
        if let Some(format) = &self.description_format {
            validation::not_null_or_empty("procedure description format", format)?;
        }
        if let Some(procedure_type) = &self.procedure_type {
            validation::not_null_or_empty("procedure type", procedure_type)?;
        }
        validation::no_null_or_empty_values("observable property", &self.observable_properties)?;
        validation::no_null_or_empty_values("observation type", &self.observation_types)?;
        validation::no_null_or_empty_values(
            "feature of interest type",
            &self.feature_of_interest_types,
        )?;
        validation::no_null_or_empty_values("parent procedure", &self.parent_procedures)?;
        validation::no_null_or_empty_values(
            "hidden child procedure",
            &self.hidden_child_procedures,
        )?;
        for (feature, roles) in &self.related_features {
            validation::not_null_or_empty("related feature", feature)?;
            validation::no_null_or_empty_values("role", roles)?;
        }
        Ok(())
    }

    fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        self.validate()?;
        let procedure = self.procedure.as_str();

        cache.add_procedure(procedure)?;
        cache.add_published_procedure(procedure)?;
        cache.add_parent_procedures(procedure, &self.parent_procedures)?;
        cache.add_procedures(&self.hidden_child_procedures)?;
        for child in &self.hidden_child_procedures {
            cache.add_parent_procedure(child, procedure)?;
        }
        if let Some(format) = &self.description_format {
            link(cache, Relation::DescriptionFormatsForProcedure, procedure, format)?;
        }
        if let Some(kind) = self.type_instance {
            cache.set_type_instance_of_procedure(procedure, kind)?;
        }
        if let Some(procedure_type) = &self.procedure_type {
            cache.add_procedure(procedure_type)?;
            link(cache, Relation::InstancesForProcedureType, procedure_type, procedure)?;
        }
        if let Some(kind) = self.component_aggregation {
            cache.set_component_aggregation_of_procedure(procedure, kind)?;
        }

        cache.add_observable_properties(&self.observable_properties)?;
        cache.add_published_observable_properties(&self.observable_properties)?;
        link_all(
            cache,
            Relation::ObservablePropertiesForProcedure,
            procedure,
            &self.observable_properties,
        )?;

        for offering in &self.offerings {
            let id = offering.identifier.as_str();
            cache.add_offering(id)?;
            cache.add_published_offering(id)?;
            if let Some(name) = &offering.name {
                cache.set_name_for_offering(id, name)?;
            }
            cache.add_parent_offerings(id, &offering.parent_offerings)?;

            link(cache, Relation::ProceduresForOffering, id, procedure)?;
            link_all(
                cache,
                Relation::HiddenChildProceduresForOffering,
                id,
                &self.hidden_child_procedures,
            )?;
            link_all(
                cache,
                Relation::ObservablePropertiesForOffering,
                id,
                &self.observable_properties,
            )?;
            link_all(
                cache,
                Relation::AllowedObservationTypesForOffering,
                id,
                &self.observation_types,
            )?;
            link_all(
                cache,
                Relation::AllowedFeatureOfInterestTypesForOffering,
                id,
                &self.feature_of_interest_types,
            )?;

            for (feature, roles) in &self.related_features {
                cache.add_related_feature(feature)?;
                link(cache, Relation::RelatedFeaturesForOffering, id, feature)?;
                link_all(cache, Relation::RolesForRelatedFeature, feature, roles)?;
            }

            for observable_property in &self.observable_properties {
                if cache.is_composite_phenomenon(observable_property) {
                    link(
                        cache,
                        Relation::CompositePhenomenonsForOffering,
                        id,
                        observable_property,
                    )?;
                    link(
                        cache,
                        Relation::CompositePhenomenonsForProcedure,
                        procedure,
                        observable_property,
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl ContentCacheUpdate for SensorInsertion {
    fn name(&self) -> &str {
        "sensor-insertion"
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

/// Removes a procedure from every association.
///
/// Offerings left without any procedure are removed as well, together with
/// their aggregates; the global aggregates are then rebuilt.
#[derive(Debug, Clone)]
pub struct SensorDeletion {
    procedure: String,
    status: UpdateStatus,
}

impl SensorDeletion {
    pub fn new(procedure: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
            status: UpdateStatus::default(),
        }
    }

    fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        let procedure = self.procedure.as_str();
        validation::not_null_or_empty("procedure", procedure)?;

        let mut offerings = cache.offerings_for_procedure(procedure);
        offerings.extend(cache.offerings_for_hidden_child_procedure(procedure));

        for relation in keyed_by(Domain::Procedure) {
            unlink_everywhere(cache, relation, procedure)?;
        }
        cache.remove_procedure(procedure)?;
        cache.remove_published_procedure(procedure)?;
        cache.remove_from_hierarchy(Hierarchy::Procedures, procedure)?;
        cache.remove_phenomenon_time_for_procedure(procedure)?;
        cache.remove_type_instance_of_procedure(procedure)?;
        cache.remove_component_aggregation_of_procedure(procedure)?;
        cache.remove_human_readable_name(NameKind::Procedure, procedure)?;

        let mut orphaned: Vec<String> = offerings
            .into_iter()
            .filter(|o| !cache.has_related(Relation::ProceduresForOffering, o))
            .collect();
        orphaned.sort();
        for offering in &orphaned {
            remove_offering(cache, offering)?;
        }

        debug!(
            procedure = procedure,
            removed_offerings = orphaned.len(),
            "Removed procedure from cache"
        );
        cache.recalculate_global_aggregates();
        Ok(())
    }
}

impl ContentCacheUpdate for SensorDeletion {
    fn name(&self) -> &str {
        "sensor-deletion"
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

/// Relations whose keys are identifiers of `domain`.
fn keyed_by(domain: Domain) -> impl Iterator<Item = Relation> {
    Relation::ALL
        .into_iter()
        .filter(move |relation| relation.domains().0 == domain)
}

/// Remove every trace of `offering`. Global aggregates are left stale.
pub(crate) fn remove_offering(
    cache: &mut dyn WritableContentCache,
    offering: &str,
) -> CacheResult<()> {
    for relation in keyed_by(Domain::Offering) {
        unlink_everywhere(cache, relation, offering)?;
    }
    cache.remove_entity(EntitySet::Offerings, offering)?;
    cache.remove_entity(EntitySet::PublishedOfferings, offering)?;
    cache.remove_from_hierarchy(Hierarchy::Offerings, offering)?;
    cache.remove_aggregates_for_offering(offering)?;
    cache.remove_name_for_offering(offering)?;
    cache.remove_i18n_names_for_offering(offering)?;
    cache.remove_i18n_descriptions_for_offering(offering)?;
    cache.remove_human_readable_name(NameKind::Offering, offering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryContentCache;
    use sos_common::{BoundingBox, CacheError, Envelope};

    fn insert(cache: &mut InMemoryContentCache, procedure: &str, offering: &str) {
        let mut update = SensorInsertion::new(procedure)
            .with_offering(SensorOffering::new(offering))
            .with_observable_property("temperature")
            .with_observation_type("OM_Measurement")
            .with_description_format("http://www.opengis.net/sensorml/2.0");
        update.execute(cache);
        assert!(!update.failed(), "{:?}", update.failure_cause());
    }

    #[test]
    fn test_insertion_links_both_directions() {
        let mut cache = InMemoryContentCache::new();
        insert(&mut cache, "p1", "o1");

        assert!(cache.has_procedure("p1"));
        assert!(cache.has_published_offering("o1"));
        assert!(cache.procedures_for_offering("o1").contains("p1"));
        assert!(cache.offerings_for_procedure("p1").contains("o1"));
        assert!(cache.observable_properties_for_procedure("p1").contains("temperature"));
        assert!(cache.procedures_for_observable_property("temperature").contains("p1"));
        assert!(cache.allowed_observation_types_for_offering("o1").contains("OM_Measurement"));
        assert!(cache
            .procedures_for_procedure_description_format("http://www.opengis.net/sensorml/2.0")
            .contains("p1"));
    }

    #[test]
    fn test_insertion_without_offering_fails() {
        let mut cache = InMemoryContentCache::new();
        let mut update = SensorInsertion::new("p1");
        update.execute(&mut cache);
        assert_eq!(update.failure_cause(), Some(&CacheError::null_argument("offering")));
        assert!(!cache.has_procedure("p1"));
    }

    #[test]
    fn test_instance_and_hidden_children() {
        let mut cache = InMemoryContentCache::new();
        let mut update = SensorInsertion::new("station-7")
            .with_offering(SensorOffering::new("o1"))
            .with_hidden_child_procedure("station-7/thermometer")
            .as_instance_of("station-type");
        update.execute(&mut cache);

        assert!(cache.is_procedure_instance("station-7"));
        assert!(cache.instances_for_procedure_type("station-type").contains("station-7"));
        assert!(cache.hidden_child_procedures_for_offering("o1").contains("station-7/thermometer"));
        assert!(cache
            .child_procedures("station-7", false, false)
            .contains("station-7/thermometer"));
    }

    #[test]
    fn test_deletion_removes_orphaned_offerings() {
        let mut cache = InMemoryContentCache::new();
        insert(&mut cache, "p1", "o1");
        insert(&mut cache, "p1", "shared");
        insert(&mut cache, "p2", "shared");
        cache
            .set_envelope_for_offering(
                "o1",
                Envelope::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 4326),
            )
            .unwrap();
        cache
            .set_envelope_for_offering(
                "shared",
                Envelope::new(BoundingBox::new(5.0, 5.0, 6.0, 6.0), 4326),
            )
            .unwrap();
        cache.recalculate_global_envelope();

        let mut deletion = SensorDeletion::new("p1");
        deletion.execute(&mut cache);
        assert!(!deletion.failed());

        assert!(!cache.has_procedure("p1"));
        assert!(!cache.has_offering("o1"));
        assert!(cache.has_offering("shared"));
        assert!(cache.offerings_for_observable_property("temperature").contains("shared"));
        assert!(!cache.offerings_for_observable_property("temperature").contains("o1"));
        assert!(!cache.procedures_for_observable_property("temperature").contains("p1"));
        assert!(cache.envelope_for_offering("o1").is_none());
        assert_eq!(
            cache.global_envelope().and_then(|e| e.bbox),
            Some(BoundingBox::new(5.0, 5.0, 6.0, 6.0))
        );
    }
}
