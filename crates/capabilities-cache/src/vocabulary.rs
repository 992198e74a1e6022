//! Named query and mutation vocabulary.
//!
//! Request handlers and update actions are written against names such as
//! `observable_properties_for_offering` or `has_max_phenomenon_time_for_offering`.
//! These are derived accessors over the primitive operations of
//! [`ContentCache`] and [`WritableContentCache`], implemented once for every
//! cache type through blanket impls.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sos_common::{CacheResult, Envelope, TimePeriod};

use crate::content::{ContentCache, WritableContentCache};
use crate::model::{
    ComponentAggregation, EntitySet, EnvelopeKind, Hierarchy, NameKind, Relation, Scope,
    TimeKind, TypeInstance,
};

/// Named queries over [`ContentCache`].
pub trait ContentCacheExt: ContentCache {
    // === Sets ===
    fn offerings(&self) -> HashSet<String> {
        self.entities(EntitySet::Offerings)
    }
    fn has_offering(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::Offerings, id)
    }
    fn procedures(&self) -> HashSet<String> {
        self.entities(EntitySet::Procedures)
    }
    fn has_procedure(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::Procedures, id)
    }
    fn observable_properties(&self) -> HashSet<String> {
        self.entities(EntitySet::ObservableProperties)
    }
    fn has_observable_property(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::ObservableProperties, id)
    }
    fn features_of_interest(&self) -> HashSet<String> {
        self.entities(EntitySet::FeaturesOfInterest)
    }
    fn has_feature_of_interest(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::FeaturesOfInterest, id)
    }
    fn result_templates(&self) -> HashSet<String> {
        self.entities(EntitySet::ResultTemplates)
    }
    fn has_result_template(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::ResultTemplates, id)
    }
    fn related_features(&self) -> HashSet<String> {
        self.entities(EntitySet::RelatedFeatures)
    }
    fn has_related_feature(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::RelatedFeatures, id)
    }
    fn composite_phenomenons(&self) -> HashSet<String> {
        self.entities(EntitySet::CompositePhenomenons)
    }
    fn has_composite_phenomenon(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::CompositePhenomenons, id)
    }
    fn published_offerings(&self) -> HashSet<String> {
        self.entities(EntitySet::PublishedOfferings)
    }
    fn has_published_offering(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::PublishedOfferings, id)
    }
    fn published_procedures(&self) -> HashSet<String> {
        self.entities(EntitySet::PublishedProcedures)
    }
    fn has_published_procedure(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::PublishedProcedures, id)
    }
    fn published_features_of_interest(&self) -> HashSet<String> {
        self.entities(EntitySet::PublishedFeaturesOfInterest)
    }
    fn has_published_feature_of_interest(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::PublishedFeaturesOfInterest, id)
    }
    fn published_observable_properties(&self) -> HashSet<String> {
        self.entities(EntitySet::PublishedObservableProperties)
    }
    fn has_published_observable_property(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::PublishedObservableProperties, id)
    }
    fn observation_types(&self) -> HashSet<String> {
        self.entities(EntitySet::ObservationTypes)
    }
    fn has_observation_type(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::ObservationTypes, id)
    }
    fn feature_of_interest_types(&self) -> HashSet<String> {
        self.entities(EntitySet::FeatureOfInterestTypes)
    }
    fn has_feature_of_interest_type(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::FeatureOfInterestTypes, id)
    }
    fn requestable_procedure_description_formats(&self) -> HashSet<String> {
        self.entities(EntitySet::RequestableProcedureDescriptionFormats)
    }
    fn has_requestable_procedure_description_format(&self, id: &str) -> bool {
        self.contains_entity(EntitySet::RequestableProcedureDescriptionFormats, id)
    }

    // === Associations ===
    fn observable_properties_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::ObservablePropertiesForOffering, offering)
    }
    fn offerings_for_observable_property(&self, observable_property: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForObservableProperty, observable_property)
    }
    fn procedures_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::ProceduresForOffering, offering)
    }
    fn offerings_for_procedure(&self, procedure: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForProcedure, procedure)
    }
    fn features_of_interest_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::FeaturesOfInterestForOffering, offering)
    }
    fn offerings_for_feature_of_interest(&self, feature_of_interest: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForFeatureOfInterest, feature_of_interest)
    }
    fn related_features_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::RelatedFeaturesForOffering, offering)
    }
    fn offerings_for_related_feature(&self, related_feature: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForRelatedFeature, related_feature)
    }
    fn result_templates_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::ResultTemplatesForOffering, offering)
    }
    fn offerings_for_result_template(&self, result_template: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForResultTemplate, result_template)
    }
    fn composite_phenomenons_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::CompositePhenomenonsForOffering, offering)
    }
    fn offerings_for_composite_phenomenon(&self, composite_phenomenon: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForCompositePhenomenon, composite_phenomenon)
    }
    fn allowed_observation_types_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::AllowedObservationTypesForOffering, offering)
    }
    fn offerings_for_allowed_observation_type(
        &self,
        allowed_observation_type: &str,
    ) -> HashSet<String> {
        self.related(Relation::OfferingsForAllowedObservationType, allowed_observation_type)
    }
    fn allowed_feature_of_interest_types_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::AllowedFeatureOfInterestTypesForOffering, offering)
    }
    fn offerings_for_allowed_feature_of_interest_type(
        &self,
        allowed_feature_of_interest_type: &str,
    ) -> HashSet<String> {
        self.related(
            Relation::OfferingsForAllowedFeatureOfInterestType,
            allowed_feature_of_interest_type,
        )
    }
    fn observation_types_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::ObservationTypesForOffering, offering)
    }
    fn offerings_for_observation_type(&self, observation_type: &str) -> HashSet<String> {
        self.related(Relation::OfferingsForObservationType, observation_type)
    }
    fn feature_of_interest_types_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::FeatureOfInterestTypesForOffering, offering)
    }
    fn offerings_for_feature_of_interest_type(
        &self,
        feature_of_interest_type: &str,
    ) -> HashSet<String> {
        self.related(Relation::OfferingsForFeatureOfInterestType, feature_of_interest_type)
    }
    fn hidden_child_procedures_for_offering(&self, offering: &str) -> HashSet<String> {
        self.related(Relation::HiddenChildProceduresForOffering, offering)
    }
    fn offerings_for_hidden_child_procedure(
        &self,
        hidden_child_procedure: &str,
    ) -> HashSet<String> {
        self.related(Relation::OfferingsForHiddenChildProcedure, hidden_child_procedure)
    }
    fn observable_properties_for_procedure(&self, procedure: &str) -> HashSet<String> {
        self.related(Relation::ObservablePropertiesForProcedure, procedure)
    }
    fn procedures_for_observable_property(&self, observable_property: &str) -> HashSet<String> {
        self.related(Relation::ProceduresForObservableProperty, observable_property)
    }
    fn features_of_interest_for_procedure(&self, procedure: &str) -> HashSet<String> {
        self.related(Relation::FeaturesOfInterestForProcedure, procedure)
    }
    fn procedures_for_feature_of_interest(&self, feature_of_interest: &str) -> HashSet<String> {
        self.related(Relation::ProceduresForFeatureOfInterest, feature_of_interest)
    }
    fn composite_phenomenons_for_procedure(&self, procedure: &str) -> HashSet<String> {
        self.related(Relation::CompositePhenomenonsForProcedure, procedure)
    }
    fn procedures_for_composite_phenomenon(&self, composite_phenomenon: &str) -> HashSet<String> {
        self.related(Relation::ProceduresForCompositePhenomenon, composite_phenomenon)
    }
    fn procedure_description_formats_for_procedure(&self, procedure: &str) -> HashSet<String> {
        self.related(Relation::DescriptionFormatsForProcedure, procedure)
    }
    fn procedures_for_procedure_description_format(
        &self,
        procedure_description_format: &str,
    ) -> HashSet<String> {
        self.related(Relation::ProceduresForDescriptionFormat, procedure_description_format)
    }
    fn instances_for_procedure_type(&self, procedure_type: &str) -> HashSet<String> {
        self.related(Relation::InstancesForProcedureType, procedure_type)
    }
    fn procedure_types_for_instance(&self, instance: &str) -> HashSet<String> {
        self.related(Relation::TypesForProcedureInstance, instance)
    }
    fn observable_properties_for_result_template(&self, result_template: &str) -> HashSet<String> {
        self.related(Relation::ObservablePropertiesForResultTemplate, result_template)
    }
    fn result_templates_for_observable_property(
        &self,
        observable_property: &str,
    ) -> HashSet<String> {
        self.related(Relation::ResultTemplatesForObservableProperty, observable_property)
    }
    fn features_of_interest_for_result_template(&self, result_template: &str) -> HashSet<String> {
        self.related(Relation::FeaturesOfInterestForResultTemplate, result_template)
    }
    fn result_templates_for_feature_of_interest(
        &self,
        feature_of_interest: &str,
    ) -> HashSet<String> {
        self.related(Relation::ResultTemplatesForFeatureOfInterest, feature_of_interest)
    }
    fn observable_properties_for_composite_phenomenon(
        &self,
        composite_phenomenon: &str,
    ) -> HashSet<String> {
        self.related(Relation::ObservablePropertiesForCompositePhenomenon, composite_phenomenon)
    }
    fn composite_phenomenons_for_observable_property(
        &self,
        observable_property: &str,
    ) -> HashSet<String> {
        self.related(Relation::CompositePhenomenonsForObservableProperty, observable_property)
    }
    fn roles_for_related_feature(&self, related_feature: &str) -> HashSet<String> {
        self.related(Relation::RolesForRelatedFeature, related_feature)
    }
    fn related_features_for_role(&self, role: &str) -> HashSet<String> {
        self.related(Relation::RelatedFeaturesForRole, role)
    }

    // === Composite phenomenons ===
    fn is_composite_phenomenon(&self, observable_property: &str) -> bool {
        self.contains_entity(EntitySet::CompositePhenomenons, observable_property)
    }
    /// True if `observable_property` is a component of some composite phenomenon.
    fn is_composite_phenomenon_component(&self, observable_property: &str) -> bool {
        self.has_related(Relation::CompositePhenomenonsForObservableProperty, observable_property)
    }
    fn is_composite_phenomenon_for_offering(
        &self,
        offering: &str,
        composite_phenomenon: &str,
    ) -> bool {
        self.is_related(Relation::CompositePhenomenonsForOffering, offering, composite_phenomenon)
    }
    fn is_composite_phenomenon_for_procedure(
        &self,
        procedure: &str,
        composite_phenomenon: &str,
    ) -> bool {
        self.is_related(Relation::CompositePhenomenonsForProcedure, procedure, composite_phenomenon)
    }

    // === Related features ===
    fn has_roles_for_related_feature(&self, related_feature: &str) -> bool {
        self.has_related(Relation::RolesForRelatedFeature, related_feature)
    }
    fn is_related_feature_sampled(&self, related_feature: &str) -> bool {
        self.has_related(Relation::OfferingsForRelatedFeature, related_feature)
    }

    // === Hierarchies ===
    fn parent_features(
        &self,
        feature: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Features, &[feature], full_hierarchy, include_self)
    }
    fn parent_features_of(
        &self,
        features: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Features, features, full_hierarchy, include_self)
    }
    fn child_features(
        &self,
        feature: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Features, &[feature], full_hierarchy, include_self)
    }
    fn child_features_of(
        &self,
        features: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Features, features, full_hierarchy, include_self)
    }
    fn parent_procedures(
        &self,
        procedure: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Procedures, &[procedure], full_hierarchy, include_self)
    }
    fn parent_procedures_of(
        &self,
        procedures: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Procedures, procedures, full_hierarchy, include_self)
    }
    fn child_procedures(
        &self,
        procedure: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Procedures, &[procedure], full_hierarchy, include_self)
    }
    fn child_procedures_of(
        &self,
        procedures: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Procedures, procedures, full_hierarchy, include_self)
    }
    fn parent_offerings(
        &self,
        offering: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Offerings, &[offering], full_hierarchy, include_self)
    }
    fn parent_offerings_of(
        &self,
        offerings: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.parents(Hierarchy::Offerings, offerings, full_hierarchy, include_self)
    }
    fn child_offerings(
        &self,
        offering: &str,
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Offerings, &[offering], full_hierarchy, include_self)
    }
    fn child_offerings_of(
        &self,
        offerings: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.children(Hierarchy::Offerings, offerings, full_hierarchy, include_self)
    }
    fn has_parent_procedures(&self, procedure: &str) -> bool {
        !self.parent_procedures(procedure, false, false).is_empty()
    }
    fn has_parent_offerings(&self, offering: &str) -> bool {
        !self.parent_offerings(offering, false, false).is_empty()
    }

    // === Phenomenon time ===
    fn phenomenon_time(&self) -> Option<TimePeriod> {
        self.time_extent(TimeKind::Phenomenon, Scope::Global)
    }
    fn min_phenomenon_time(&self) -> Option<DateTime<Utc>> {
        self.phenomenon_time().and_then(|t| t.start)
    }
    fn max_phenomenon_time(&self) -> Option<DateTime<Utc>> {
        self.phenomenon_time().and_then(|t| t.end)
    }
    fn has_min_phenomenon_time(&self) -> bool {
        self.min_phenomenon_time().is_some()
    }
    fn has_max_phenomenon_time(&self) -> bool {
        self.max_phenomenon_time().is_some()
    }
    fn phenomenon_time_for_offering(&self, offering: &str) -> Option<TimePeriod> {
        self.time_extent(TimeKind::Phenomenon, Scope::Offering(offering))
    }
    fn min_phenomenon_time_for_offering(&self, offering: &str) -> Option<DateTime<Utc>> {
        self.phenomenon_time_for_offering(offering).and_then(|t| t.start)
    }
    fn max_phenomenon_time_for_offering(&self, offering: &str) -> Option<DateTime<Utc>> {
        self.phenomenon_time_for_offering(offering).and_then(|t| t.end)
    }
    fn has_min_phenomenon_time_for_offering(&self, offering: &str) -> bool {
        self.min_phenomenon_time_for_offering(offering).is_some()
    }
    fn has_max_phenomenon_time_for_offering(&self, offering: &str) -> bool {
        self.max_phenomenon_time_for_offering(offering).is_some()
    }
    fn phenomenon_time_for_procedure(&self, procedure: &str) -> Option<TimePeriod> {
        self.time_extent(TimeKind::Phenomenon, Scope::Procedure(procedure))
    }
    fn min_phenomenon_time_for_procedure(&self, procedure: &str) -> Option<DateTime<Utc>> {
        self.phenomenon_time_for_procedure(procedure).and_then(|t| t.start)
    }
    fn max_phenomenon_time_for_procedure(&self, procedure: &str) -> Option<DateTime<Utc>> {
        self.phenomenon_time_for_procedure(procedure).and_then(|t| t.end)
    }
    fn has_min_phenomenon_time_for_procedure(&self, procedure: &str) -> bool {
        self.min_phenomenon_time_for_procedure(procedure).is_some()
    }
    fn has_max_phenomenon_time_for_procedure(&self, procedure: &str) -> bool {
        self.max_phenomenon_time_for_procedure(procedure).is_some()
    }

    // === Result time ===
    fn result_time(&self) -> Option<TimePeriod> {
        self.time_extent(TimeKind::Result, Scope::Global)
    }
    fn min_result_time(&self) -> Option<DateTime<Utc>> {
        self.result_time().and_then(|t| t.start)
    }
    fn max_result_time(&self) -> Option<DateTime<Utc>> {
        self.result_time().and_then(|t| t.end)
    }
    fn has_min_result_time(&self) -> bool {
        self.min_result_time().is_some()
    }
    fn has_max_result_time(&self) -> bool {
        self.max_result_time().is_some()
    }
    fn result_time_for_offering(&self, offering: &str) -> Option<TimePeriod> {
        self.time_extent(TimeKind::Result, Scope::Offering(offering))
    }
    fn min_result_time_for_offering(&self, offering: &str) -> Option<DateTime<Utc>> {
        self.result_time_for_offering(offering).and_then(|t| t.start)
    }
    fn max_result_time_for_offering(&self, offering: &str) -> Option<DateTime<Utc>> {
        self.result_time_for_offering(offering).and_then(|t| t.end)
    }
    fn has_min_result_time_for_offering(&self, offering: &str) -> bool {
        self.min_result_time_for_offering(offering).is_some()
    }
    fn has_max_result_time_for_offering(&self, offering: &str) -> bool {
        self.max_result_time_for_offering(offering).is_some()
    }

    // === Envelopes ===
    fn global_envelope(&self) -> Option<Envelope> {
        self.envelope(EnvelopeKind::Spatial, Scope::Global)
    }
    /// True if a non-empty global envelope is stored.
    fn has_global_envelope(&self) -> bool {
        self.global_envelope().is_some_and(|e| e.is_set())
    }
    fn envelope_for_offering(&self, offering: &str) -> Option<Envelope> {
        self.envelope(EnvelopeKind::Spatial, Scope::Offering(offering))
    }
    fn has_envelope_for_offering(&self, offering: &str) -> bool {
        self.envelope_for_offering(offering).is_some_and(|e| e.is_set())
    }
    fn spatial_filtering_profile_envelope_for_offering(&self, offering: &str) -> Option<Envelope> {
        self.envelope(EnvelopeKind::SpatialFilteringProfile, Scope::Offering(offering))
    }
    fn has_spatial_filtering_profile_envelope_for_offering(&self, offering: &str) -> bool {
        self.spatial_filtering_profile_envelope_for_offering(offering)
            .is_some_and(|e| e.is_set())
    }

    // === Human-readable names ===
    fn feature_of_interest_human_readable_name(&self, feature: &str) -> Option<String> {
        self.human_readable_name(NameKind::FeatureOfInterest, feature)
    }
    fn feature_of_interest_identifier_for_human_readable_name(&self, name: &str) -> Option<String> {
        self.identifier_for_human_readable_name(NameKind::FeatureOfInterest, name)
    }
    fn observable_property_human_readable_name(&self, observable_property: &str) -> Option<String> {
        self.human_readable_name(NameKind::ObservableProperty, observable_property)
    }
    fn observable_property_identifier_for_human_readable_name(&self, name: &str) -> Option<String> {
        self.identifier_for_human_readable_name(NameKind::ObservableProperty, name)
    }
    fn procedure_human_readable_name(&self, procedure: &str) -> Option<String> {
        self.human_readable_name(NameKind::Procedure, procedure)
    }
    fn procedure_identifier_for_human_readable_name(&self, name: &str) -> Option<String> {
        self.identifier_for_human_readable_name(NameKind::Procedure, name)
    }
    fn offering_human_readable_name(&self, offering: &str) -> Option<String> {
        self.human_readable_name(NameKind::Offering, offering)
    }
    fn offering_identifier_for_human_readable_name(&self, name: &str) -> Option<String> {
        self.identifier_for_human_readable_name(NameKind::Offering, name)
    }

    // === Procedure classification ===
    fn type_instance_procedures(&self, kind: TypeInstance) -> HashSet<String> {
        self.procedures_with_type_instance(kind)
    }
    fn is_procedure_type(&self, procedure: &str) -> bool {
        self.type_instance_of_procedure(procedure) == Some(TypeInstance::Type)
    }
    fn is_procedure_instance(&self, procedure: &str) -> bool {
        self.type_instance_of_procedure(procedure) == Some(TypeInstance::Instance)
    }
    fn has_instances_for_procedure_type(&self, procedure_type: &str) -> bool {
        self.has_related(Relation::InstancesForProcedureType, procedure_type)
    }
    fn component_aggregation_procedures(&self, kind: ComponentAggregation) -> HashSet<String> {
        self.procedures_with_component_aggregation(kind)
    }
    fn is_component_procedure(&self, procedure: &str) -> bool {
        self.component_aggregation_of_procedure(procedure) == Some(ComponentAggregation::Component)
    }
    fn is_aggregation_procedure(&self, procedure: &str) -> bool {
        self.component_aggregation_of_procedure(procedure)
            == Some(ComponentAggregation::Aggregation)
    }
}

impl<T: ContentCache + ?Sized> ContentCacheExt for T {}

/// Named mutators over [`WritableContentCache`].
///
/// Association mutators write a single direction; use [`crate::update::link`]
/// to keep both directions of a relationship in step.
pub trait WritableContentCacheExt: WritableContentCache {
    // === Sets ===
    fn add_offering(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::Offerings, id)
    }
    fn add_offerings(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::Offerings, ids)
    }
    fn set_offerings(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::Offerings, ids)
    }
    fn remove_offering(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::Offerings, id)
    }
    fn add_procedure(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::Procedures, id)
    }
    fn add_procedures(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::Procedures, ids)
    }
    fn set_procedures(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::Procedures, ids)
    }
    fn remove_procedure(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::Procedures, id)
    }
    fn add_observable_property(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::ObservableProperties, id)
    }
    fn add_observable_properties(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::ObservableProperties, ids)
    }
    fn set_observable_properties(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::ObservableProperties, ids)
    }
    fn remove_observable_property(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::ObservableProperties, id)
    }
    fn add_feature_of_interest(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::FeaturesOfInterest, id)
    }
    fn add_features_of_interest(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::FeaturesOfInterest, ids)
    }
    fn set_features_of_interest(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::FeaturesOfInterest, ids)
    }
    fn remove_feature_of_interest(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::FeaturesOfInterest, id)
    }
    fn add_result_template(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::ResultTemplates, id)
    }
    fn add_result_templates(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::ResultTemplates, ids)
    }
    fn set_result_templates(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::ResultTemplates, ids)
    }
    fn remove_result_template(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::ResultTemplates, id)
    }
    fn add_related_feature(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::RelatedFeatures, id)
    }
    fn add_related_features(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::RelatedFeatures, ids)
    }
    fn set_related_features(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::RelatedFeatures, ids)
    }
    fn remove_related_feature(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::RelatedFeatures, id)
    }
    fn add_composite_phenomenon(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::CompositePhenomenons, id)
    }
    fn add_composite_phenomenons(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::CompositePhenomenons, ids)
    }
    fn set_composite_phenomenons(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::CompositePhenomenons, ids)
    }
    fn remove_composite_phenomenon(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::CompositePhenomenons, id)
    }
    fn add_published_offering(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::PublishedOfferings, id)
    }
    fn add_published_offerings(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::PublishedOfferings, ids)
    }
    fn set_published_offerings(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::PublishedOfferings, ids)
    }
    fn remove_published_offering(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::PublishedOfferings, id)
    }
    fn add_published_procedure(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::PublishedProcedures, id)
    }
    fn add_published_procedures(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::PublishedProcedures, ids)
    }
    fn set_published_procedures(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::PublishedProcedures, ids)
    }
    fn remove_published_procedure(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::PublishedProcedures, id)
    }
    fn add_published_feature_of_interest(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::PublishedFeaturesOfInterest, id)
    }
    fn add_published_features_of_interest(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::PublishedFeaturesOfInterest, ids)
    }
    fn set_published_features_of_interest(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::PublishedFeaturesOfInterest, ids)
    }
    fn remove_published_feature_of_interest(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::PublishedFeaturesOfInterest, id)
    }
    fn add_published_observable_property(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::PublishedObservableProperties, id)
    }
    fn add_published_observable_properties(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::PublishedObservableProperties, ids)
    }
    fn set_published_observable_properties(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::PublishedObservableProperties, ids)
    }
    fn remove_published_observable_property(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::PublishedObservableProperties, id)
    }
    fn add_observation_type(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::ObservationTypes, id)
    }
    fn add_observation_types(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::ObservationTypes, ids)
    }
    fn set_observation_types(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::ObservationTypes, ids)
    }
    fn remove_observation_type(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::ObservationTypes, id)
    }
    fn add_feature_of_interest_type(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::FeatureOfInterestTypes, id)
    }
    fn add_feature_of_interest_types(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::FeatureOfInterestTypes, ids)
    }
    fn set_feature_of_interest_types(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::FeatureOfInterestTypes, ids)
    }
    fn remove_feature_of_interest_type(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::FeatureOfInterestTypes, id)
    }
    fn add_requestable_procedure_description_format(&mut self, id: &str) -> CacheResult<()> {
        self.add_entity(EntitySet::RequestableProcedureDescriptionFormats, id)
    }
    fn add_requestable_procedure_description_formats(&mut self, ids: &[String]) -> CacheResult<()> {
        self.add_entities(EntitySet::RequestableProcedureDescriptionFormats, ids)
    }
    fn set_requestable_procedure_description_formats(&mut self, ids: &[String]) -> CacheResult<()> {
        self.set_entities(EntitySet::RequestableProcedureDescriptionFormats, ids)
    }
    fn remove_requestable_procedure_description_format(&mut self, id: &str) -> CacheResult<()> {
        self.remove_entity(EntitySet::RequestableProcedureDescriptionFormats, id)
    }

    // === Associations ===
    fn add_observable_property_for_offering(
        &mut self,
        offering: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ObservablePropertiesForOffering, offering, observable_property)
    }
    fn set_observable_properties_for_offering(
        &mut self,
        offering: &str,
        observable_properties: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ObservablePropertiesForOffering, offering, observable_properties)
    }
    fn remove_observable_property_for_offering(
        &mut self,
        offering: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ObservablePropertiesForOffering,
            offering,
            observable_property,
        )
    }
    fn add_offering_for_observable_property(
        &mut self,
        observable_property: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForObservableProperty, observable_property, offering)
    }
    fn set_offerings_for_observable_property(
        &mut self,
        observable_property: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForObservableProperty, observable_property, offerings)
    }
    fn remove_offering_for_observable_property(
        &mut self,
        observable_property: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForObservableProperty, observable_property, offering)
    }
    fn add_procedure_for_offering(&mut self, offering: &str, procedure: &str) -> CacheResult<()> {
        self.add_related(Relation::ProceduresForOffering, offering, procedure)
    }
    fn set_procedures_for_offering(
        &mut self,
        offering: &str,
        procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ProceduresForOffering, offering, procedures)
    }
    fn remove_procedure_for_offering(
        &mut self,
        offering: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::ProceduresForOffering, offering, procedure)
    }
    fn add_offering_for_procedure(&mut self, procedure: &str, offering: &str) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForProcedure, procedure, offering)
    }
    fn set_offerings_for_procedure(
        &mut self,
        procedure: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForProcedure, procedure, offerings)
    }
    fn remove_offering_for_procedure(
        &mut self,
        procedure: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForProcedure, procedure, offering)
    }
    fn add_feature_of_interest_for_offering(
        &mut self,
        offering: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::FeaturesOfInterestForOffering, offering, feature_of_interest)
    }
    fn set_features_of_interest_for_offering(
        &mut self,
        offering: &str,
        features_of_interest: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::FeaturesOfInterestForOffering, offering, features_of_interest)
    }
    fn remove_feature_of_interest_for_offering(
        &mut self,
        offering: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::FeaturesOfInterestForOffering, offering, feature_of_interest)
    }
    fn add_offering_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForFeatureOfInterest, feature_of_interest, offering)
    }
    fn set_offerings_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForFeatureOfInterest, feature_of_interest, offerings)
    }
    fn remove_offering_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForFeatureOfInterest, feature_of_interest, offering)
    }
    fn add_related_feature_for_offering(
        &mut self,
        offering: &str,
        related_feature: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::RelatedFeaturesForOffering, offering, related_feature)
    }
    fn set_related_features_for_offering(
        &mut self,
        offering: &str,
        related_features: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::RelatedFeaturesForOffering, offering, related_features)
    }
    fn remove_related_feature_for_offering(
        &mut self,
        offering: &str,
        related_feature: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::RelatedFeaturesForOffering, offering, related_feature)
    }
    fn add_offering_for_related_feature(
        &mut self,
        related_feature: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForRelatedFeature, related_feature, offering)
    }
    fn set_offerings_for_related_feature(
        &mut self,
        related_feature: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForRelatedFeature, related_feature, offerings)
    }
    fn remove_offering_for_related_feature(
        &mut self,
        related_feature: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForRelatedFeature, related_feature, offering)
    }
    fn add_result_template_for_offering(
        &mut self,
        offering: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ResultTemplatesForOffering, offering, result_template)
    }
    fn set_result_templates_for_offering(
        &mut self,
        offering: &str,
        result_templates: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ResultTemplatesForOffering, offering, result_templates)
    }
    fn remove_result_template_for_offering(
        &mut self,
        offering: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::ResultTemplatesForOffering, offering, result_template)
    }
    fn add_offering_for_result_template(
        &mut self,
        result_template: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForResultTemplate, result_template, offering)
    }
    fn set_offerings_for_result_template(
        &mut self,
        result_template: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForResultTemplate, result_template, offerings)
    }
    fn remove_offering_for_result_template(
        &mut self,
        result_template: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForResultTemplate, result_template, offering)
    }
    fn add_composite_phenomenon_for_offering(
        &mut self,
        offering: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::CompositePhenomenonsForOffering, offering, composite_phenomenon)
    }
    fn set_composite_phenomenons_for_offering(
        &mut self,
        offering: &str,
        composite_phenomenons: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::CompositePhenomenonsForOffering, offering, composite_phenomenons)
    }
    fn remove_composite_phenomenon_for_offering(
        &mut self,
        offering: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::CompositePhenomenonsForOffering,
            offering,
            composite_phenomenon,
        )
    }
    fn add_offering_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForCompositePhenomenon, composite_phenomenon, offering)
    }
    fn set_offerings_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForCompositePhenomenon, composite_phenomenon, offerings)
    }
    fn remove_offering_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::OfferingsForCompositePhenomenon,
            composite_phenomenon,
            offering,
        )
    }
    fn add_allowed_observation_type_for_offering(
        &mut self,
        offering: &str,
        allowed_observation_type: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::AllowedObservationTypesForOffering,
            offering,
            allowed_observation_type,
        )
    }
    fn set_allowed_observation_types_for_offering(
        &mut self,
        offering: &str,
        allowed_observation_types: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::AllowedObservationTypesForOffering,
            offering,
            allowed_observation_types,
        )
    }
    fn remove_allowed_observation_type_for_offering(
        &mut self,
        offering: &str,
        allowed_observation_type: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::AllowedObservationTypesForOffering,
            offering,
            allowed_observation_type,
        )
    }
    fn add_offering_for_allowed_observation_type(
        &mut self,
        allowed_observation_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::OfferingsForAllowedObservationType,
            allowed_observation_type,
            offering,
        )
    }
    fn set_offerings_for_allowed_observation_type(
        &mut self,
        allowed_observation_type: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::OfferingsForAllowedObservationType,
            allowed_observation_type,
            offerings,
        )
    }
    fn remove_offering_for_allowed_observation_type(
        &mut self,
        allowed_observation_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::OfferingsForAllowedObservationType,
            allowed_observation_type,
            offering,
        )
    }
    fn add_allowed_feature_of_interest_type_for_offering(
        &mut self,
        offering: &str,
        allowed_feature_of_interest_type: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::AllowedFeatureOfInterestTypesForOffering,
            offering,
            allowed_feature_of_interest_type,
        )
    }
    fn set_allowed_feature_of_interest_types_for_offering(
        &mut self,
        offering: &str,
        allowed_feature_of_interest_types: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::AllowedFeatureOfInterestTypesForOffering,
            offering,
            allowed_feature_of_interest_types,
        )
    }
    fn remove_allowed_feature_of_interest_type_for_offering(
        &mut self,
        offering: &str,
        allowed_feature_of_interest_type: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::AllowedFeatureOfInterestTypesForOffering,
            offering,
            allowed_feature_of_interest_type,
        )
    }
    fn add_offering_for_allowed_feature_of_interest_type(
        &mut self,
        allowed_feature_of_interest_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::OfferingsForAllowedFeatureOfInterestType,
            allowed_feature_of_interest_type,
            offering,
        )
    }
    fn set_offerings_for_allowed_feature_of_interest_type(
        &mut self,
        allowed_feature_of_interest_type: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::OfferingsForAllowedFeatureOfInterestType,
            allowed_feature_of_interest_type,
            offerings,
        )
    }
    fn remove_offering_for_allowed_feature_of_interest_type(
        &mut self,
        allowed_feature_of_interest_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::OfferingsForAllowedFeatureOfInterestType,
            allowed_feature_of_interest_type,
            offering,
        )
    }
    fn add_observation_type_for_offering(
        &mut self,
        offering: &str,
        observation_type: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ObservationTypesForOffering, offering, observation_type)
    }
    fn set_observation_types_for_offering(
        &mut self,
        offering: &str,
        observation_types: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ObservationTypesForOffering, offering, observation_types)
    }
    fn remove_observation_type_for_offering(
        &mut self,
        offering: &str,
        observation_type: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::ObservationTypesForOffering, offering, observation_type)
    }
    fn add_offering_for_observation_type(
        &mut self,
        observation_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::OfferingsForObservationType, observation_type, offering)
    }
    fn set_offerings_for_observation_type(
        &mut self,
        observation_type: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::OfferingsForObservationType, observation_type, offerings)
    }
    fn remove_offering_for_observation_type(
        &mut self,
        observation_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::OfferingsForObservationType, observation_type, offering)
    }
    fn add_feature_of_interest_type_for_offering(
        &mut self,
        offering: &str,
        feature_of_interest_type: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::FeatureOfInterestTypesForOffering,
            offering,
            feature_of_interest_type,
        )
    }
    fn set_feature_of_interest_types_for_offering(
        &mut self,
        offering: &str,
        feature_of_interest_types: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::FeatureOfInterestTypesForOffering,
            offering,
            feature_of_interest_types,
        )
    }
    fn remove_feature_of_interest_type_for_offering(
        &mut self,
        offering: &str,
        feature_of_interest_type: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::FeatureOfInterestTypesForOffering,
            offering,
            feature_of_interest_type,
        )
    }
    fn add_offering_for_feature_of_interest_type(
        &mut self,
        feature_of_interest_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::OfferingsForFeatureOfInterestType,
            feature_of_interest_type,
            offering,
        )
    }
    fn set_offerings_for_feature_of_interest_type(
        &mut self,
        feature_of_interest_type: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::OfferingsForFeatureOfInterestType,
            feature_of_interest_type,
            offerings,
        )
    }
    fn remove_offering_for_feature_of_interest_type(
        &mut self,
        feature_of_interest_type: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::OfferingsForFeatureOfInterestType,
            feature_of_interest_type,
            offering,
        )
    }
    fn add_hidden_child_procedure_for_offering(
        &mut self,
        offering: &str,
        hidden_child_procedure: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::HiddenChildProceduresForOffering,
            offering,
            hidden_child_procedure,
        )
    }
    fn set_hidden_child_procedures_for_offering(
        &mut self,
        offering: &str,
        hidden_child_procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::HiddenChildProceduresForOffering,
            offering,
            hidden_child_procedures,
        )
    }
    fn remove_hidden_child_procedure_for_offering(
        &mut self,
        offering: &str,
        hidden_child_procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::HiddenChildProceduresForOffering,
            offering,
            hidden_child_procedure,
        )
    }
    fn add_offering_for_hidden_child_procedure(
        &mut self,
        hidden_child_procedure: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::OfferingsForHiddenChildProcedure,
            hidden_child_procedure,
            offering,
        )
    }
    fn set_offerings_for_hidden_child_procedure(
        &mut self,
        hidden_child_procedure: &str,
        offerings: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::OfferingsForHiddenChildProcedure,
            hidden_child_procedure,
            offerings,
        )
    }
    fn remove_offering_for_hidden_child_procedure(
        &mut self,
        hidden_child_procedure: &str,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::OfferingsForHiddenChildProcedure,
            hidden_child_procedure,
            offering,
        )
    }
    fn add_observable_property_for_procedure(
        &mut self,
        procedure: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ObservablePropertiesForProcedure, procedure, observable_property)
    }
    fn set_observable_properties_for_procedure(
        &mut self,
        procedure: &str,
        observable_properties: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ObservablePropertiesForProcedure,
            procedure,
            observable_properties,
        )
    }
    fn remove_observable_property_for_procedure(
        &mut self,
        procedure: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ObservablePropertiesForProcedure,
            procedure,
            observable_property,
        )
    }
    fn add_procedure_for_observable_property(
        &mut self,
        observable_property: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ProceduresForObservableProperty, observable_property, procedure)
    }
    fn set_procedures_for_observable_property(
        &mut self,
        observable_property: &str,
        procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ProceduresForObservableProperty, observable_property, procedures)
    }
    fn remove_procedure_for_observable_property(
        &mut self,
        observable_property: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ProceduresForObservableProperty,
            observable_property,
            procedure,
        )
    }
    fn add_feature_of_interest_for_procedure(
        &mut self,
        procedure: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::FeaturesOfInterestForProcedure, procedure, feature_of_interest)
    }
    fn set_features_of_interest_for_procedure(
        &mut self,
        procedure: &str,
        features_of_interest: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::FeaturesOfInterestForProcedure, procedure, features_of_interest)
    }
    fn remove_feature_of_interest_for_procedure(
        &mut self,
        procedure: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::FeaturesOfInterestForProcedure,
            procedure,
            feature_of_interest,
        )
    }
    fn add_procedure_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::ProceduresForFeatureOfInterest, feature_of_interest, procedure)
    }
    fn set_procedures_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::ProceduresForFeatureOfInterest, feature_of_interest, procedures)
    }
    fn remove_procedure_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ProceduresForFeatureOfInterest,
            feature_of_interest,
            procedure,
        )
    }
    fn add_composite_phenomenon_for_procedure(
        &mut self,
        procedure: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::CompositePhenomenonsForProcedure,
            procedure,
            composite_phenomenon,
        )
    }
    fn set_composite_phenomenons_for_procedure(
        &mut self,
        procedure: &str,
        composite_phenomenons: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::CompositePhenomenonsForProcedure,
            procedure,
            composite_phenomenons,
        )
    }
    fn remove_composite_phenomenon_for_procedure(
        &mut self,
        procedure: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::CompositePhenomenonsForProcedure,
            procedure,
            composite_phenomenon,
        )
    }
    fn add_procedure_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ProceduresForCompositePhenomenon,
            composite_phenomenon,
            procedure,
        )
    }
    fn set_procedures_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ProceduresForCompositePhenomenon,
            composite_phenomenon,
            procedures,
        )
    }
    fn remove_procedure_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ProceduresForCompositePhenomenon,
            composite_phenomenon,
            procedure,
        )
    }
    fn add_procedure_description_format_for_procedure(
        &mut self,
        procedure: &str,
        procedure_description_format: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::DescriptionFormatsForProcedure,
            procedure,
            procedure_description_format,
        )
    }
    fn set_procedure_description_formats_for_procedure(
        &mut self,
        procedure: &str,
        procedure_description_formats: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::DescriptionFormatsForProcedure,
            procedure,
            procedure_description_formats,
        )
    }
    fn remove_procedure_description_format_for_procedure(
        &mut self,
        procedure: &str,
        procedure_description_format: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::DescriptionFormatsForProcedure,
            procedure,
            procedure_description_format,
        )
    }
    fn add_procedure_for_procedure_description_format(
        &mut self,
        procedure_description_format: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ProceduresForDescriptionFormat,
            procedure_description_format,
            procedure,
        )
    }
    fn set_procedures_for_procedure_description_format(
        &mut self,
        procedure_description_format: &str,
        procedures: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ProceduresForDescriptionFormat,
            procedure_description_format,
            procedures,
        )
    }
    fn remove_procedure_for_procedure_description_format(
        &mut self,
        procedure_description_format: &str,
        procedure: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ProceduresForDescriptionFormat,
            procedure_description_format,
            procedure,
        )
    }
    fn add_instance_for_procedure_type(
        &mut self,
        procedure_type: &str,
        instance: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::InstancesForProcedureType, procedure_type, instance)
    }
    fn set_instances_for_procedure_type(
        &mut self,
        procedure_type: &str,
        instances: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::InstancesForProcedureType, procedure_type, instances)
    }
    fn remove_instance_for_procedure_type(
        &mut self,
        procedure_type: &str,
        instance: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::InstancesForProcedureType, procedure_type, instance)
    }
    fn add_procedure_type_for_instance(
        &mut self,
        instance: &str,
        procedure_type: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::TypesForProcedureInstance, instance, procedure_type)
    }
    fn set_procedure_types_for_instance(
        &mut self,
        instance: &str,
        procedure_types: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::TypesForProcedureInstance, instance, procedure_types)
    }
    fn remove_procedure_type_for_instance(
        &mut self,
        instance: &str,
        procedure_type: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::TypesForProcedureInstance, instance, procedure_type)
    }
    fn add_observable_property_for_result_template(
        &mut self,
        result_template: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ObservablePropertiesForResultTemplate,
            result_template,
            observable_property,
        )
    }
    fn set_observable_properties_for_result_template(
        &mut self,
        result_template: &str,
        observable_properties: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ObservablePropertiesForResultTemplate,
            result_template,
            observable_properties,
        )
    }
    fn remove_observable_property_for_result_template(
        &mut self,
        result_template: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ObservablePropertiesForResultTemplate,
            result_template,
            observable_property,
        )
    }
    fn add_result_template_for_observable_property(
        &mut self,
        observable_property: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ResultTemplatesForObservableProperty,
            observable_property,
            result_template,
        )
    }
    fn set_result_templates_for_observable_property(
        &mut self,
        observable_property: &str,
        result_templates: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ResultTemplatesForObservableProperty,
            observable_property,
            result_templates,
        )
    }
    fn remove_result_template_for_observable_property(
        &mut self,
        observable_property: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ResultTemplatesForObservableProperty,
            observable_property,
            result_template,
        )
    }
    fn add_feature_of_interest_for_result_template(
        &mut self,
        result_template: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::FeaturesOfInterestForResultTemplate,
            result_template,
            feature_of_interest,
        )
    }
    fn set_features_of_interest_for_result_template(
        &mut self,
        result_template: &str,
        features_of_interest: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::FeaturesOfInterestForResultTemplate,
            result_template,
            features_of_interest,
        )
    }
    fn remove_feature_of_interest_for_result_template(
        &mut self,
        result_template: &str,
        feature_of_interest: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::FeaturesOfInterestForResultTemplate,
            result_template,
            feature_of_interest,
        )
    }
    fn add_result_template_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ResultTemplatesForFeatureOfInterest,
            feature_of_interest,
            result_template,
        )
    }
    fn set_result_templates_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        result_templates: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ResultTemplatesForFeatureOfInterest,
            feature_of_interest,
            result_templates,
        )
    }
    fn remove_result_template_for_feature_of_interest(
        &mut self,
        feature_of_interest: &str,
        result_template: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ResultTemplatesForFeatureOfInterest,
            feature_of_interest,
            result_template,
        )
    }
    fn add_observable_property_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::ObservablePropertiesForCompositePhenomenon,
            composite_phenomenon,
            observable_property,
        )
    }
    fn set_observable_properties_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        observable_properties: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::ObservablePropertiesForCompositePhenomenon,
            composite_phenomenon,
            observable_properties,
        )
    }
    fn remove_observable_property_for_composite_phenomenon(
        &mut self,
        composite_phenomenon: &str,
        observable_property: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::ObservablePropertiesForCompositePhenomenon,
            composite_phenomenon,
            observable_property,
        )
    }
    fn add_composite_phenomenon_for_observable_property(
        &mut self,
        observable_property: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.add_related(
            Relation::CompositePhenomenonsForObservableProperty,
            observable_property,
            composite_phenomenon,
        )
    }
    fn set_composite_phenomenons_for_observable_property(
        &mut self,
        observable_property: &str,
        composite_phenomenons: &[String],
    ) -> CacheResult<()> {
        self.set_related(
            Relation::CompositePhenomenonsForObservableProperty,
            observable_property,
            composite_phenomenons,
        )
    }
    fn remove_composite_phenomenon_for_observable_property(
        &mut self,
        observable_property: &str,
        composite_phenomenon: &str,
    ) -> CacheResult<()> {
        self.remove_related(
            Relation::CompositePhenomenonsForObservableProperty,
            observable_property,
            composite_phenomenon,
        )
    }
    fn add_role_for_related_feature(
        &mut self,
        related_feature: &str,
        role: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::RolesForRelatedFeature, related_feature, role)
    }
    fn set_roles_for_related_feature(
        &mut self,
        related_feature: &str,
        roles: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::RolesForRelatedFeature, related_feature, roles)
    }
    fn remove_role_for_related_feature(
        &mut self,
        related_feature: &str,
        role: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::RolesForRelatedFeature, related_feature, role)
    }
    fn add_related_feature_for_role(
        &mut self,
        role: &str,
        related_feature: &str,
    ) -> CacheResult<()> {
        self.add_related(Relation::RelatedFeaturesForRole, role, related_feature)
    }
    fn set_related_features_for_role(
        &mut self,
        role: &str,
        related_features: &[String],
    ) -> CacheResult<()> {
        self.set_related(Relation::RelatedFeaturesForRole, role, related_features)
    }
    fn remove_related_feature_for_role(
        &mut self,
        role: &str,
        related_feature: &str,
    ) -> CacheResult<()> {
        self.remove_related(Relation::RelatedFeaturesForRole, role, related_feature)
    }

    // === Composite phenomenons ===
    /// Register `composite_phenomenon` with its components, in both directions.
    fn add_composite_phenomenon_components(
        &mut self,
        composite_phenomenon: &str,
        components: &[String],
    ) -> CacheResult<()> {
        self.add_all_related(
            Relation::ObservablePropertiesForCompositePhenomenon,
            composite_phenomenon,
            components,
        )?;
        for component in components {
            self.add_related(
                Relation::CompositePhenomenonsForObservableProperty,
                component,
                composite_phenomenon,
            )?;
        }
        self.add_entity(EntitySet::CompositePhenomenons, composite_phenomenon)
    }

    // === Hierarchies ===
    fn add_parent_feature(&mut self, feature: &str, parent: &str) -> CacheResult<()> {
        self.add_parent(Hierarchy::Features, feature, parent)
    }
    fn add_parent_features(&mut self, feature: &str, parents: &[String]) -> CacheResult<()> {
        self.add_parents(Hierarchy::Features, feature, parents)
    }
    fn add_parent_procedure(&mut self, procedure: &str, parent: &str) -> CacheResult<()> {
        self.add_parent(Hierarchy::Procedures, procedure, parent)
    }
    fn add_parent_procedures(&mut self, procedure: &str, parents: &[String]) -> CacheResult<()> {
        self.add_parents(Hierarchy::Procedures, procedure, parents)
    }
    fn add_parent_offering(&mut self, offering: &str, parent: &str) -> CacheResult<()> {
        self.add_parent(Hierarchy::Offerings, offering, parent)
    }
    fn add_parent_offerings(&mut self, offering: &str, parents: &[String]) -> CacheResult<()> {
        self.add_parents(Hierarchy::Offerings, offering, parents)
    }

    // === Phenomenon time ===
    fn set_min_phenomenon_time(&mut self, time: DateTime<Utc>) -> CacheResult<()> {
        self.set_min_time(TimeKind::Phenomenon, Scope::Global, time)
    }
    fn set_max_phenomenon_time(&mut self, time: DateTime<Utc>) -> CacheResult<()> {
        self.set_max_time(TimeKind::Phenomenon, Scope::Global, time)
    }
    fn set_phenomenon_time(&mut self, period: TimePeriod) -> CacheResult<()> {
        self.set_time_extent(TimeKind::Phenomenon, Scope::Global, period)
    }
    fn set_min_phenomenon_time_for_offering(
        &mut self,
        offering: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_min_time(TimeKind::Phenomenon, Scope::Offering(offering), time)
    }
    fn set_max_phenomenon_time_for_offering(
        &mut self,
        offering: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_max_time(TimeKind::Phenomenon, Scope::Offering(offering), time)
    }
    fn set_phenomenon_time_for_offering(
        &mut self,
        offering: &str,
        period: TimePeriod,
    ) -> CacheResult<()> {
        self.set_time_extent(TimeKind::Phenomenon, Scope::Offering(offering), period)
    }
    fn update_phenomenon_time_for_offering(
        &mut self,
        offering: &str,
        period: &TimePeriod,
    ) -> CacheResult<()> {
        self.extend_time_extent(TimeKind::Phenomenon, Scope::Offering(offering), period)
    }
    fn remove_phenomenon_time_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.remove_time_extent(TimeKind::Phenomenon, Scope::Offering(offering))
    }
    fn set_min_phenomenon_time_for_procedure(
        &mut self,
        procedure: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_min_time(TimeKind::Phenomenon, Scope::Procedure(procedure), time)
    }
    fn set_max_phenomenon_time_for_procedure(
        &mut self,
        procedure: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_max_time(TimeKind::Phenomenon, Scope::Procedure(procedure), time)
    }
    fn update_phenomenon_time_for_procedure(
        &mut self,
        procedure: &str,
        period: &TimePeriod,
    ) -> CacheResult<()> {
        self.extend_time_extent(TimeKind::Phenomenon, Scope::Procedure(procedure), period)
    }
    fn remove_phenomenon_time_for_procedure(&mut self, procedure: &str) -> CacheResult<()> {
        self.remove_time_extent(TimeKind::Phenomenon, Scope::Procedure(procedure))
    }
    fn recalculate_phenomenon_time(&mut self) {
        self.recalculate_time_extent(TimeKind::Phenomenon)
    }

    // === Result time ===
    fn set_min_result_time(&mut self, time: DateTime<Utc>) -> CacheResult<()> {
        self.set_min_time(TimeKind::Result, Scope::Global, time)
    }
    fn set_max_result_time(&mut self, time: DateTime<Utc>) -> CacheResult<()> {
        self.set_max_time(TimeKind::Result, Scope::Global, time)
    }
    fn set_min_result_time_for_offering(
        &mut self,
        offering: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_min_time(TimeKind::Result, Scope::Offering(offering), time)
    }
    fn set_max_result_time_for_offering(
        &mut self,
        offering: &str,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        self.set_max_time(TimeKind::Result, Scope::Offering(offering), time)
    }
    fn set_result_time_for_offering(
        &mut self,
        offering: &str,
        period: TimePeriod,
    ) -> CacheResult<()> {
        self.set_time_extent(TimeKind::Result, Scope::Offering(offering), period)
    }
    fn update_result_time_for_offering(
        &mut self,
        offering: &str,
        period: &TimePeriod,
    ) -> CacheResult<()> {
        self.extend_time_extent(TimeKind::Result, Scope::Offering(offering), period)
    }
    fn remove_result_time_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.remove_time_extent(TimeKind::Result, Scope::Offering(offering))
    }
    fn recalculate_result_time(&mut self) {
        self.recalculate_time_extent(TimeKind::Result)
    }

    // === Envelopes ===
    fn set_global_envelope(&mut self, envelope: Envelope) -> CacheResult<()> {
        self.set_envelope(EnvelopeKind::Spatial, Scope::Global, envelope)
    }
    fn set_envelope_for_offering(&mut self, offering: &str, envelope: Envelope) -> CacheResult<()> {
        self.set_envelope(EnvelopeKind::Spatial, Scope::Offering(offering), envelope)
    }
    fn update_envelope_for_offering(
        &mut self,
        offering: &str,
        envelope: &Envelope,
    ) -> CacheResult<()> {
        self.extend_envelope(EnvelopeKind::Spatial, Scope::Offering(offering), envelope)
    }
    fn remove_envelope_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.remove_envelope(EnvelopeKind::Spatial, Scope::Offering(offering))
    }
    fn recalculate_global_envelope(&mut self) {
        self.recalculate_envelope(EnvelopeKind::Spatial)
    }
    fn set_spatial_filtering_profile_envelope_for_offering(
        &mut self,
        offering: &str,
        envelope: Envelope,
    ) -> CacheResult<()> {
        self.set_envelope(
            EnvelopeKind::SpatialFilteringProfile,
            Scope::Offering(offering),
            envelope,
        )
    }
    fn update_spatial_filtering_profile_envelope_for_offering(
        &mut self,
        offering: &str,
        envelope: &Envelope,
    ) -> CacheResult<()> {
        self.extend_envelope(
            EnvelopeKind::SpatialFilteringProfile,
            Scope::Offering(offering),
            envelope,
        )
    }
    fn remove_spatial_filtering_profile_envelope_for_offering(
        &mut self,
        offering: &str,
    ) -> CacheResult<()> {
        self.remove_envelope(EnvelopeKind::SpatialFilteringProfile, Scope::Offering(offering))
    }

    /// Drop every aggregate kept for `offering`.
    fn remove_aggregates_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.remove_time_extent(TimeKind::Phenomenon, Scope::Offering(offering))?;
        self.remove_time_extent(TimeKind::Result, Scope::Offering(offering))?;
        self.remove_envelope(EnvelopeKind::Spatial, Scope::Offering(offering))?;
        self.remove_envelope(EnvelopeKind::SpatialFilteringProfile, Scope::Offering(offering))
    }

    /// Rebuild every global aggregate from the per-offering values.
    fn recalculate_global_aggregates(&mut self) {
        self.recalculate_time_extent(TimeKind::Phenomenon);
        self.recalculate_time_extent(TimeKind::Result);
        self.recalculate_envelope(EnvelopeKind::Spatial);
        self.recalculate_envelope(EnvelopeKind::SpatialFilteringProfile);
    }

    // === Human-readable names ===
    fn add_feature_of_interest_human_readable_name(
        &mut self,
        feature: &str,
        name: &str,
    ) -> CacheResult<()> {
        self.add_human_readable_name(NameKind::FeatureOfInterest, feature, name)
    }
    fn add_observable_property_human_readable_name(
        &mut self,
        observable_property: &str,
        name: &str,
    ) -> CacheResult<()> {
        self.add_human_readable_name(NameKind::ObservableProperty, observable_property, name)
    }
    fn add_procedure_human_readable_name(
        &mut self,
        procedure: &str,
        name: &str,
    ) -> CacheResult<()> {
        self.add_human_readable_name(NameKind::Procedure, procedure, name)
    }
    fn add_offering_human_readable_name(&mut self, offering: &str, name: &str) -> CacheResult<()> {
        self.add_human_readable_name(NameKind::Offering, offering, name)
    }

    // === Procedure classification ===
    fn add_type_instance_procedure(
        &mut self,
        kind: TypeInstance,
        procedure: &str,
    ) -> CacheResult<()> {
        self.set_type_instance_of_procedure(procedure, kind)
    }
    fn add_component_aggregation_procedure(
        &mut self,
        kind: ComponentAggregation,
        procedure: &str,
    ) -> CacheResult<()> {
        self.set_component_aggregation_of_procedure(procedure, kind)
    }
}

impl<T: WritableContentCache + ?Sized> WritableContentCacheExt for T {}
