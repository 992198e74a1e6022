//! Complete cache rebuild from a declarative description.

use serde::{Deserialize, Serialize};
use sos_common::{CacheResult, Envelope, Locale, MultilingualString, TimePeriod};
use tracing::debug;

use super::feature::FeatureInsertion;
use super::{link, link_all, record, ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;
use crate::model::{ComponentAggregation, Relation, TypeInstance};
use crate::vocabulary::{ContentCacheExt, WritableContentCacheExt};

/// Everything a service advertises, as read from its metadata store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitiesSeed {
    pub epsg_codes: Vec<i32>,
    pub languages: Vec<String>,
    /// Requestable procedure description formats.
    pub description_formats: Vec<String>,
    pub observable_properties: Vec<ObservablePropertySeed>,
    pub features: Vec<FeatureSeed>,
    pub procedures: Vec<ProcedureSeed>,
    pub offerings: Vec<OfferingSeed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservablePropertySeed {
    pub identifier: String,
    pub name: Option<String>,
    /// Non-empty for composite phenomenons.
    pub components: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSeed {
    pub identifier: String,
    pub name: Option<String>,
    pub parents: Vec<String>,
    pub feature_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcedureSeed {
    pub identifier: String,
    pub name: Option<String>,
    pub parents: Vec<String>,
    pub description_formats: Vec<String>,
    pub type_instance: Option<TypeInstance>,
    /// The procedure type this procedure is an instance of.
    pub instance_of: Option<String>,
    pub component_aggregation: Option<ComponentAggregation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferingSeed {
    pub identifier: String,
    pub name: Option<String>,
    pub names: MultilingualString,
    pub descriptions: MultilingualString,
    pub parents: Vec<String>,
    pub procedures: Vec<String>,
    pub observable_properties: Vec<String>,
    pub features_of_interest: Vec<String>,
    pub observation_types: Vec<String>,
    pub feature_of_interest_types: Vec<String>,
    pub phenomenon_time: Option<TimePeriod>,
    pub result_time: Option<TimePeriod>,
    pub envelope: Option<Envelope>,
    /// Hidden offerings exist but are not published.
    pub hidden: bool,
}

/// Builds a whole cache from a [`CapabilitiesSeed`].
#[derive(Debug, Clone)]
pub struct InitialLoad {
    seed: CapabilitiesSeed,
    status: UpdateStatus,
}

impl InitialLoad {
    pub fn new(seed: CapabilitiesSeed) -> Self {
        Self {
            seed,
            status: UpdateStatus::default(),
        }
    }

    pub fn seed(&self) -> &CapabilitiesSeed {
        &self.seed
    }

    fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        let seed = &self.seed;

        cache.add_epsg_codes(&seed.epsg_codes)?;
        for language in &seed.languages {
            cache.add_supported_language(Locale::new(language))?;
        }
        cache.add_requestable_procedure_description_formats(&seed.description_formats)?;

        for property in &seed.observable_properties {
            load_observable_property(cache, property)?;
        }
        for feature in &seed.features {
            let mut insertion = FeatureInsertion::new(feature.identifier.clone());
            if let Some(name) = &feature.name {
                insertion = insertion.with_name(name.clone());
            }
            if let Some(feature_type) = &feature.feature_type {
                insertion = insertion.with_type(feature_type.clone());
            }
            for parent in &feature.parents {
                insertion = insertion.with_parent(parent.clone());
            }
            insertion.apply(cache)?;
            cache.add_published_feature_of_interest(&feature.identifier)?;
        }
        for procedure in &seed.procedures {
            load_procedure(cache, procedure)?;
        }
        for offering in &seed.offerings {
            load_offering(cache, offering)?;
        }

        cache.recalculate_global_aggregates();
        debug!(
            offerings = seed.offerings.len(),
            procedures = seed.procedures.len(),
            features = seed.features.len(),
            observable_properties = seed.observable_properties.len(),
            "Loaded capabilities seed"
        );
        Ok(())
    }
}

fn load_observable_property(
    cache: &mut dyn WritableContentCache,
    property: &ObservablePropertySeed,
) -> CacheResult<()> {
    let id = property.identifier.as_str();
    cache.add_observable_property(id)?;
    cache.add_published_observable_property(id)?;
    if let Some(name) = &property.name {
        cache.add_observable_property_human_readable_name(id, name)?;
    }
    if !property.components.is_empty() {
        cache.add_observable_properties(&property.components)?;
        cache.add_composite_phenomenon_components(id, &property.components)?;
    }
    Ok(())
}

fn load_procedure(
    cache: &mut dyn WritableContentCache,
    procedure: &ProcedureSeed,
) -> CacheResult<()> {
    let id = procedure.identifier.as_str();
    cache.add_procedure(id)?;
    cache.add_published_procedure(id)?;
    if let Some(name) = &procedure.name {
        cache.add_procedure_human_readable_name(id, name)?;
    }
    cache.add_parent_procedures(id, &procedure.parents)?;
    link_all(cache, Relation::DescriptionFormatsForProcedure, id, &procedure.description_formats)?;

    let kind = match (&procedure.instance_of, procedure.type_instance) {
        (Some(_), None) => Some(TypeInstance::Instance),
        (_, kind) => kind,
    };
    if let Some(kind) = kind {
        cache.set_type_instance_of_procedure(id, kind)?;
    }
    if let Some(procedure_type) = &procedure.instance_of {
        cache.add_procedure(procedure_type)?;
        link(cache, Relation::InstancesForProcedureType, procedure_type, id)?;
    }
    if let Some(kind) = procedure.component_aggregation {
        cache.set_component_aggregation_of_procedure(id, kind)?;
    }
    Ok(())
}

fn load_offering(cache: &mut dyn WritableContentCache, offering: &OfferingSeed) -> CacheResult<()> {
    let id = offering.identifier.as_str();
    cache.add_offering(id)?;
    if !offering.hidden {
        cache.add_published_offering(id)?;
    }
    if let Some(name) = &offering.name {
        cache.set_name_for_offering(id, name)?;
        cache.add_offering_human_readable_name(id, name)?;
    }
    cache.set_i18n_names_for_offering(id, offering.names.clone())?;
    cache.set_i18n_descriptions_for_offering(id, offering.descriptions.clone())?;
    cache.add_parent_offerings(id, &offering.parents)?;

    cache.add_procedures(&offering.procedures)?;
    cache.add_observable_properties(&offering.observable_properties)?;
    cache.add_features_of_interest(&offering.features_of_interest)?;
    link_all(cache, Relation::ProceduresForOffering, id, &offering.procedures)?;
    link_all(
        cache,
        Relation::ObservablePropertiesForOffering,
        id,
        &offering.observable_properties,
    )?;
    link_all(cache, Relation::FeaturesOfInterestForOffering, id, &offering.features_of_interest)?;
    link_all(cache, Relation::AllowedObservationTypesForOffering, id, &offering.observation_types)?;
    link_all(
        cache,
        Relation::AllowedFeatureOfInterestTypesForOffering,
        id,
        &offering.feature_of_interest_types,
    )?;

    let composites: Vec<String> = offering
        .observable_properties
        .iter()
        .filter(|p| cache.is_composite_phenomenon(p))
        .cloned()
        .collect();
    link_all(cache, Relation::CompositePhenomenonsForOffering, id, &composites)?;

    for procedure in &offering.procedures {
        link_all(
            cache,
            Relation::ObservablePropertiesForProcedure,
            procedure,
            &offering.observable_properties,
        )?;
        link_all(
            cache,
            Relation::FeaturesOfInterestForProcedure,
            procedure,
            &offering.features_of_interest,
        )?;
        link_all(cache, Relation::CompositePhenomenonsForProcedure, procedure, &composites)?;
        if let Some(period) = &offering.phenomenon_time {
            cache.update_phenomenon_time_for_procedure(procedure, period)?;
        }
    }

    if let Some(period) = offering.phenomenon_time {
        cache.set_phenomenon_time_for_offering(id, period)?;
    }
    if let Some(period) = offering.result_time {
        cache.set_result_time_for_offering(id, period)?;
    }
    if let Some(envelope) = offering.envelope {
        cache.add_epsg_code(envelope.srid)?;
        cache.set_envelope_for_offering(id, envelope)?;
    }
    Ok(())
}

impl ContentCacheUpdate for InitialLoad {
    fn name(&self) -> &str {
        "initial-load"
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

    fn is_complete_update(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentCache;
    use crate::InMemoryContentCache;
    use chrono::{TimeZone, Utc};
    use sos_common::BoundingBox;

    fn seed() -> CapabilitiesSeed {
        CapabilitiesSeed {
            epsg_codes: vec![4326, 3857],
            languages: vec!["ger".to_string()],
            observable_properties: vec![
                ObservablePropertySeed {
                    identifier: "wind".to_string(),
                    components: vec!["wind-speed".to_string(), "wind-direction".to_string()],
                    ..Default::default()
                },
                ObservablePropertySeed {
                    identifier: "air-temperature".to_string(),
                    name: Some("Air temperature".to_string()),
                    ..Default::default()
                },
            ],
            procedures: vec![ProcedureSeed {
                identifier: "station-1".to_string(),
                instance_of: Some("weather-station".to_string()),
                ..Default::default()
            }],
            offerings: vec![OfferingSeed {
                identifier: "o1".to_string(),
                names: MultilingualString::new().with("eng", "Weather").with("ger", "Wetter"),
                procedures: vec!["station-1".to_string()],
                observable_properties: vec!["wind".to_string(), "air-temperature".to_string()],
                features_of_interest: vec!["f1".to_string()],
                phenomenon_time: Some(TimePeriod::new(
                    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
                )),
                envelope: Some(Envelope::new(BoundingBox::new(10.0, 50.0, 11.0, 51.0), 4326)),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_load_is_complete() {
        assert!(InitialLoad::new(CapabilitiesSeed::default()).is_complete_update());
    }

    #[test]
    fn test_loads_seed() {
        let mut cache = InMemoryContentCache::new();
        let mut update = InitialLoad::new(seed());
        update.execute(&mut cache);
        assert!(!update.failed(), "{:?}", update.failure_cause());

        assert!(cache.has_epsg_code(3857));
        assert!(cache.is_language_supported(&Locale::new("ger")));
        assert!(cache.is_composite_phenomenon("wind"));
        assert!(cache.is_composite_phenomenon_for_offering("o1", "wind"));
        assert!(cache.is_composite_phenomenon_for_procedure("station-1", "wind"));
        assert!(cache.is_procedure_instance("station-1"));
        assert!(cache.procedures_for_observable_property("air-temperature").contains("station-1"));
        assert_eq!(
            cache.i18n_name_for_offering("o1", &Locale::new("ger")),
            Some("Wetter".to_string())
        );
        assert!(cache.has_global_envelope());
        assert_eq!(
            cache.max_phenomenon_time(),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
        assert!(cache.has_min_phenomenon_time_for_procedure("station-1"));
    }

    #[test]
    fn test_offering_references_are_registered() {
        let offering_only = CapabilitiesSeed {
            offerings: vec![OfferingSeed {
                identifier: "o1".to_string(),
                procedures: vec!["p1".to_string()],
                observable_properties: vec!["water-level".to_string()],
                features_of_interest: vec!["f1".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut cache = InMemoryContentCache::new();
        let mut update = InitialLoad::new(offering_only);
        update.execute(&mut cache);
        assert!(!update.failed(), "{:?}", update.failure_cause());

        assert!(cache.has_feature_of_interest("f1"));
        assert!(cache.has_procedure("p1"));
        assert!(cache.has_observable_property("water-level"));
        assert!(crate::integrity::check(&cache).is_empty());

        let mut full = InMemoryContentCache::new();
        InitialLoad::new(seed()).execute(&mut full);
        assert!(crate::integrity::check(&full).is_empty());
    }

    #[test]
    fn test_seed_round_trips_through_json() {
        let json = serde_json::to_string(&seed()).unwrap();
        let parsed: CapabilitiesSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seed());
    }
}
