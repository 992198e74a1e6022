//! In-memory cache backing both capability traits.
//!
//! The whole structure is `Clone`; the controller publishes immutable
//! snapshots of it and mutates private copies.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sos_common::{
    CacheError, CacheResult, Envelope, Locale, MultilingualString, TimePeriod, EPSG_WGS84,
};

use crate::aggregate::ExtentStore;
use crate::config::CacheConfig;
use crate::content::{ContentCache, WritableContentCache};
use crate::hierarchy::HierarchyGraph;
use crate::model::{
    ComponentAggregation, EntitySet, EnvelopeKind, Hierarchy, NameKind, Relation, Scope,
    TimeKind, TypeInstance,
};
use crate::names::{I18nTexts, NameIndex};
use crate::store::{EntityStore, RelationStore};
use crate::validation;

#[derive(Debug, Clone)]
pub struct InMemoryContentCache {
    entities: EntityStore,
    relations: RelationStore,

    feature_hierarchy: HierarchyGraph,
    procedure_hierarchy: HierarchyGraph,
    offering_hierarchy: HierarchyGraph,

    phenomenon_times: ExtentStore<TimePeriod>,
    result_times: ExtentStore<TimePeriod>,
    envelopes: ExtentStore<Envelope>,
    sfp_envelopes: ExtentStore<Envelope>,

    feature_names: NameIndex,
    observable_property_names: NameIndex,
    procedure_names: NameIndex,
    offering_names: NameIndex,

    plain_offering_names: HashMap<String, String>,
    i18n_names: I18nTexts,
    i18n_descriptions: I18nTexts,

    type_instance: HashMap<String, TypeInstance>,
    component_aggregation: HashMap<String, ComponentAggregation>,

    epsg_codes: HashSet<i32>,
    default_epsg_code: i32,
    supported_languages: HashSet<Locale>,
    default_language: Locale,

    last_updated: Option<DateTime<Utc>>,
}

impl Default for InMemoryContentCache {
    fn default() -> Self {
        Self::with_defaults(EPSG_WGS84, Locale::new("eng"), [Locale::new("eng")])
    }
}

impl InMemoryContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty cache carrying the configured defaults.
    pub fn with_config(config: &CacheConfig) -> Self {
        let default_epsg_code = if config.default_epsg_code > 0 {
            config.default_epsg_code
        } else {
            EPSG_WGS84
        };
        Self::with_defaults(
            default_epsg_code,
            config.default_locale(),
            config.supported_locales(),
        )
    }

    fn with_defaults(
        default_epsg_code: i32,
        default_language: Locale,
        languages: impl IntoIterator<Item = Locale>,
    ) -> Self {
        let mut supported_languages: HashSet<Locale> = languages
            .into_iter()
            .filter(|locale| !locale.is_empty())
            .collect();
        if !default_language.is_empty() {
            supported_languages.insert(default_language.clone());
        }

        Self {
            entities: EntityStore::new(),
            relations: RelationStore::new(),
            feature_hierarchy: HierarchyGraph::new(Hierarchy::Features.label()),
            procedure_hierarchy: HierarchyGraph::new(Hierarchy::Procedures.label()),
            offering_hierarchy: HierarchyGraph::new(Hierarchy::Offerings.label()),
            phenomenon_times: ExtentStore::new(),
            result_times: ExtentStore::new(),
            envelopes: ExtentStore::new(),
            sfp_envelopes: ExtentStore::new(),
            feature_names: NameIndex::new(NameKind::FeatureOfInterest.label()),
            observable_property_names: NameIndex::new(NameKind::ObservableProperty.label()),
            procedure_names: NameIndex::new(NameKind::Procedure.label()),
            offering_names: NameIndex::new(NameKind::Offering.label()),
            plain_offering_names: HashMap::new(),
            i18n_names: I18nTexts::default(),
            i18n_descriptions: I18nTexts::default(),
            type_instance: HashMap::new(),
            component_aggregation: HashMap::new(),
            epsg_codes: HashSet::from([default_epsg_code]),
            default_epsg_code,
            supported_languages,
            default_language,
            last_updated: None,
        }
    }

    /// Number of identifiers in `set`, without copying them.
    pub fn entity_count(&self, set: EntitySet) -> usize {
        self.entities.len(set)
    }

    /// Drop all content while keeping the EPSG and language defaults.
    pub fn clear(&mut self) {
        let default_epsg_code = self.default_epsg_code;
        let default_language = self.default_language.clone();
        let languages = std::mem::take(&mut self.supported_languages);
        *self = Self::with_defaults(default_epsg_code, default_language, languages);
    }

    fn graph(&self, hierarchy: Hierarchy) -> &HierarchyGraph {
        match hierarchy {
            Hierarchy::Features => &self.feature_hierarchy,
            Hierarchy::Procedures => &self.procedure_hierarchy,
            Hierarchy::Offerings => &self.offering_hierarchy,
        }
    }

    fn graph_mut(&mut self, hierarchy: Hierarchy) -> &mut HierarchyGraph {
        match hierarchy {
            Hierarchy::Features => &mut self.feature_hierarchy,
            Hierarchy::Procedures => &mut self.procedure_hierarchy,
            Hierarchy::Offerings => &mut self.offering_hierarchy,
        }
    }

    fn times(&self, kind: TimeKind) -> &ExtentStore<TimePeriod> {
        match kind {
            TimeKind::Phenomenon => &self.phenomenon_times,
            TimeKind::Result => &self.result_times,
        }
    }

    fn times_mut(&mut self, kind: TimeKind) -> &mut ExtentStore<TimePeriod> {
        match kind {
            TimeKind::Phenomenon => &mut self.phenomenon_times,
            TimeKind::Result => &mut self.result_times,
        }
    }

    fn envelopes(&self, kind: EnvelopeKind) -> &ExtentStore<Envelope> {
        match kind {
            EnvelopeKind::Spatial => &self.envelopes,
            EnvelopeKind::SpatialFilteringProfile => &self.sfp_envelopes,
        }
    }

    fn envelopes_mut(&mut self, kind: EnvelopeKind) -> &mut ExtentStore<Envelope> {
        match kind {
            EnvelopeKind::Spatial => &mut self.envelopes,
            EnvelopeKind::SpatialFilteringProfile => &mut self.sfp_envelopes,
        }
    }

    fn names(&self, kind: NameKind) -> &NameIndex {
        match kind {
            NameKind::FeatureOfInterest => &self.feature_names,
            NameKind::ObservableProperty => &self.observable_property_names,
            NameKind::Procedure => &self.procedure_names,
            NameKind::Offering => &self.offering_names,
        }
    }

    fn names_mut(&mut self, kind: NameKind) -> &mut NameIndex {
        match kind {
            NameKind::FeatureOfInterest => &mut self.feature_names,
            NameKind::ObservableProperty => &mut self.observable_property_names,
            NameKind::Procedure => &mut self.procedure_names,
            NameKind::Offering => &mut self.offering_names,
        }
    }
}

fn validate_period(period: &TimePeriod) -> CacheResult<()> {
    if !period.is_ordered() {
        return Err(CacheError::invalid_argument(
            "time period",
            "start must not be after end",
        ));
    }
    Ok(())
}

impl ContentCache for InMemoryContentCache {
    fn entities(&self, set: EntitySet) -> HashSet<String> {
        self.entities.get(set)
    }

    fn contains_entity(&self, set: EntitySet, id: &str) -> bool {
        self.entities.contains(set, id)
    }

    fn related(&self, relation: Relation, key: &str) -> HashSet<String> {
        self.relations.get(relation, key)
    }

    fn is_related(&self, relation: Relation, key: &str, value: &str) -> bool {
        self.relations.contains(relation, key, value)
    }

    fn has_related(&self, relation: Relation, key: &str) -> bool {
        self.relations.has_key(relation, key)
    }

    fn related_keys(&self, relation: Relation) -> HashSet<String> {
        self.relations.keys(relation)
    }

    fn parents(
        &self,
        hierarchy: Hierarchy,
        ids: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.graph(hierarchy)
            .parents_of(ids, full_hierarchy, include_self)
    }

    fn children(
        &self,
        hierarchy: Hierarchy,
        ids: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String> {
        self.graph(hierarchy)
            .children_of(ids, full_hierarchy, include_self)
    }

    fn time_extent(&self, kind: TimeKind, scope: Scope<'_>) -> Option<TimePeriod> {
        self.times(kind).get(scope).copied()
    }

    fn envelope(&self, kind: EnvelopeKind, scope: Scope<'_>) -> Option<Envelope> {
        self.envelopes(kind).get(scope).copied()
    }

    fn human_readable_name(&self, kind: NameKind, id: &str) -> Option<String> {
        self.names(kind).name_for(id).map(str::to_string)
    }

    fn identifier_for_human_readable_name(&self, kind: NameKind, name: &str) -> Option<String> {
        self.names(kind).id_for(name).map(str::to_string)
    }

    /// The plain name, falling back to the name in the default language.
    fn name_for_offering(&self, offering: &str) -> Option<String> {
        self.plain_offering_names
            .get(offering)
            .cloned()
            .or_else(|| self.i18n_name_for_offering(offering, &self.default_language))
    }

    fn i18n_names_for_offering(&self, offering: &str) -> Option<MultilingualString> {
        self.i18n_names.get(offering).cloned()
    }

    fn i18n_name_for_offering(&self, offering: &str, locale: &Locale) -> Option<String> {
        self.i18n_names
            .get_locale(offering, locale)
            .map(str::to_string)
    }

    fn has_i18n_names_for_offering(&self, offering: &str, locale: &Locale) -> bool {
        self.i18n_names.has_locale(offering, locale)
    }

    fn i18n_descriptions_for_offering(&self, offering: &str) -> Option<MultilingualString> {
        self.i18n_descriptions.get(offering).cloned()
    }

    fn i18n_description_for_offering(&self, offering: &str, locale: &Locale) -> Option<String> {
        self.i18n_descriptions
            .get_locale(offering, locale)
            .map(str::to_string)
    }

    fn has_i18n_descriptions_for_offering(&self, offering: &str, locale: &Locale) -> bool {
        self.i18n_descriptions.has_locale(offering, locale)
    }

    fn type_instance_of_procedure(&self, procedure: &str) -> Option<TypeInstance> {
        self.type_instance.get(procedure).copied()
    }

    fn procedures_with_type_instance(&self, kind: TypeInstance) -> HashSet<String> {
        self.type_instance
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(p, _)| p.clone())
            .collect()
    }

    fn component_aggregation_of_procedure(&self, procedure: &str) -> Option<ComponentAggregation> {
        self.component_aggregation.get(procedure).copied()
    }

    fn procedures_with_component_aggregation(&self, kind: ComponentAggregation) -> HashSet<String> {
        self.component_aggregation
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(p, _)| p.clone())
            .collect()
    }

    fn epsg_codes(&self) -> HashSet<i32> {
        self.epsg_codes.clone()
    }

    fn has_epsg_code(&self, code: i32) -> bool {
        self.epsg_codes.contains(&code)
    }

    fn default_epsg_code(&self) -> i32 {
        self.default_epsg_code
    }

    fn supported_languages(&self) -> HashSet<Locale> {
        self.supported_languages.clone()
    }

    fn is_language_supported(&self, locale: &Locale) -> bool {
        self.supported_languages.contains(locale)
    }

    fn default_language(&self) -> Locale {
        self.default_language.clone()
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

impl WritableContentCache for InMemoryContentCache {
    fn add_entity(&mut self, set: EntitySet, id: &str) -> CacheResult<()> {
        self.entities.add(set, id)
    }

    fn add_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        self.entities.add_all(set, ids)
    }

    fn set_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        self.entities.set(set, ids)
    }

    fn remove_entity(&mut self, set: EntitySet, id: &str) -> CacheResult<()> {
        self.entities.remove(set, id)
    }

    fn remove_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        self.entities.remove_all(set, ids)
    }

    fn clear_entities(&mut self, set: EntitySet) {
        self.entities.clear(set)
    }

    fn add_related(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()> {
        self.relations.add(relation, key, value)
    }

    fn add_all_related(
        &mut self,
        relation: Relation,
        key: &str,
        values: &[String],
    ) -> CacheResult<()> {
        self.relations.add_all(relation, key, values)
    }

    fn set_related(&mut self, relation: Relation, key: &str, values: &[String]) -> CacheResult<()> {
        self.relations.set(relation, key, values)
    }

    fn remove_related(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()> {
        self.relations.remove(relation, key, value)
    }

    fn remove_all_related(
        &mut self,
        relation: Relation,
        key: &str,
        values: &[String],
    ) -> CacheResult<()> {
        self.relations.remove_all(relation, key, values)
    }

    fn clear_related(&mut self, relation: Relation, key: &str) -> CacheResult<()> {
        self.relations.clear_key(relation, key)
    }

    fn remove_related_everywhere(
        &mut self,
        relation: Relation,
        value: &str,
    ) -> CacheResult<Vec<String>> {
        validation::not_null_or_empty(relation.value_label(), value)?;
        Ok(self.relations.remove_value_everywhere(relation, value))
    }

    fn clear_relation(&mut self, relation: Relation) {
        self.relations.clear(relation)
    }

    fn add_parent(&mut self, hierarchy: Hierarchy, child: &str, parent: &str) -> CacheResult<()> {
        self.graph_mut(hierarchy).add_parent(child, parent)
    }

    fn add_parents(
        &mut self,
        hierarchy: Hierarchy,
        child: &str,
        parents: &[String],
    ) -> CacheResult<()> {
        self.graph_mut(hierarchy).add_parents(child, parents)
    }

    fn remove_parent(
        &mut self,
        hierarchy: Hierarchy,
        child: &str,
        parent: &str,
    ) -> CacheResult<()> {
        self.graph_mut(hierarchy).remove_parent(child, parent)
    }

    fn remove_from_hierarchy(&mut self, hierarchy: Hierarchy, id: &str) -> CacheResult<()> {
        self.graph_mut(hierarchy).remove_node(id)
    }

    fn clear_hierarchy(&mut self, hierarchy: Hierarchy) {
        self.graph_mut(hierarchy).clear()
    }

    fn set_time_extent(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        period: TimePeriod,
    ) -> CacheResult<()> {
        validate_period(&period)?;
        self.times_mut(kind).set(scope, period)
    }

    fn set_min_time(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        let mut period = self.time_extent(kind, scope).unwrap_or_default();
        period.start = Some(time);
        if !period.is_ordered() {
            return Err(CacheError::invalid_argument(
                "minimum time",
                format!("{} is after the stored maximum", time.to_rfc3339()),
            ));
        }
        self.times_mut(kind).set(scope, period)
    }

    fn set_max_time(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        time: DateTime<Utc>,
    ) -> CacheResult<()> {
        let mut period = self.time_extent(kind, scope).unwrap_or_default();
        period.end = Some(time);
        if !period.is_ordered() {
            return Err(CacheError::invalid_argument(
                "maximum time",
                format!("{} is before the stored minimum", time.to_rfc3339()),
            ));
        }
        self.times_mut(kind).set(scope, period)
    }

    fn extend_time_extent(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        period: &TimePeriod,
    ) -> CacheResult<()> {
        validate_period(period)?;
        self.times_mut(kind).extend(scope, period)
    }

    fn remove_time_extent(&mut self, kind: TimeKind, scope: Scope<'_>) -> CacheResult<()> {
        self.times_mut(kind).remove(scope)
    }

    fn recalculate_time_extent(&mut self, kind: TimeKind) {
        self.times_mut(kind).recalculate();
    }

    fn set_envelope(
        &mut self,
        kind: EnvelopeKind,
        scope: Scope<'_>,
        envelope: Envelope,
    ) -> CacheResult<()> {
        validation::valid_envelope(&envelope)?;
        self.envelopes_mut(kind).set(scope, envelope)
    }

    fn extend_envelope(
        &mut self,
        kind: EnvelopeKind,
        scope: Scope<'_>,
        envelope: &Envelope,
    ) -> CacheResult<()> {
        validation::valid_envelope(envelope)?;
        self.envelopes_mut(kind).extend(scope, envelope)
    }

    fn remove_envelope(&mut self, kind: EnvelopeKind, scope: Scope<'_>) -> CacheResult<()> {
        self.envelopes_mut(kind).remove(scope)
    }

    fn recalculate_envelope(&mut self, kind: EnvelopeKind) {
        self.envelopes_mut(kind).recalculate();
    }

    fn add_human_readable_name(&mut self, kind: NameKind, id: &str, name: &str) -> CacheResult<()> {
        self.names_mut(kind).add(id, name)
    }

    fn remove_human_readable_name(&mut self, kind: NameKind, id: &str) -> CacheResult<()> {
        self.names_mut(kind).remove_by_id(id)
    }

    fn clear_human_readable_names(&mut self, kind: NameKind) {
        self.names_mut(kind).clear()
    }

    fn set_name_for_offering(&mut self, offering: &str, name: &str) -> CacheResult<()> {
        validation::not_null_or_empty("offering", offering)?;
        validation::not_null_or_empty("offering name", name)?;
        self.plain_offering_names
            .insert(offering.to_string(), name.to_string());
        Ok(())
    }

    fn remove_name_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        validation::not_null_or_empty("offering", offering)?;
        self.plain_offering_names.remove(offering);
        Ok(())
    }

    fn set_i18n_names_for_offering(
        &mut self,
        offering: &str,
        names: MultilingualString,
    ) -> CacheResult<()> {
        self.i18n_names.set(offering, names)
    }

    fn add_i18n_names_for_offering(
        &mut self,
        offering: &str,
        names: &MultilingualString,
    ) -> CacheResult<()> {
        self.i18n_names.merge(offering, names)
    }

    fn remove_i18n_names_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.i18n_names.remove(offering)
    }

    fn set_i18n_descriptions_for_offering(
        &mut self,
        offering: &str,
        descriptions: MultilingualString,
    ) -> CacheResult<()> {
        self.i18n_descriptions.set(offering, descriptions)
    }

    fn add_i18n_descriptions_for_offering(
        &mut self,
        offering: &str,
        descriptions: &MultilingualString,
    ) -> CacheResult<()> {
        self.i18n_descriptions.merge(offering, descriptions)
    }

    fn remove_i18n_descriptions_for_offering(&mut self, offering: &str) -> CacheResult<()> {
        self.i18n_descriptions.remove(offering)
    }

    fn set_type_instance_of_procedure(
        &mut self,
        procedure: &str,
        kind: TypeInstance,
    ) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", procedure)?;
        self.type_instance.insert(procedure.to_string(), kind);
        Ok(())
    }

    fn remove_type_instance_of_procedure(&mut self, procedure: &str) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", procedure)?;
        self.type_instance.remove(procedure);
        Ok(())
    }

    fn set_component_aggregation_of_procedure(
        &mut self,
        procedure: &str,
        kind: ComponentAggregation,
    ) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", procedure)?;
        self.component_aggregation
            .insert(procedure.to_string(), kind);
        Ok(())
    }

    fn remove_component_aggregation_of_procedure(&mut self, procedure: &str) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", procedure)?;
        self.component_aggregation.remove(procedure);
        Ok(())
    }

    fn add_epsg_code(&mut self, code: i32) -> CacheResult<()> {
        validation::greater_zero("epsg code", code)?;
        self.epsg_codes.insert(code);
        Ok(())
    }

    fn add_epsg_codes(&mut self, codes: &[i32]) -> CacheResult<()> {
        for &code in codes {
            validation::greater_zero("epsg code", code)?;
        }
        self.epsg_codes.extend(codes.iter().copied());
        Ok(())
    }

    /// The default code stays the default even when removed from the set.
    fn remove_epsg_code(&mut self, code: i32) -> CacheResult<()> {
        validation::greater_zero("epsg code", code)?;
        self.epsg_codes.remove(&code);
        Ok(())
    }

    fn set_default_epsg_code(&mut self, code: i32) -> CacheResult<()> {
        validation::greater_zero("default epsg code", code)?;
        self.default_epsg_code = code;
        self.epsg_codes.insert(code);
        Ok(())
    }

    fn add_supported_language(&mut self, locale: Locale) -> CacheResult<()> {
        validation::not_null("locale", &locale)?;
        self.supported_languages.insert(locale);
        Ok(())
    }

    fn remove_supported_language(&mut self, locale: &Locale) -> CacheResult<()> {
        validation::not_null("locale", locale)?;
        self.supported_languages.remove(locale);
        Ok(())
    }

    fn clear_supported_languages(&mut self) {
        self.supported_languages.clear();
    }

    fn set_default_language(&mut self, locale: Locale) -> CacheResult<()> {
        validation::not_null("default language", &locale)?;
        self.supported_languages.insert(locale.clone());
        self.default_language = locale;
        Ok(())
    }

    fn set_last_updated(&mut self, time: DateTime<Utc>) {
        self.last_updated = Some(time);
    }
}
