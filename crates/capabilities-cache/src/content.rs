//! Read and write capabilities of the cache.
//!
//! [`ContentCache`] is the query surface used by request handlers,
//! [`WritableContentCache`] the mutation surface used by update actions.
//! Both are small and keyed by the enums in [`crate::model`];
//! the named vocabulary (`offerings_for_procedure`, `add_parent_feature`, ...)
//! is layered on top in [`crate::vocabulary`].

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sos_common::{CacheResult, Envelope, Locale, MultilingualString, TimePeriod};

use crate::model::{
    ComponentAggregation, EntitySet, EnvelopeKind, Hierarchy, NameKind, Relation, Scope,
    TimeKind, TypeInstance,
};

/// Query operations. Every getter returns an owned snapshot; predicates have
/// no side effects.
pub trait ContentCache: Send + Sync {
    // === Sets ===
    fn entities(&self, set: EntitySet) -> HashSet<String>;
    fn contains_entity(&self, set: EntitySet, id: &str) -> bool;

    // === Associations ===
    fn related(&self, relation: Relation, key: &str) -> HashSet<String>;
    fn is_related(&self, relation: Relation, key: &str, value: &str) -> bool;
    /// True if `key` has at least one value in `relation`.
    fn has_related(&self, relation: Relation, key: &str) -> bool;
    /// Keys with at least one value in `relation`.
    fn related_keys(&self, relation: Relation) -> HashSet<String>;

    // === Hierarchies ===
    fn parents(
        &self,
        hierarchy: Hierarchy,
        ids: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String>;
    fn children(
        &self,
        hierarchy: Hierarchy,
        ids: &[&str],
        full_hierarchy: bool,
        include_self: bool,
    ) -> HashSet<String>;

    // === Aggregates ===
    fn time_extent(&self, kind: TimeKind, scope: Scope<'_>) -> Option<TimePeriod>;
    fn envelope(&self, kind: EnvelopeKind, scope: Scope<'_>) -> Option<Envelope>;

    // === Names ===
    fn human_readable_name(&self, kind: NameKind, id: &str) -> Option<String>;
    fn identifier_for_human_readable_name(&self, kind: NameKind, name: &str) -> Option<String>;
    fn name_for_offering(&self, offering: &str) -> Option<String>;
    fn i18n_names_for_offering(&self, offering: &str) -> Option<MultilingualString>;
    fn i18n_name_for_offering(&self, offering: &str, locale: &Locale) -> Option<String>;
    fn has_i18n_names_for_offering(&self, offering: &str, locale: &Locale) -> bool;
    fn i18n_descriptions_for_offering(&self, offering: &str) -> Option<MultilingualString>;
    fn i18n_description_for_offering(&self, offering: &str, locale: &Locale) -> Option<String>;
    fn has_i18n_descriptions_for_offering(&self, offering: &str, locale: &Locale) -> bool;

    // === Procedure classification ===
    fn type_instance_of_procedure(&self, procedure: &str) -> Option<TypeInstance>;
    fn procedures_with_type_instance(&self, kind: TypeInstance) -> HashSet<String>;
    fn component_aggregation_of_procedure(&self, procedure: &str) -> Option<ComponentAggregation>;
    fn procedures_with_component_aggregation(&self, kind: ComponentAggregation) -> HashSet<String>;

    // === CRS and languages ===
    fn epsg_codes(&self) -> HashSet<i32>;
    fn has_epsg_code(&self, code: i32) -> bool;
    /// Always present.
    fn default_epsg_code(&self) -> i32;
    fn supported_languages(&self) -> HashSet<Locale>;
    fn is_language_supported(&self, locale: &Locale) -> bool;
    fn default_language(&self) -> Locale;

    /// When this cache state was last modified.
    fn last_updated(&self) -> Option<DateTime<Utc>>;
}

/// Mutation operations. Each call validates its inputs before touching the
/// store and leaves the cache unchanged when it returns an error.
pub trait WritableContentCache: ContentCache {
    // === Sets ===
    fn add_entity(&mut self, set: EntitySet, id: &str) -> CacheResult<()>;
    fn add_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()>;
    fn set_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()>;
    fn remove_entity(&mut self, set: EntitySet, id: &str) -> CacheResult<()>;
    fn remove_entities(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()>;
    fn clear_entities(&mut self, set: EntitySet);

    // === Associations (one direction per call) ===
    fn add_related(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()>;
    fn add_all_related(
        &mut self,
        relation: Relation,
        key: &str,
        values: &[String],
    ) -> CacheResult<()>;
    /// Replace the values of `key`; readers of a published snapshot never see
    /// the intermediate state.
    fn set_related(&mut self, relation: Relation, key: &str, values: &[String]) -> CacheResult<()>;
    fn remove_related(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()>;
    fn remove_all_related(
        &mut self,
        relation: Relation,
        key: &str,
        values: &[String],
    ) -> CacheResult<()>;
    fn clear_related(&mut self, relation: Relation, key: &str) -> CacheResult<()>;
    /// Remove `value` from every key of `relation`; returns the keys it was removed from.
    fn remove_related_everywhere(
        &mut self,
        relation: Relation,
        value: &str,
    ) -> CacheResult<Vec<String>>;
    fn clear_relation(&mut self, relation: Relation);

    // === Hierarchies ===
    fn add_parent(&mut self, hierarchy: Hierarchy, child: &str, parent: &str) -> CacheResult<()>;
    fn add_parents(
        &mut self,
        hierarchy: Hierarchy,
        child: &str,
        parents: &[String],
    ) -> CacheResult<()>;
    fn remove_parent(&mut self, hierarchy: Hierarchy, child: &str, parent: &str) -> CacheResult<()>;
    fn remove_from_hierarchy(&mut self, hierarchy: Hierarchy, id: &str) -> CacheResult<()>;
    fn clear_hierarchy(&mut self, hierarchy: Hierarchy);

    // === Aggregates ===
    fn set_time_extent(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        period: TimePeriod,
    ) -> CacheResult<()>;
    fn set_min_time(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        time: DateTime<Utc>,
    ) -> CacheResult<()>;
    fn set_max_time(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        time: DateTime<Utc>,
    ) -> CacheResult<()>;
    /// Widen the stored range to include `period`, creating it if absent.
    fn extend_time_extent(
        &mut self,
        kind: TimeKind,
        scope: Scope<'_>,
        period: &TimePeriod,
    ) -> CacheResult<()>;
    fn remove_time_extent(&mut self, kind: TimeKind, scope: Scope<'_>) -> CacheResult<()>;
    /// Rebuild the global range from the per-offering ranges.
    fn recalculate_time_extent(&mut self, kind: TimeKind);

    fn set_envelope(
        &mut self,
        kind: EnvelopeKind,
        scope: Scope<'_>,
        envelope: Envelope,
    ) -> CacheResult<()>;
    /// Union the stored envelope with `envelope`, creating it if absent.
    fn extend_envelope(
        &mut self,
        kind: EnvelopeKind,
        scope: Scope<'_>,
        envelope: &Envelope,
    ) -> CacheResult<()>;
    fn remove_envelope(&mut self, kind: EnvelopeKind, scope: Scope<'_>) -> CacheResult<()>;
    /// Rebuild the global envelope from the per-offering envelopes.
    fn recalculate_envelope(&mut self, kind: EnvelopeKind);

    // === Names ===
    fn add_human_readable_name(&mut self, kind: NameKind, id: &str, name: &str) -> CacheResult<()>;
    fn remove_human_readable_name(&mut self, kind: NameKind, id: &str) -> CacheResult<()>;
    fn clear_human_readable_names(&mut self, kind: NameKind);
    fn set_name_for_offering(&mut self, offering: &str, name: &str) -> CacheResult<()>;
    fn remove_name_for_offering(&mut self, offering: &str) -> CacheResult<()>;
    fn set_i18n_names_for_offering(
        &mut self,
        offering: &str,
        names: MultilingualString,
    ) -> CacheResult<()>;
    fn add_i18n_names_for_offering(
        &mut self,
        offering: &str,
        names: &MultilingualString,
    ) -> CacheResult<()>;
    fn remove_i18n_names_for_offering(&mut self, offering: &str) -> CacheResult<()>;
    fn set_i18n_descriptions_for_offering(
        &mut self,
        offering: &str,
        descriptions: MultilingualString,
    ) -> CacheResult<()>;
    fn add_i18n_descriptions_for_offering(
        &mut self,
        offering: &str,
        descriptions: &MultilingualString,
    ) -> CacheResult<()>;
    fn remove_i18n_descriptions_for_offering(&mut self, offering: &str) -> CacheResult<()>;

    // === Procedure classification ===
    fn set_type_instance_of_procedure(
        &mut self,
        procedure: &str,
        kind: TypeInstance,
    ) -> CacheResult<()>;
    fn remove_type_instance_of_procedure(&mut self, procedure: &str) -> CacheResult<()>;
    fn set_component_aggregation_of_procedure(
        &mut self,
        procedure: &str,
        kind: ComponentAggregation,
    ) -> CacheResult<()>;
    fn remove_component_aggregation_of_procedure(&mut self, procedure: &str) -> CacheResult<()>;

    // === CRS and languages ===
    fn add_epsg_code(&mut self, code: i32) -> CacheResult<()>;
    fn add_epsg_codes(&mut self, codes: &[i32]) -> CacheResult<()>;
    fn remove_epsg_code(&mut self, code: i32) -> CacheResult<()>;
    fn set_default_epsg_code(&mut self, code: i32) -> CacheResult<()>;
    fn add_supported_language(&mut self, locale: Locale) -> CacheResult<()>;
    fn remove_supported_language(&mut self, locale: &Locale) -> CacheResult<()>;
    fn clear_supported_languages(&mut self);
    fn set_default_language(&mut self, locale: Locale) -> CacheResult<()>;

    fn set_last_updated(&mut self, time: DateTime<Utc>);
}
