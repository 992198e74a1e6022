use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sos_common::{CacheError, CacheResult, Envelope, TimePeriod};
use tracing::debug;

use super::{link, record, ContentCacheUpdate, UpdateStatus};
use crate::content::WritableContentCache;
use crate::model::Relation;
use crate::validation;
use crate::vocabulary::{ContentCacheExt, WritableContentCacheExt};

/// The parts of a stored observation the cache cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub procedure: String,
    pub offerings: Vec<String>,
    pub observable_property: String,
    pub feature_of_interest: String,
    #[serde(default)]
    pub observation_type: Option<String>,
    pub phenomenon_time: TimePeriod,
    /// Defaults to the end of the phenomenon time.
    #[serde(default)]
    pub result_time: Option<DateTime<Utc>>,
    /// Geometry of the feature of interest.
    #[serde(default)]
    pub feature_envelope: Option<Envelope>,
    /// Sampling geometry of the observation itself.
    #[serde(default)]
    pub sampling_geometry: Option<Envelope>,
}

impl ObservationRecord {
    fn validate(&self) -> CacheResult<()> {
        validation::not_null_or_empty("procedure", &self.procedure)?;
        if self.offerings.is_empty() {
            return Err(CacheError::null_argument("offering"));
        }
        validation::no_null_or_empty_values("offering", &self.offerings)?;
        validation::not_null_or_empty("observable property", &self.observable_property)?;
        validation::not_null_or_empty("feature of interest", &self.feature_of_interest)?;
        if let Some(observation_type) = &self.observation_type {
            validation::not_null_or_empty("observation type", observation_type)?;
        }
        if self.phenomenon_time.is_empty() {
            return Err(CacheError::null_argument("phenomenon time"));
        }
        if !self.phenomenon_time.is_ordered() {
            return Err(CacheError::invalid_argument(
                "phenomenon time",
                "start must not be after end",
            ));
        }
        if let Some(envelope) = &self.feature_envelope {
            validation::valid_envelope(envelope)?;
        }
        if let Some(geometry) = &self.sampling_geometry {
            validation::valid_envelope(geometry)?;
        }
        Ok(())
    }

    fn result_time(&self) -> Option<DateTime<Utc>> {
        self.result_time
            .or(self.phenomenon_time.end)
            .or(self.phenomenon_time.start)
    }
}

/// Applies a batch of inserted observations.
///
/// The whole batch is validated before the first write. Global time ranges
/// and envelopes are rebuilt once at the end.
#[derive(Debug, Clone, Default)]
pub struct ObservationInsertion {
    records: Vec<ObservationRecord>,
    status: UpdateStatus,
}

impl ObservationInsertion {
    pub fn new(records: Vec<ObservationRecord>) -> Self {
        Self {
            records,
            status: UpdateStatus::default(),
        }
    }

    pub fn push(&mut self, record: ObservationRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn apply(&self, cache: &mut dyn WritableContentCache) -> CacheResult<()> {
        for record in &self.records {
            record.validate()?;
        }

        for record in &self.records {
            apply_record(cache, record)?;
        }

        if !self.records.is_empty() {
            cache.recalculate_global_aggregates();
        }
        debug!(records = self.records.len(), "Applied observation batch");
        Ok(())
    }
}

fn apply_record(
    cache: &mut dyn WritableContentCache,
    record: &ObservationRecord,
) -> CacheResult<()> {
    let procedure = record.procedure.as_str();
    let observable_property = record.observable_property.as_str();
    let feature = record.feature_of_interest.as_str();

    cache.add_procedure(procedure)?;
    cache.add_published_procedure(procedure)?;
    cache.add_observable_property(observable_property)?;
    cache.add_published_observable_property(observable_property)?;
    cache.add_feature_of_interest(feature)?;
    cache.add_published_feature_of_interest(feature)?;

    link(cache, Relation::ObservablePropertiesForProcedure, procedure, observable_property)?;
    link(cache, Relation::FeaturesOfInterestForProcedure, procedure, feature)?;
    cache.update_phenomenon_time_for_procedure(procedure, &record.phenomenon_time)?;

    let composite_parents =
        cache.composite_phenomenons_for_observable_property(observable_property);
    let result_time = record.result_time().map(TimePeriod::instant);

    for offering in &record.offerings {
        cache.add_offering(offering)?;
        link(cache, Relation::ProceduresForOffering, offering, procedure)?;
        link(cache, Relation::ObservablePropertiesForOffering, offering, observable_property)?;
        link(cache, Relation::FeaturesOfInterestForOffering, offering, feature)?;
        for composite in &composite_parents {
            link(cache, Relation::CompositePhenomenonsForOffering, offering, composite)?;
        }
        if let Some(observation_type) = &record.observation_type {
            cache.add_observation_type(observation_type)?;
            link(cache, Relation::ObservationTypesForOffering, offering, observation_type)?;
        }

        cache.update_phenomenon_time_for_offering(offering, &record.phenomenon_time)?;
        if let Some(result_time) = &result_time {
            cache.update_result_time_for_offering(offering, result_time)?;
        }
        if let Some(envelope) = &record.feature_envelope {
            cache.update_envelope_for_offering(offering, envelope)?;
        }
        if let Some(geometry) = &record.sampling_geometry {
            cache.update_spatial_filtering_profile_envelope_for_offering(offering, geometry)?;
        }
    }
    Ok(())
}

impl ContentCacheUpdate for ObservationInsertion {
    fn name(&self) -> &str {
        "observation-insertion"
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
    use crate::InMemoryContentCache;
    use chrono::TimeZone;
    use sos_common::BoundingBox;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, hour, 0, 0).unwrap()
    }

    fn observation(hour: u32, x: f64, y: f64) -> ObservationRecord {
        ObservationRecord {
            procedure: "p1".to_string(),
            offerings: vec!["o1".to_string()],
            observable_property: "water-level".to_string(),
            feature_of_interest: "gauge-1".to_string(),
            observation_type: Some("OM_Measurement".to_string()),
            phenomenon_time: TimePeriod::instant(ts(hour)),
            result_time: None,
            feature_envelope: Some(Envelope::new(BoundingBox::point(x, y), 4326)),
            sampling_geometry: None,
        }
    }

    #[test]
    fn test_batch_widens_aggregates() {
        let mut cache = InMemoryContentCache::new();
        let mut update = ObservationInsertion::new(vec![
            observation(6, 13.7, 51.0),
            observation(2, 13.8, 51.1),
        ]);
        update.execute(&mut cache);
        assert!(!update.failed(), "{:?}", update.failure_cause());

        assert_eq!(cache.min_phenomenon_time_for_offering("o1"), Some(ts(2)));
        assert_eq!(cache.max_phenomenon_time_for_offering("o1"), Some(ts(6)));
        assert_eq!(cache.max_phenomenon_time_for_procedure("p1"), Some(ts(6)));
        assert_eq!(cache.max_result_time(), Some(ts(6)));
        assert_eq!(cache.min_phenomenon_time(), Some(ts(2)));
        assert_eq!(
            cache.global_envelope().and_then(|e| e.bbox),
            Some(BoundingBox::new(13.7, 51.0, 13.8, 51.1))
        );
        assert!(cache.offerings_for_observation_type("OM_Measurement").contains("o1"));
        assert!(!cache.has_spatial_filtering_profile_envelope_for_offering("o1"));

        assert!(cache.has_published_procedure("p1"));
        assert!(cache.has_published_observable_property("water-level"));
        assert!(cache.has_published_feature_of_interest("gauge-1"));
    }

    #[test]
    fn test_invalid_record_rejects_whole_batch() {
        let mut cache = InMemoryContentCache::new();
        let mut broken = observation(3, 0.0, 0.0);
        broken.offerings.clear();

        let mut update = ObservationInsertion::new(vec![observation(1, 0.0, 0.0), broken]);
        update.execute(&mut cache);

        assert!(update.failed());
        assert!(!cache.has_offering("o1"));
        assert!(!cache.has_max_phenomenon_time_for_offering("o1"));
    }

    #[test]
    fn test_bad_geometry_in_later_record_writes_nothing() {
        let mut cache = InMemoryContentCache::new();
        let mut second = observation(4, 1.0, 1.0);
        second.offerings = vec!["o2".to_string()];
        second.feature_envelope = Some(Envelope::new(BoundingBox::point(1.0, 1.0), 0));

        let mut update = ObservationInsertion::new(vec![observation(1, 0.0, 0.0), second]);
        update.execute(&mut cache);

        assert!(matches!(
            update.failure_cause(),
            Some(CacheError::InvalidArgument { .. })
        ));
        assert!(!cache.has_offering("o1"));
        assert!(!cache.has_offering("o2"));
        assert!(!cache.has_procedure("p1"));
        assert!(!cache.has_global_envelope());
    }

    #[test]
    fn test_inverted_sampling_geometry_is_rejected() {
        let mut cache = InMemoryContentCache::new();
        let mut record = observation(1, 0.0, 0.0);
        record.sampling_geometry = Some(Envelope::new(BoundingBox::new(5.0, 5.0, 4.0, 6.0), 4326));

        let mut update = ObservationInsertion::new(vec![record]);
        update.execute(&mut cache);

        assert!(update.failed());
        assert!(!cache.has_offering("o1"));
    }

    #[test]
    fn test_component_observation_marks_composite_for_offering() {
        let mut cache = InMemoryContentCache::new();
        cache
            .add_composite_phenomenon_components("water", &["water-level".to_string()])
            .unwrap();

        let mut update = ObservationInsertion::new(vec![observation(1, 0.0, 0.0)]);
        update.execute(&mut cache);

        assert!(cache.is_composite_phenomenon_for_offering("o1", "water"));
    }
}
