//! Common test fixtures for the capabilities cache.
//!
//! The identifiers describe a small hydrological network: a river with two
//! gauges, each measuring water level and temperature.

use chrono::{DateTime, Utc};
use sos_common::time::parse_iso8601;
use sos_common::{BoundingBox, Envelope, TimePeriod, EPSG_WGS84};

/// Identifiers used across fixtures and the sample seed.
pub mod ids {
    pub const OFFERING_GAUGE_1: &str = "http://example.org/offering/gauge-1";
    pub const OFFERING_GAUGE_2: &str = "http://example.org/offering/gauge-2";
    pub const OFFERING_HIDDEN: &str = "http://example.org/offering/calibration";

    pub const PROCEDURE_TYPE: &str = "http://example.org/procedure/gauge-type";
    pub const PROCEDURE_GAUGE_1: &str = "http://example.org/procedure/gauge-1";
    pub const PROCEDURE_GAUGE_2: &str = "http://example.org/procedure/gauge-2";

    pub const WATER_LEVEL: &str = "http://example.org/phenomenon/water-level";
    pub const WATER_TEMPERATURE: &str = "http://example.org/phenomenon/water-temperature";
    /// Composite of water level and water temperature.
    pub const HYDROLOGY: &str = "http://example.org/phenomenon/hydrology";

    pub const FEATURE_RIVER: &str = "http://example.org/feature/river";
    pub const FEATURE_GAUGE_1: &str = "http://example.org/feature/gauge-1";
    pub const FEATURE_GAUGE_2: &str = "http://example.org/feature/gauge-2";

    pub const SENSOR_ML: &str = "http://www.opengis.net/sensorML/1.0.1";
    pub const OM_MEASUREMENT: &str =
        "http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement";
    pub const SF_SAMPLING_POINT: &str =
        "http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint";
}

/// Common time values for testing.
pub mod time {
    /// A fixed reference time for tests.
    pub const REFERENCE_TIME: &str = "2024-01-15T12:00:00Z";
}

/// Parse an ISO 8601 timestamp, panicking on malformed input.
pub fn at(s: &str) -> DateTime<Utc> {
    parse_iso8601(s).unwrap_or_else(|e| panic!("bad fixture time {s:?}: {e}"))
}

/// A closed period between two ISO 8601 timestamps.
pub fn period(start: &str, end: &str) -> TimePeriod {
    TimePeriod::new(at(start), at(end))
}

/// A WGS84 envelope.
pub fn envelope(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Envelope {
    Envelope::new(BoundingBox::new(min_x, min_y, max_x, max_y), EPSG_WGS84)
}

/// A capabilities seed for the fixture network.
///
/// Offering gauge-1 covers January 2024 around (7.0..7.5, 51.0..51.5),
/// gauge-2 covers early February 2024 around (8.0..8.5, 52.0..52.5).
/// The calibration offering is hidden and carries no aggregates.
pub const SEED_YAML: &str = r#"
epsg_codes: [4326, 31467]
languages: [eng, ger]
description_formats:
  - http://www.opengis.net/sensorML/1.0.1
observable_properties:
  - identifier: http://example.org/phenomenon/water-level
    name: Water level
  - identifier: http://example.org/phenomenon/water-temperature
    name: Water temperature
  - identifier: http://example.org/phenomenon/hydrology
    name: Hydrology
    components:
      - http://example.org/phenomenon/water-level
      - http://example.org/phenomenon/water-temperature
features:
  - identifier: http://example.org/feature/river
    name: River
  - identifier: http://example.org/feature/gauge-1
    name: Gauge 1
    parents: [http://example.org/feature/river]
    feature_type: http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint
  - identifier: http://example.org/feature/gauge-2
    name: Gauge 2
    parents: [http://example.org/feature/river]
    feature_type: http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint
procedures:
  - identifier: http://example.org/procedure/gauge-type
    type_instance: type
  - identifier: http://example.org/procedure/gauge-1
    name: Gauge sensor 1
    description_formats: [http://www.opengis.net/sensorML/1.0.1]
    instance_of: http://example.org/procedure/gauge-type
  - identifier: http://example.org/procedure/gauge-2
    name: Gauge sensor 2
    description_formats: [http://www.opengis.net/sensorML/1.0.1]
    instance_of: http://example.org/procedure/gauge-type
offerings:
  - identifier: http://example.org/offering/gauge-1
    name: Gauge 1
    names:
      eng: Gauge 1
      ger: Pegel 1
    descriptions:
      eng: Water level and temperature at gauge 1
    procedures: [http://example.org/procedure/gauge-1]
    observable_properties:
      - http://example.org/phenomenon/hydrology
      - http://example.org/phenomenon/water-level
      - http://example.org/phenomenon/water-temperature
    features_of_interest: [http://example.org/feature/gauge-1]
    observation_types:
      - http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement
    feature_of_interest_types:
      - http://www.opengis.net/def/samplingFeatureType/OGC-OM/2.0/SF_SamplingPoint
    phenomenon_time:
      start: 2024-01-01T00:00:00Z
      end: 2024-01-31T00:00:00Z
    result_time:
      start: 2024-01-01T01:00:00Z
      end: 2024-01-31T01:00:00Z
    envelope:
      srid: 4326
      bbox: {min_x: 7.0, min_y: 51.0, max_x: 7.5, max_y: 51.5}
  - identifier: http://example.org/offering/gauge-2
    name: Gauge 2
    names:
      eng: Gauge 2
    procedures: [http://example.org/procedure/gauge-2]
    observable_properties: [http://example.org/phenomenon/water-level]
    features_of_interest: [http://example.org/feature/gauge-2]
    observation_types:
      - http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement
    phenomenon_time:
      start: 2024-02-01T00:00:00Z
      end: 2024-02-10T00:00:00Z
    result_time:
      start: 2024-02-01T00:00:00Z
      end: 2024-02-10T00:00:00Z
    envelope:
      srid: 4326
      bbox: {min_x: 8.0, min_y: 52.0, max_x: 8.5, max_y: 52.5}
  - identifier: http://example.org/offering/calibration
    hidden: true
    procedures: [http://example.org/procedure/gauge-1]
    observable_properties: [http://example.org/phenomenon/water-level]
"#;

/// One observation batch for gauge-2, extending its time range into March
/// and its envelope eastwards.
pub const OBSERVATIONS_YAML: &str = r#"
- procedure: http://example.org/procedure/gauge-2
  offerings: [http://example.org/offering/gauge-2]
  observable_property: http://example.org/phenomenon/water-temperature
  feature_of_interest: http://example.org/feature/gauge-2
  observation_type: http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement
  phenomenon_time:
    start: 2024-03-01T00:00:00Z
    end: 2024-03-01T00:00:00Z
  feature_envelope:
    srid: 4326
    bbox: {min_x: 9.0, min_y: 52.0, max_x: 9.0, max_y: 52.0}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_is_ordered() {
        let p = period("2024-01-01T00:00:00Z", "2024-01-31T00:00:00Z");
        assert!(p.is_ordered());
        assert!(p.contains(&at(time::REFERENCE_TIME)));
    }

    #[test]
    fn test_envelope_is_wgs84() {
        let env = envelope(7.0, 51.0, 7.5, 51.5);
        assert_eq!(env.srid, EPSG_WGS84);
        assert!(env.contains_point(7.2, 51.2));
    }

    #[test]
    fn test_seed_yaml_parses() {
        let doc: serde_yaml::Value = serde_yaml::from_str(SEED_YAML).unwrap();
        assert_eq!(doc["offerings"].as_sequence().map(Vec::len), Some(3));
        let batch: serde_yaml::Value = serde_yaml::from_str(OBSERVATIONS_YAML).unwrap();
        assert_eq!(batch.as_sequence().map(Vec::len), Some(1));
    }
}
