//! Value types as they appear in seeds and on the wire.

use sos_common::{BoundingBox, EpsgCode, Envelope, Locale, MultilingualString, TimePeriod};

#[test]
fn test_crs_reference_forms_agree() {
    let forms = [
        "4326",
        "EPSG:4326",
        "urn:ogc:def:crs:EPSG::4326",
        "urn:ogc:def:crs:EPSG:6.6:4326",
        "http://www.opengis.net/def/crs/EPSG/0/4326",
    ];
    for form in forms {
        assert_eq!(EpsgCode::parse(form).unwrap(), EpsgCode::wgs84(), "{}", form);
    }
    assert!(EpsgCode::parse("EPSG:0").is_err());
    assert!(EpsgCode::parse("CRS:84").is_err());
}

#[test]
fn test_empty_envelope_serializes_without_bbox() {
    let json = serde_json::to_value(Envelope::empty(4326)).unwrap();
    assert_eq!(json, serde_json::json!({ "srid": 4326 }));

    let parsed: Envelope = serde_json::from_str(r#"{"srid": 31467}"#).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.srid, 31467);
}

#[test]
fn test_envelope_union_keeps_first_crs() {
    let a = Envelope::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 4326);
    let b = Envelope::new(BoundingBox::point(5.0, -2.0), 4326);

    let merged = a.union(&b);
    assert_eq!(merged.bbox, Some(BoundingBox::new(0.0, -2.0, 5.0, 1.0)));
    assert_eq!(Envelope::empty(3857).union(&a).srid, 3857);
}

#[test]
fn test_time_period_json_omits_unset_ends() {
    let open = TimePeriod {
        start: None,
        end: Some(TimePeriod::parse("2024-01-01").unwrap().end.unwrap()),
    };
    let json = serde_json::to_value(open).unwrap();
    assert!(json.get("start").is_none());
    assert_eq!(json["end"], "2024-01-01T00:00:00Z");

    let parsed: TimePeriod = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, open);
}

#[test]
fn test_multilingual_string_is_a_plain_map() {
    let names: MultilingualString =
        serde_json::from_str(r#"{"eng": "Gauge", "GER": "Pegel"}"#).unwrap();
    assert_eq!(names.get(&Locale::new("ger")), Some("Pegel"));
    assert_eq!(names.len(), 2);

    let json = serde_json::to_value(&names).unwrap();
    assert_eq!(json, serde_json::json!({ "eng": "Gauge", "ger": "Pegel" }));
}
