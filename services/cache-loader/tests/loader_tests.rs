//! Loading seed and observation files from disk.

use cache_loader::{load, load_observations, load_seed, summarize};
use capabilities_cache::CacheConfig;
use test_utils::{ids, temp_file_with, OBSERVATIONS_YAML, SEED_YAML};

#[tokio::test]
async fn test_load_seed_file_and_batch() {
    let seed_file = temp_file_with(".yaml", SEED_YAML);
    let batch_file = temp_file_with(".yaml", OBSERVATIONS_YAML);

    let document = load_seed(seed_file.path()).unwrap();
    let batch = load_observations(batch_file.path()).unwrap();
    let controller = load(CacheConfig::default(), document, vec![batch])
        .await
        .unwrap();

    let summary = summarize(&controller);
    assert_eq!(summary.offerings.len(), 3);
    assert_eq!(summary.epsg_codes, vec![4326, 31467]);
    assert_eq!(summary.languages, vec!["eng", "ger"]);

    let gauge_2 = summary
        .offerings
        .iter()
        .find(|o| o.identifier == ids::OFFERING_GAUGE_2)
        .unwrap();
    assert!(gauge_2.published);
    assert_eq!(gauge_2.name.as_deref(), Some("Gauge 2"));
    assert!(gauge_2
        .observable_properties
        .contains(&ids::WATER_TEMPERATURE.to_string()));

    let hidden = summary
        .offerings
        .iter()
        .find(|o| o.identifier == ids::OFFERING_HIDDEN)
        .unwrap();
    assert!(!hidden.published);
}

#[tokio::test]
async fn test_summary_json_shape() {
    let seed_file = temp_file_with(".yaml", SEED_YAML);
    let document = load_seed(seed_file.path()).unwrap();
    let controller = load(CacheConfig::default(), document, Vec::new())
        .await
        .unwrap();

    let json = serde_json::to_value(summarize(&controller)).unwrap();
    assert_eq!(json["default_epsg_code"], 4326);
    assert_eq!(json["phenomenon_time"]["start"], "2024-01-01T00:00:00Z");
    assert_eq!(json["envelope"]["bbox"]["max_x"], 8.5);
    // the hidden offering has no aggregates to report
    let hidden = json["offerings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["identifier"] == ids::OFFERING_HIDDEN)
        .unwrap();
    assert!(hidden.get("envelope").is_none());
}

#[test]
fn test_cache_section_from_file() {
    let file = temp_file_with(
        ".yaml",
        "cache:\n  default_epsg_code: 31467\n  supported_languages: [eng, ger]\nepsg_codes: [31467]\n",
    );
    let document = load_seed(file.path()).unwrap();
    let config = document.cache_config(|_| None).unwrap();

    assert_eq!(config.default_epsg_code, 31467);
    assert_eq!(config.supported_languages, vec!["eng", "ger"]);
}

#[test]
fn test_missing_seed_file_is_reported() {
    let dir = test_utils::temp_test_dir();
    let err = load_seed(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read seed"));
}

#[test]
fn test_malformed_batch_is_reported() {
    let file = temp_file_with(".yaml", "- procedure: p1\n  offerings: not-a-list\n");
    let err = load_observations(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse observations"));
}
