//! Serialisable digest of a cache snapshot.

use std::collections::HashSet;

use serde::Serialize;
use sos_common::{Envelope, TimePeriod};

use crate::content::ContentCache;
use crate::vocabulary::ContentCacheExt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilitiesSummary {
    pub default_epsg_code: i32,
    pub epsg_codes: Vec<i32>,
    pub default_language: String,
    pub languages: Vec<String>,
    pub procedure_count: usize,
    pub observable_property_count: usize,
    pub feature_of_interest_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenomenon_time: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_time: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
    pub offerings: Vec<OfferingSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferingSummary {
    pub identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub published: bool,
    pub procedures: Vec<String>,
    pub observable_properties: Vec<String>,
    pub features_of_interest: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phenomenon_time: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_time: Option<TimePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
}

fn sorted(values: HashSet<String>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort();
    values
}

impl CapabilitiesSummary {
    pub fn from_cache<C: ContentCache + ?Sized>(cache: &C) -> Self {
        let mut epsg_codes: Vec<i32> = cache.epsg_codes().into_iter().collect();
        epsg_codes.sort_unstable();

        let mut languages: Vec<String> = cache
            .supported_languages()
            .into_iter()
            .map(String::from)
            .collect();
        languages.sort();

        let offerings = sorted(cache.offerings())
            .into_iter()
            .map(|id| OfferingSummary {
                name: cache.name_for_offering(&id),
                published: cache.has_published_offering(&id),
                procedures: sorted(cache.procedures_for_offering(&id)),
                observable_properties: sorted(cache.observable_properties_for_offering(&id)),
                features_of_interest: sorted(cache.features_of_interest_for_offering(&id)),
                phenomenon_time: cache.phenomenon_time_for_offering(&id),
                result_time: cache.result_time_for_offering(&id),
                envelope: cache.envelope_for_offering(&id),
                identifier: id,
            })
            .collect();

        Self {
            default_epsg_code: cache.default_epsg_code(),
            epsg_codes,
            default_language: cache.default_language().to_string(),
            languages,
            procedure_count: cache.procedures().len(),
            observable_property_count: cache.observable_properties().len(),
            feature_of_interest_count: cache.features_of_interest().len(),
            phenomenon_time: cache.phenomenon_time(),
            result_time: cache.result_time(),
            envelope: cache.global_envelope(),
            offerings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WritableContentCache;
    use crate::model::Relation;
    use crate::update::link;
    use crate::vocabulary::WritableContentCacheExt;
    use crate::InMemoryContentCache;

    #[test]
    fn test_summary_lists_offerings_in_order() {
        let mut cache = InMemoryContentCache::new();
        cache.add_offerings(&["o2".to_string(), "o1".to_string()]).unwrap();
        cache.add_published_offering("o1").unwrap();
        cache.set_name_for_offering("o1", "First").unwrap();
        link(&mut cache, Relation::ProceduresForOffering, "o1", "p1").unwrap();

        let summary = CapabilitiesSummary::from_cache(&cache);
        assert_eq!(summary.default_epsg_code, 4326);
        assert_eq!(summary.languages, vec!["eng"]);
        assert_eq!(summary.offerings.len(), 2);
        assert_eq!(summary.offerings[0].identifier, "o1");
        assert_eq!(summary.offerings[0].name.as_deref(), Some("First"));
        assert!(summary.offerings[0].published);
        assert_eq!(summary.offerings[0].procedures, vec!["p1"]);
        assert!(!summary.offerings[1].published);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("envelope").is_none());
        assert_eq!(json["offerings"][0]["procedures"][0], "p1");
    }
}
