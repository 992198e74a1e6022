//! Referential integrity report.
//!
//! The cache accepts associations whose targets were never registered in
//! their top-level set. This module finds them so they can be logged or
//! repaired; it never changes the cache.

use std::fmt;

use serde::Serialize;

use crate::content::ContentCache;
use crate::model::Relation;

/// An association value missing from the set it should be registered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DanglingReference {
    pub relation: String,
    pub key: String,
    pub missing: String,
    pub expected_in: &'static str,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' -> '{}' is not a registered {}",
            self.relation, self.key, self.missing, self.expected_in
        )
    }
}

/// Every association value not present in its domain's top-level set.
///
/// Keys are not checked separately: each key is the value of the inverse
/// direction. Domains without a registry (types, formats, roles) are skipped.
pub fn check<C: ContentCache + ?Sized>(cache: &C) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();

    for relation in Relation::ALL {
        let Some(registry) = relation.domains().1.registry() else {
            continue;
        };
        for key in cache.related_keys(relation) {
            for value in cache.related(relation, &key) {
                if !cache.contains_entity(registry, &value) {
                    dangling.push(DanglingReference {
                        relation: relation.to_string(),
                        key: key.clone(),
                        missing: value,
                        expected_in: registry.label(),
                    });
                }
            }
        }
    }

    dangling.sort();
    dangling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::link;
    use crate::vocabulary::WritableContentCacheExt;
    use crate::InMemoryContentCache;

    #[test]
    fn test_consistent_cache_has_no_dangling_references() {
        let mut cache = InMemoryContentCache::new();
        cache.add_offering("o1").unwrap();
        cache.add_procedure("p1").unwrap();
        link(&mut cache, Relation::ProceduresForOffering, "o1", "p1").unwrap();

        assert!(check(&cache).is_empty());
    }

    #[test]
    fn test_reports_unregistered_targets() {
        let mut cache = InMemoryContentCache::new();
        cache.add_offering("o1").unwrap();
        link(&mut cache, Relation::ProceduresForOffering, "o1", "p1").unwrap();
        link(
            &mut cache,
            Relation::AllowedObservationTypesForOffering,
            "o1",
            "OM_Measurement",
        )
        .unwrap();

        let report = check(&cache);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].missing, "p1");
        assert_eq!(report[0].expected_in, "procedure");
        assert!(report[0].to_string().contains("ProceduresForOffering"));
    }
}
