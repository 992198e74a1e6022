//! Helpers that write both directions of an association.
//!
//! The store keeps every association as two independent maps. Update actions
//! go through these helpers so the two directions are always changed together.

use sos_common::CacheResult;

use crate::content::WritableContentCache;
use crate::model::Relation;
use crate::validation;

/// Associate `value` with `key` in `relation` and `key` with `value` in its inverse.
pub fn link<C>(cache: &mut C, relation: Relation, key: &str, value: &str) -> CacheResult<()>
where
    C: WritableContentCache + ?Sized,
{
    validation::not_null_or_empty(relation.key_label(), key)?;
    validation::not_null_or_empty(relation.value_label(), value)?;
    cache.add_related(relation, key, value)?;
    cache.add_related(relation.inverse(), value, key)
}

pub fn link_all<C>(
    cache: &mut C,
    relation: Relation,
    key: &str,
    values: &[String],
) -> CacheResult<()>
where
    C: WritableContentCache + ?Sized,
{
    validation::not_null_or_empty(relation.key_label(), key)?;
    validation::no_null_or_empty_values(relation.value_label(), values)?;
    cache.add_all_related(relation, key, values)?;
    for value in values {
        cache.add_related(relation.inverse(), value, key)?;
    }
    Ok(())
}

/// Remove the association between `key` and `value` in both directions.
pub fn unlink<C>(cache: &mut C, relation: Relation, key: &str, value: &str) -> CacheResult<()>
where
    C: WritableContentCache + ?Sized,
{
    validation::not_null_or_empty(relation.key_label(), key)?;
    validation::not_null_or_empty(relation.value_label(), value)?;
    cache.remove_related(relation, key, value)?;
    cache.remove_related(relation.inverse(), value, key)
}

/// Drop every association of `key` in `relation`, in both directions.
///
/// Returns the identifiers `key` was associated with.
pub fn unlink_everywhere<C>(
    cache: &mut C,
    relation: Relation,
    key: &str,
) -> CacheResult<Vec<String>>
where
    C: WritableContentCache + ?Sized,
{
    validation::not_null_or_empty(relation.key_label(), key)?;
    let mut partners: Vec<String> = cache.related(relation, key).into_iter().collect();
    // entries present only in the inverse direction
    for other in cache.remove_related_everywhere(relation.inverse(), key)? {
        if !partners.contains(&other) {
            partners.push(other);
        }
    }
    cache.clear_related(relation, key)?;
    partners.sort();
    Ok(partners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentCache;
    use crate::InMemoryContentCache;
    use sos_common::CacheError;

    #[test]
    fn test_link_writes_both_directions() {
        let mut cache = InMemoryContentCache::new();
        link(&mut cache, Relation::ProceduresForOffering, "o1", "p1").unwrap();

        assert!(cache.is_related(Relation::ProceduresForOffering, "o1", "p1"));
        assert!(cache.is_related(Relation::OfferingsForProcedure, "p1", "o1"));

        unlink(&mut cache, Relation::OfferingsForProcedure, "p1", "o1").unwrap();
        assert!(!cache.has_related(Relation::ProceduresForOffering, "o1"));
        assert!(!cache.has_related(Relation::OfferingsForProcedure, "p1"));
    }

    #[test]
    fn test_link_validates_before_writing() {
        let mut cache = InMemoryContentCache::new();
        let err = link(&mut cache, Relation::ProceduresForOffering, "o1", "").unwrap_err();
        assert!(matches!(err, CacheError::NullArgument { .. }));
        assert!(cache.related_keys(Relation::ProceduresForOffering).is_empty());

        let values = vec!["p1".to_string(), String::new()];
        assert!(link_all(&mut cache, Relation::ProceduresForOffering, "o1", &values).is_err());
        assert!(cache.related_keys(Relation::OfferingsForProcedure).is_empty());
    }

    #[test]
    fn test_unlink_everywhere_repairs_one_sided_entries() {
        let mut cache = InMemoryContentCache::new();
        link(&mut cache, Relation::OfferingsForProcedure, "p1", "o1").unwrap();
        // one-sided entry written without the helper
        cache
            .add_related(Relation::ProceduresForOffering, "o2", "p1")
            .unwrap();

        let partners =
            unlink_everywhere(&mut cache, Relation::OfferingsForProcedure, "p1").unwrap();
        assert_eq!(partners, vec!["o1", "o2"]);
        assert!(!cache.has_related(Relation::OfferingsForProcedure, "p1"));
        assert!(cache.related_keys(Relation::ProceduresForOffering).is_empty());
    }
}
