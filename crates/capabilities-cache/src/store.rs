//! Set and association storage.
//!
//! Associations are kept as one `key -> set of values` map per
//! [`Relation`]. Every mutation validates all of its inputs before the first
//! write, so a rejected call leaves the store unchanged.

use std::collections::{HashMap, HashSet};

use sos_common::CacheResult;

use crate::model::{EntitySet, Relation};
use crate::validation;

type ValueSets = HashMap<String, HashSet<String>>;

/// Many-to-many associations, one map per relation direction.
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    maps: HashMap<Relation, ValueSets>,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values associated with `key`; empty if there are none.
    pub fn get(&self, relation: Relation, key: &str) -> HashSet<String> {
        self.maps
            .get(&relation)
            .and_then(|m| m.get(key))
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, relation: Relation, key: &str, value: &str) -> bool {
        self.maps
            .get(&relation)
            .and_then(|m| m.get(key))
            .is_some_and(|values| values.contains(value))
    }

    /// True if `key` has at least one value.
    pub fn has_key(&self, relation: Relation, key: &str) -> bool {
        self.maps
            .get(&relation)
            .and_then(|m| m.get(key))
            .is_some_and(|values| !values.is_empty())
    }

    /// Keys with at least one value.
    pub fn keys(&self, relation: Relation) -> HashSet<String> {
        self.maps
            .get(&relation)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Iterate over every `(key, values)` pair of a relation.
    pub fn entries(&self, relation: Relation) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.maps.get(&relation).into_iter().flat_map(|m| m.iter())
    }

    pub fn add(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        validation::not_null_or_empty(relation.value_label(), value)?;

        self.maps
            .entry(relation)
            .or_default()
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
        Ok(())
    }

    pub fn add_all(&mut self, relation: Relation, key: &str, values: &[String]) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        validation::no_null_or_empty_values(relation.value_label(), values)?;
        if values.is_empty() {
            return Ok(());
        }

        self.maps
            .entry(relation)
            .or_default()
            .entry(key.to_string())
            .or_default()
            .extend(values.iter().cloned());
        Ok(())
    }

    /// Replace the values of `key`. An empty slice clears the key.
    pub fn set(&mut self, relation: Relation, key: &str, values: &[String]) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        validation::no_null_or_empty_values(relation.value_label(), values)?;

        let map = self.maps.entry(relation).or_default();
        if values.is_empty() {
            map.remove(key);
        } else {
            map.insert(key.to_string(), values.iter().cloned().collect());
        }
        Ok(())
    }

    /// Remove one value. Removing a non-member is a no-op.
    pub fn remove(&mut self, relation: Relation, key: &str, value: &str) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        validation::not_null_or_empty(relation.value_label(), value)?;

        if let Some(map) = self.maps.get_mut(&relation) {
            if let Some(values) = map.get_mut(key) {
                values.remove(value);
                if values.is_empty() {
                    map.remove(key);
                }
            }
        }
        Ok(())
    }

    pub fn remove_all(
        &mut self,
        relation: Relation,
        key: &str,
        values: &[String],
    ) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        validation::no_null_or_empty_values(relation.value_label(), values)?;

        if let Some(map) = self.maps.get_mut(&relation) {
            if let Some(existing) = map.get_mut(key) {
                for value in values {
                    existing.remove(value);
                }
                if existing.is_empty() {
                    map.remove(key);
                }
            }
        }
        Ok(())
    }

    /// Drop every value of `key`.
    pub fn clear_key(&mut self, relation: Relation, key: &str) -> CacheResult<()> {
        validation::not_null_or_empty(relation.key_label(), key)?;
        if let Some(map) = self.maps.get_mut(&relation) {
            map.remove(key);
        }
        Ok(())
    }

    /// Drop the whole relation.
    pub fn clear(&mut self, relation: Relation) {
        self.maps.remove(&relation);
    }

    /// Remove `value` from every key of `relation`, returning the keys it was removed from.
    pub fn remove_value_everywhere(&mut self, relation: Relation, value: &str) -> Vec<String> {
        let mut touched = Vec::new();
        if let Some(map) = self.maps.get_mut(&relation) {
            map.retain(|key, values| {
                if values.remove(value) {
                    touched.push(key.clone());
                }
                !values.is_empty()
            });
        }
        touched
    }
}

/// Top-level identifier sets.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    sets: HashMap<EntitySet, HashSet<String>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, set: EntitySet) -> HashSet<String> {
        self.sets.get(&set).cloned().unwrap_or_default()
    }

    pub fn contains(&self, set: EntitySet, id: &str) -> bool {
        self.sets.get(&set).is_some_and(|ids| ids.contains(id))
    }

    pub fn len(&self, set: EntitySet) -> usize {
        self.sets.get(&set).map_or(0, HashSet::len)
    }

    pub fn is_empty(&self, set: EntitySet) -> bool {
        self.len(set) == 0
    }

    pub fn add(&mut self, set: EntitySet, id: &str) -> CacheResult<()> {
        validation::not_null_or_empty(set.label(), id)?;
        self.sets.entry(set).or_default().insert(id.to_string());
        Ok(())
    }

    pub fn add_all(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        validation::no_null_or_empty_values(set.label(), ids)?;
        self.sets.entry(set).or_default().extend(ids.iter().cloned());
        Ok(())
    }

    pub fn set(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        validation::no_null_or_empty_values(set.label(), ids)?;
        self.sets.insert(set, ids.iter().cloned().collect());
        Ok(())
    }

    pub fn remove(&mut self, set: EntitySet, id: &str) -> CacheResult<()> {
        validation::not_null_or_empty(set.label(), id)?;
        if let Some(ids) = self.sets.get_mut(&set) {
            ids.remove(id);
        }
        Ok(())
    }

    pub fn remove_all(&mut self, set: EntitySet, ids: &[String]) -> CacheResult<()> {
        validation::no_null_or_empty_values(set.label(), ids)?;
        if let Some(existing) = self.sets.get_mut(&set) {
            for id in ids {
                existing.remove(id);
            }
        }
        Ok(())
    }

    pub fn clear(&mut self, set: EntitySet) {
        self.sets.remove(&set);
    }
}
