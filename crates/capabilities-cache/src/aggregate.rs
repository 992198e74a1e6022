//! Spatio-temporal aggregates kept per offering, per procedure and globally.

use std::collections::HashMap;

use sos_common::{CacheResult, Envelope, TimePeriod};
use tracing::{debug, warn};

use crate::model::Scope;
use crate::validation;

/// A value that can be widened to cover another value of the same kind.
pub trait Aggregate: Clone {
    fn merge(&mut self, other: &Self);

    /// An unset value carries no information and is not stored.
    fn is_unset(&self) -> bool;
}

impl Aggregate for TimePeriod {
    fn merge(&mut self, other: &Self) {
        self.extend(other);
    }

    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Aggregate for Envelope {
    fn merge(&mut self, other: &Self) {
        if other.is_set() && self.srid != other.srid {
            warn!(
                target_srid = self.srid,
                incoming_srid = other.srid,
                "Merging envelopes with different EPSG codes without reprojection"
            );
        }
        self.expand_to_include(other);
    }

    fn is_unset(&self) -> bool {
        // an empty envelope is still a set envelope
        false
    }
}

/// One aggregate per offering, per procedure, plus a global value.
#[derive(Debug, Clone)]
pub struct ExtentStore<T> {
    global: Option<T>,
    offerings: HashMap<String, T>,
    procedures: HashMap<String, T>,
}

impl<T> Default for ExtentStore<T> {
    fn default() -> Self {
        Self {
            global: None,
            offerings: HashMap::new(),
            procedures: HashMap::new(),
        }
    }
}

impl<T: Aggregate> ExtentStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: Scope<'_>) -> Option<&T> {
        match scope {
            Scope::Global => self.global.as_ref(),
            Scope::Offering(id) => self.offerings.get(id),
            Scope::Procedure(id) => self.procedures.get(id),
        }
    }

    /// Store `value` directly, replacing what was there.
    pub fn set(&mut self, scope: Scope<'_>, value: T) -> CacheResult<()> {
        validate_scope(scope)?;
        if value.is_unset() {
            self.remove_unchecked(scope);
            return Ok(());
        }
        match scope {
            Scope::Global => self.global = Some(value),
            Scope::Offering(id) => {
                self.offerings.insert(id.to_string(), value);
            }
            Scope::Procedure(id) => {
                self.procedures.insert(id.to_string(), value);
            }
        }
        Ok(())
    }

    /// Widen the stored value to cover `incoming`, creating it if absent.
    pub fn extend(&mut self, scope: Scope<'_>, incoming: &T) -> CacheResult<()> {
        validate_scope(scope)?;
        if incoming.is_unset() {
            return Ok(());
        }
        match scope {
            Scope::Global => match self.global.as_mut() {
                Some(existing) => existing.merge(incoming),
                None => self.global = Some(incoming.clone()),
            },
            Scope::Offering(id) => extend_keyed(&mut self.offerings, id, incoming),
            Scope::Procedure(id) => extend_keyed(&mut self.procedures, id, incoming),
        }
        Ok(())
    }

    pub fn remove(&mut self, scope: Scope<'_>) -> CacheResult<()> {
        validate_scope(scope)?;
        self.remove_unchecked(scope);
        Ok(())
    }

    /// Rebuild the global value from the per-offering values only.
    ///
    /// The previous global value is discarded; with no offering values the
    /// global value becomes unset. Offerings are merged in identifier order,
    /// so the first offering's CRS wins when envelopes disagree.
    pub fn recalculate(&mut self) -> Option<&T> {
        let mut ids: Vec<&String> = self.offerings.keys().collect();
        ids.sort();

        let mut merged: Option<T> = None;
        for value in ids.into_iter().filter_map(|id| self.offerings.get(id)) {
            match merged.as_mut() {
                Some(acc) => acc.merge(value),
                None => merged = Some(value.clone()),
            }
        }
        debug!(
            offerings = self.offerings.len(),
            is_set = merged.is_some(),
            "Recalculated global aggregate"
        );
        self.global = merged;
        self.global.as_ref()
    }

    pub fn offerings(&self) -> impl Iterator<Item = (&String, &T)> {
        self.offerings.iter()
    }

    pub fn clear(&mut self) {
        self.global = None;
        self.offerings.clear();
        self.procedures.clear();
    }

    fn remove_unchecked(&mut self, scope: Scope<'_>) {
        match scope {
            Scope::Global => self.global = None,
            Scope::Offering(id) => {
                self.offerings.remove(id);
            }
            Scope::Procedure(id) => {
                self.procedures.remove(id);
            }
        }
    }
}

fn extend_keyed<T: Aggregate>(map: &mut HashMap<String, T>, id: &str, incoming: &T) {
    match map.get_mut(id) {
        Some(existing) => existing.merge(incoming),
        None => {
            map.insert(id.to_string(), incoming.clone());
        }
    }
}

fn validate_scope(scope: Scope<'_>) -> CacheResult<()> {
    match scope {
        Scope::Global => Ok(()),
        Scope::Offering(id) => validation::not_null_or_empty("offering", id),
        Scope::Procedure(id) => validation::not_null_or_empty("procedure", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sos_common::BoundingBox;

    fn env(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Envelope {
        Envelope::new(BoundingBox::new(min_x, min_y, max_x, max_y), 4326)
    }

    #[test]
    fn test_recalculate_unions_offerings() {
        let mut store = ExtentStore::new();
        store.set(Scope::Offering("o1"), env(0.0, 0.0, 1.0, 1.0)).unwrap();
        store.set(Scope::Offering("o2"), env(5.0, 5.0, 6.0, 6.0)).unwrap();

        let global = store.recalculate().copied().unwrap();
        assert_eq!(global.bbox, Some(BoundingBox::new(0.0, 0.0, 6.0, 6.0)));

        store.remove(Scope::Offering("o2")).unwrap();
        let global = store.recalculate().copied().unwrap();
        assert_eq!(global.bbox, Some(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));

        store.remove(Scope::Offering("o1")).unwrap();
        assert!(store.recalculate().is_none());
    }

    #[test]
    fn test_mixed_crs_global_takes_first_offering_by_id() {
        let a = Envelope::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), 4326);
        let b = Envelope::new(BoundingBox::new(2.0, 2.0, 3.0, 3.0), 3857);

        for (first, second) in [(("o1", a), ("o2", b)), (("o2", b), ("o1", a))] {
            let mut store = ExtentStore::new();
            store.set(Scope::Offering(first.0), first.1).unwrap();
            store.set(Scope::Offering(second.0), second.1).unwrap();

            let global = store.recalculate().copied().unwrap();
            assert_eq!(global.srid, 4326);
            assert_eq!(global.bbox, Some(BoundingBox::new(0.0, 0.0, 3.0, 3.0)));
        }
    }

    #[test]
    fn test_recalculate_discards_stale_global() {
        let mut store = ExtentStore::new();
        store.set(Scope::Global, env(-180.0, -90.0, 180.0, 90.0)).unwrap();
        store.set(Scope::Offering("o1"), env(0.0, 0.0, 1.0, 1.0)).unwrap();

        let global = store.recalculate().copied().unwrap();
        assert_eq!(global.bbox, Some(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_extend_creates_then_widens() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut store: ExtentStore<TimePeriod> = ExtentStore::new();
        store.extend(Scope::Procedure("p1"), &TimePeriod::instant(t1)).unwrap();
        store.extend(Scope::Procedure("p1"), &TimePeriod::instant(t2)).unwrap();

        assert_eq!(
            store.get(Scope::Procedure("p1")),
            Some(&TimePeriod::new(t1, t2))
        );
        assert!(store.get(Scope::Offering("p1")).is_none());
    }

    #[test]
    fn test_unset_time_is_not_stored() {
        let mut store: ExtentStore<TimePeriod> = ExtentStore::new();
        store.set(Scope::Offering("o1"), TimePeriod::default()).unwrap();
        assert!(store.get(Scope::Offering("o1")).is_none());
        assert!(store.recalculate().is_none());
    }

    #[test]
    fn test_rejects_empty_scope_id() {
        let mut store: ExtentStore<Envelope> = ExtentStore::new();
        assert!(store.set(Scope::Offering(""), Envelope::empty(4326)).is_err());
    }
}
