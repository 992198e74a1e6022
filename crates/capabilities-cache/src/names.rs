//! Human-readable names and multilingual offering texts.

use std::collections::HashMap;

use sos_common::{CacheResult, Locale, MultilingualString};

use crate::validation;

/// Bijective identifier <-> human-readable name map.
///
/// Adding a pair evicts any previous pairing of either side, so each
/// identifier has at most one name and each name at most one identifier.
#[derive(Debug, Clone)]
pub struct NameIndex {
    label: &'static str,
    by_id: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl NameIndex {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn add(&mut self, id: &str, name: &str) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, id)?;
        validation::not_null_or_empty(&format!("{} name", self.label), name)?;

        if let Some(old_name) = self.by_id.remove(id) {
            self.by_name.remove(&old_name);
        }
        if let Some(old_id) = self.by_name.remove(name) {
            self.by_id.remove(&old_id);
        }
        self.by_id.insert(id.to_string(), name.to_string());
        self.by_name.insert(name.to_string(), id.to_string());
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: &str) -> CacheResult<()> {
        validation::not_null_or_empty(self.label, id)?;
        if let Some(name) = self.by_id.remove(id) {
            self.by_name.remove(&name);
        }
        Ok(())
    }

    pub fn name_for(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_name.clear();
    }
}

/// Per-offering multilingual texts (names or descriptions).
#[derive(Debug, Clone, Default)]
pub struct I18nTexts {
    texts: HashMap<String, MultilingualString>,
}

impl I18nTexts {
    pub fn get(&self, offering: &str) -> Option<&MultilingualString> {
        self.texts.get(offering)
    }

    pub fn get_locale(&self, offering: &str, locale: &Locale) -> Option<&str> {
        self.texts.get(offering).and_then(|t| t.get(locale))
    }

    pub fn has_locale(&self, offering: &str, locale: &Locale) -> bool {
        self.texts.get(offering).is_some_and(|t| t.contains(locale))
    }

    /// Replace all texts of `offering`.
    pub fn set(&mut self, offering: &str, texts: MultilingualString) -> CacheResult<()> {
        validation::not_null_or_empty("offering", offering)?;
        validation::no_null_map_values("text", &texts)?;
        if texts.is_empty() {
            self.texts.remove(offering);
        } else {
            self.texts.insert(offering.to_string(), texts);
        }
        Ok(())
    }

    /// Add `texts` to those of `offering`, overwriting shared locales.
    pub fn merge(&mut self, offering: &str, texts: &MultilingualString) -> CacheResult<()> {
        validation::not_null_or_empty("offering", offering)?;
        validation::no_null_map_values("text", texts)?;
        if !texts.is_empty() {
            self.texts
                .entry(offering.to_string())
                .or_default()
                .merge(texts);
        }
        Ok(())
    }

    pub fn remove(&mut self, offering: &str) -> CacheResult<()> {
        validation::not_null_or_empty("offering", offering)?;
        self.texts.remove(offering);
        Ok(())
    }
}
