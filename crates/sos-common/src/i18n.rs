//! Locales and multilingual strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A language tag such as "eng", "de" or "en-GB".
///
/// Tags compare case-insensitively and `_` is accepted as a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('_', "-").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag ("en" for "en-gb").
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string with one value per locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultilingualString {
    values: BTreeMap<Locale, String>,
}

impl MultilingualString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, locale: impl Into<Locale>, value: impl Into<String>) -> Self {
        self.insert(locale, value);
        self
    }

    pub fn insert(&mut self, locale: impl Into<Locale>, value: impl Into<String>) {
        self.values.insert(locale.into(), value.into());
    }

    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    pub fn contains(&self, locale: &Locale) -> bool {
        self.values.contains_key(locale)
    }

    /// Add every entry of `other`, overwriting locales present in both.
    pub fn merge(&mut self, other: &MultilingualString) {
        for (locale, value) in &other.values {
            self.values.insert(locale.clone(), value.clone());
        }
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Locale, &str)> {
        self.values.iter().map(|(l, v)| (l, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<L: Into<Locale>, V: Into<String>> FromIterator<(L, V)> for MultilingualString {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut ml = MultilingualString::new();
        for (locale, value) in iter {
            ml.insert(locale, value);
        }
        ml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_normalization() {
        assert_eq!(Locale::new("en_GB"), Locale::new("EN-gb"));
        assert_eq!(Locale::new("en-GB").language(), "en");
        assert_eq!(Locale::new(" eng ").as_str(), "eng");
    }

    #[test]
    fn test_multilingual_lookup() {
        let names = MultilingualString::new()
            .with("eng", "River gauge")
            .with("ger", "Pegel");

        assert_eq!(names.get(&Locale::new("ENG")), Some("River gauge"));
        assert!(names.contains(&Locale::new("ger")));
        assert!(!names.contains(&Locale::new("fre")));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut names = MultilingualString::new().with("eng", "old");
        names.merge(&MultilingualString::new().with("eng", "new").with("ger", "neu"));
        assert_eq!(names.get(&Locale::new("eng")), Some("new"));
        assert_eq!(names.len(), 2);
    }
}
