//! Configuration for the capabilities cache.

use serde::{Deserialize, Serialize};
use sos_common::{CacheError, CacheResult, EpsgCode, Locale, EPSG_WGS84};

/// Settings every fresh cache starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// EPSG code used when an envelope arrives without one.
    pub default_epsg_code: i32,

    /// Languages offering names and descriptions may be requested in.
    pub supported_languages: Vec<String>,

    /// Language used when a request names none.
    pub default_language: String,

    /// Report dangling references after each complete update.
    pub validate_integrity_on_complete_update: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_epsg_code: EPSG_WGS84,
            supported_languages: vec!["eng".to_string()],
            default_language: "eng".to_string(),
            validate_integrity_on_complete_update: true,
        }
    }
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Overlay `SOS_*` environment variables on top of `self`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values produced by `lookup`; unparsable values are ignored.
    ///
    /// `SOS_DEFAULT_EPSG` takes any CRS reference form, e.g. `31467`,
    /// `EPSG:31467` or `urn:ogc:def:crs:EPSG::31467`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SOS_DEFAULT_EPSG") {
            if let Ok(code) = EpsgCode::parse(&val) {
                self.default_epsg_code = code.code();
            }
        }

        if let Some(val) = lookup("SOS_SUPPORTED_LANGUAGES") {
            self.supported_languages = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("SOS_DEFAULT_LANGUAGE") {
            let val = val.trim();
            if !val.is_empty() {
                self.default_language = val.to_string();
            }
        }

        if let Some(val) = lookup("SOS_VALIDATE_INTEGRITY") {
            self.validate_integrity_on_complete_update = val.to_lowercase() == "true" || val == "1";
        }

        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CacheResult<()> {
        EpsgCode::new(self.default_epsg_code)
            .map_err(|e| CacheError::InvalidConfig(format!("default_epsg_code: {}", e)))?;

        if self.supported_languages.is_empty() {
            return Err(CacheError::InvalidConfig(
                "supported_languages must not be empty".to_string(),
            ));
        }

        if self.supported_languages.iter().any(|l| l.trim().is_empty()) {
            return Err(CacheError::InvalidConfig(
                "supported_languages must not contain blank entries".to_string(),
            ));
        }

        if self.default_language.trim().is_empty() {
            return Err(CacheError::InvalidConfig(
                "default_language must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn supported_locales(&self) -> Vec<Locale> {
        self.supported_languages.iter().map(Locale::new).collect()
    }

    pub fn default_locale(&self) -> Locale {
        Locale::new(&self.default_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.default_epsg_code, 4326);
        assert_eq!(config.supported_languages, vec!["eng"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CacheConfig::default().with_overrides(lookup(&[
            ("SOS_DEFAULT_EPSG", "31467"),
            ("SOS_SUPPORTED_LANGUAGES", "eng, ger,,fre"),
            ("SOS_DEFAULT_LANGUAGE", "ger"),
            ("SOS_VALIDATE_INTEGRITY", "false"),
        ]));

        assert_eq!(config.default_epsg_code, 31467);
        assert_eq!(config.supported_languages, vec!["eng", "ger", "fre"]);
        assert_eq!(config.default_locale(), Locale::new("ger"));
        assert!(!config.validate_integrity_on_complete_update);
    }

    #[test]
    fn test_unparsable_epsg_is_ignored() {
        let config =
            CacheConfig::default().with_overrides(lookup(&[("SOS_DEFAULT_EPSG", "wgs84")]));
        assert_eq!(config.default_epsg_code, 4326);

        let config = CacheConfig::default().with_overrides(lookup(&[("SOS_DEFAULT_EPSG", "-1")]));
        assert_eq!(config.default_epsg_code, 4326);
    }

    #[test]
    fn test_epsg_override_accepts_crs_references() {
        for reference in ["EPSG:31467", "urn:ogc:def:crs:EPSG::31467"] {
            let config =
                CacheConfig::default().with_overrides(lookup(&[("SOS_DEFAULT_EPSG", reference)]));
            assert_eq!(config.default_epsg_code, 31467, "{}", reference);
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CacheConfig {
            default_epsg_code: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));

        let config = CacheConfig {
            supported_languages: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{"default_epsg_code": 3857}"#).unwrap();
        assert_eq!(config.default_epsg_code, 3857);
        assert_eq!(config.default_language, "eng");
    }
}
