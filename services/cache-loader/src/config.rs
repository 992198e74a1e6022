//! Seed and observation batch files.
//!
//! Both are YAML. `${VAR}` and `${VAR:-default}` are substituted from the
//! environment before parsing.

use anyhow::{Context, Result};
use capabilities_cache::update::{CapabilitiesSeed, ObservationRecord};
use capabilities_cache::CacheConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A seed file: the capabilities to load plus optional cache settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Cache settings; environment variables override them.
    #[serde(default)]
    pub cache: Option<CacheConfig>,

    #[serde(flatten)]
    pub seed: CapabilitiesSeed,
}

impl SeedDocument {
    /// The effective cache configuration: file values, then `SOS_*`
    /// environment overrides from `lookup`.
    pub fn cache_config<F>(&self, lookup: F) -> Result<CacheConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = self.cache.clone().unwrap_or_default().with_overrides(lookup);
        config.validate().context("Invalid cache configuration")?;
        Ok(config)
    }
}

/// Load and parse a seed file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedDocument> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read seed from {:?}", path.as_ref()))?;

    let expanded = expand_env_vars(&content, |name| std::env::var(name).ok())?;

    serde_yaml::from_str(&expanded)
        .with_context(|| format!("Failed to parse seed from {:?}", path.as_ref()))
}

/// Load and parse an observation batch: a YAML list of records.
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<ObservationRecord>> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read observations from {:?}", path.as_ref()))?;

    let expanded = expand_env_vars(&content, |name| std::env::var(name).ok())?;

    serde_yaml::from_str(&expanded)
        .with_context(|| format!("Failed to parse observations from {:?}", path.as_ref()))
}

/// Substitute `${VAR}` and `${VAR:-default}` using `lookup`.
fn expand_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            anyhow::bail!("Unclosed variable substitution: ${{{}", after);
        };
        let expr = &after[..end];

        let value = match expr.split_once(":-") {
            Some((name, default)) => lookup(name.trim())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string()),
            None => lookup(expr.trim())
                .with_context(|| format!("Environment variable {} not set", expr))?,
        };
        result.push_str(&value);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}
