use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::indicators::IndicatorKey;

/// A manually curated value that supersedes whatever the live lookup
/// produced, with its own attribution.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OverrideEntry {
    pub value: f64,
    pub source: String,
    pub period: String,
}

/// Curated data layered on top of live lookups: per-country indicator
/// overrides and full narrative replacements. Plain configuration data;
/// the scoring logic holds no country-specific branches of its own.
///
/// Keys: country ISO3 code -> indicator slug (see IndicatorKey::slug).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CuratedData {
    #[serde(default)]
    pub overrides: HashMap<String, HashMap<String, OverrideEntry>>,
    #[serde(default)]
    pub narratives: HashMap<String, String>,
}

static DEFAULT_CURATED: &str = include_str!("../config/curated.json");

impl CuratedData {
    /// Loads from CURATED_DATA_PATH when set, falling back to the
    /// embedded default table on any failure.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("CURATED_DATA_PATH") {
            match std::fs::read_to_string(&path) {
                Ok(raw) => match serde_json::from_str(&raw) {
                    Ok(data) => {
                        info!(%path, "loaded curated data");
                        return data;
                    }
                    Err(e) => warn!(%path, error = %e, "curated data file is invalid, using embedded default"),
                },
                Err(e) => warn!(%path, error = %e, "curated data file unreadable, using embedded default"),
            }
        }

        Self::embedded()
    }

    /// The default table shipped with the crate.
    pub fn embedded() -> Self {
        serde_json::from_str(DEFAULT_CURATED).expect("embedded curated.json is valid")
    }

    pub fn override_for(&self, country_code: &str, key: IndicatorKey) -> Option<&OverrideEntry> {
        self.overrides.get(country_code)?.get(key.slug())
    }

    pub fn narrative_for(&self, country_code: &str) -> Option<&str> {
        self.narratives.get(country_code).map(|s| s.as_str())
    }
}
