use std::sync::Arc;
use tracing::warn;

pub mod analysis;
pub mod config;
pub mod core;
pub mod fetcher;
pub mod indicators;
pub mod models;

use crate::analysis::{health, narrative};
use crate::config::CuratedData;
use crate::core::resolver;
use crate::fetcher::worldbank::WorldBankFetcher;
use crate::fetcher::{CountrySource, IndicatorSource};
use crate::models::{EconomicMetrics, HealthRecord, HealthStatus};

/// The resolve-then-score pipeline behind `get_health_record`.
///
/// Holds no per-country state; every call builds a fresh record.
#[derive(Clone)]
pub struct HealthService {
    indicators: Arc<dyn IndicatorSource>,
    countries: Arc<dyn CountrySource>,
    curated: CuratedData,
}

impl HealthService {
    pub fn new(
        indicators: Arc<dyn IndicatorSource>,
        countries: Arc<dyn CountrySource>,
        curated: CuratedData,
    ) -> Self {
        Self { indicators, countries, curated }
    }

    /// Wires both collaborator roles to the World Bank API.
    pub fn with_world_bank(curated: CuratedData) -> Self {
        let fetcher = Arc::new(WorldBankFetcher::new());
        Self::new(fetcher.clone(), fetcher, curated)
    }

    /// Builds the composite record for one country code.
    ///
    /// Never fails: an unrecognized code or a dead metadata lookup
    /// produces a degraded placeholder record so a requested country
    /// stays visible instead of silently disappearing.
    pub async fn get_health_record(&self, country_code: &str) -> HealthRecord {
        let code = country_code.to_uppercase();

        let meta = match self.countries.lookup_country(&code).await {
            Ok(Some(meta)) => meta,
            Ok(None) => {
                warn!(%code, "country not found upstream");
                return degraded_record(&code);
            }
            Err(e) => {
                warn!(%code, error = %e, "country details lookup failed");
                return degraded_record(&code);
            }
        };

        let resolved = resolver::resolve(self.indicators.as_ref(), &self.curated, &code).await;

        let pillars = health::compute_pillars(&resolved.metrics);
        let health_index = health::calculate_health_index(&pillars);
        let status = health::health_status(health_index);
        let narrative = narrative::narrative_for(&code, status, &resolved.metrics, &self.curated);

        HealthRecord {
            id: code,
            name: meta.name,
            flag_code: meta.iso2_code,
            data_year: resolved.data_year,
            health_index,
            status,
            pillars,
            metrics: resolved.metrics,
            narrative,
        }
    }
}

/// Placeholder record for a country whose metadata could not be
/// resolved. Status is Warning rather than Unknown so the card reads
/// as "something went wrong here", and every field is deterministic.
pub fn degraded_record(code: &str) -> HealthRecord {
    let metrics = EconomicMetrics::unavailable(resolver::PRIMARY_SOURCE);
    let pillars = health::compute_pillars(&metrics);

    HealthRecord {
        id: code.to_string(),
        name: code.to_string(),
        flag_code: String::new(),
        data_year: "N/A".to_string(),
        health_index: None,
        status: HealthStatus::Warning,
        pillars,
        metrics,
        narrative: narrative::FETCH_FAILED.to_string(),
    }
}
