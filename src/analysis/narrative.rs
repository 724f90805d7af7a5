use crate::config::CuratedData;
use crate::models::{EconomicMetrics, HealthStatus};

/// Fixed sentence used for degraded records when country metadata
/// cannot be resolved at all.
pub const FETCH_FAILED: &str = "Data fetch failed.";

fn base_phrase(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Success => "A well-oiled machine.",
        HealthStatus::Warning => "Warning lights are blinking.",
        HealthStatus::Danger => "Critical system level.",
        HealthStatus::Unknown => "Status unknown.",
    }
}

/// Picks the narrative sentence for a record.
///
/// A curated per-country replacement wins outright; otherwise the
/// status phrase gets independent augmentation clauses for hot growth
/// and hot inflation (both can apply at once).
pub fn narrative_for(
    country_code: &str,
    status: HealthStatus,
    metrics: &EconomicMetrics,
    curated: &CuratedData,
) -> String {
    if let Some(replacement) = curated.narrative_for(country_code) {
        return replacement.to_string();
    }

    let mut narrative = base_phrase(status).to_string();

    if metrics.gdp_growth.value.map_or(false, |g| g > 5.0) {
        narrative.push_str(" Strong growth engine.");
    }
    if metrics.inflation.value.map_or(false, |i| i > 10.0) {
        narrative.push_str(" Overheating.");
    }

    narrative
}
