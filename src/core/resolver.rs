use std::collections::HashMap;
use tracing::warn;

use crate::config::CuratedData;
use crate::fetcher::{IndicatorSource, YearRange};
use crate::indicators::registry::Registry;
use crate::indicators::IndicatorKey;
use crate::models::{EconomicMetrics, IndicatorSample};

pub const PRIMARY_SOURCE: &str = "World Bank";
pub const ALTERNATE_SOURCE: &str = "World Bank (alternate)";

/// Output of one per-country resolution pass.
pub struct ResolvedIndicators {
    pub metrics: EconomicMetrics,
    /// Majority period label across the primary lookups, "N/A" when none.
    pub data_year: String,
}

/// Resolves the five indicator keys for one country, applying the
/// three-tier precedence: curated override > alternate probe > primary.
///
/// The five primary lookups share no state and run concurrently; the
/// result is joined before scoring since pillar computation needs the
/// complete set.
pub async fn resolve(
    source: &dyn IndicatorSource,
    curated: &CuratedData,
    country_code: &str,
) -> ResolvedIndicators {
    let (gdp_growth, inflation, gov_debt, reserves, current_account) = tokio::join!(
        lookup_primary(source, country_code, IndicatorKey::GdpGrowth),
        lookup_primary(source, country_code, IndicatorKey::Inflation),
        lookup_primary(source, country_code, IndicatorKey::GovDebt),
        lookup_primary(source, country_code, IndicatorKey::Reserves),
        lookup_primary(source, country_code, IndicatorKey::CurrentAccount),
    );

    // Majority vote runs over the primary results, before the alternate
    // probe or overrides touch anything.
    let data_year = most_common_period(
        [&gdp_growth, &inflation, &gov_debt, &reserves, &current_account]
            .into_iter()
            .filter(|s| s.value.is_some())
            .filter_map(|s| s.period.as_deref()),
    );

    // The debt series is sparse upstream; it is the only key with a
    // configured alternate chain.
    let gov_debt = if gov_debt.value.is_none() {
        probe_alternates(source, country_code, IndicatorKey::GovDebt)
            .await
            .unwrap_or(gov_debt)
    } else {
        gov_debt
    };

    let metrics = EconomicMetrics {
        gdp_growth: apply_override(curated, country_code, IndicatorKey::GdpGrowth, gdp_growth),
        inflation: apply_override(curated, country_code, IndicatorKey::Inflation, inflation),
        debt_to_gdp: apply_override(curated, country_code, IndicatorKey::GovDebt, gov_debt),
        reserve_months: apply_override(curated, country_code, IndicatorKey::Reserves, reserves),
        current_account: apply_override(
            curated,
            country_code,
            IndicatorKey::CurrentAccount,
            current_account,
        ),
        // No wired series yet
        credit_to_gdp_gap: IndicatorSample::unavailable("pending"),
        debt_service_ratio: IndicatorSample::unavailable("pending"),
        reer_misalignment: IndicatorSample::unavailable("pending"),
    };

    ResolvedIndicators { metrics, data_year }
}

async fn lookup_primary(
    source: &dyn IndicatorSource,
    country_code: &str,
    key: IndicatorKey,
) -> IndicatorSample {
    let meta = Registry::get(key);

    match source
        .lookup_indicator(country_code, &meta.code, YearRange::recent())
        .await
    {
        Ok(Some(obs)) => IndicatorSample::new(obs.value, &obs.period, PRIMARY_SOURCE),
        Ok(None) => IndicatorSample::unavailable(PRIMARY_SOURCE),
        Err(e) => {
            warn!(country_code, indicator = key.slug(), error = %e, "primary lookup failed");
            IndicatorSample::unavailable(PRIMARY_SOURCE)
        }
    }
}

/// Tries the alternate series in registry order over the wide window.
/// First hit wins and is attributed as alternate-sourced.
async fn probe_alternates(
    source: &dyn IndicatorSource,
    country_code: &str,
    key: IndicatorKey,
) -> Option<IndicatorSample> {
    for code in &Registry::get(key).alternates {
        match source
            .lookup_indicator(country_code, code, YearRange::wide())
            .await
        {
            Ok(Some(obs)) => {
                return Some(IndicatorSample::new(obs.value, &obs.period, ALTERNATE_SOURCE));
            }
            Ok(None) => continue,
            Err(e) => {
                warn!(country_code, indicator = key.slug(), code = code.as_str(), error = %e, "alternate lookup failed");
                continue;
            }
        }
    }
    None
}

/// Curated overrides win unconditionally, attribution included.
fn apply_override(
    curated: &CuratedData,
    country_code: &str,
    key: IndicatorKey,
    resolved: IndicatorSample,
) -> IndicatorSample {
    match curated.override_for(country_code, key) {
        Some(entry) => IndicatorSample::new(entry.value, &entry.period, &entry.source),
        None => resolved,
    }
}

/// Majority vote over the non-missing period labels. Ties break to the
/// greatest (latest) label so multi-way ties stay deterministic.
fn most_common_period<'a>(periods: impl Iterator<Item = &'a str>) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for period in periods {
        *counts.entry(period).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)))
        .map(|(period, _)| period.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
