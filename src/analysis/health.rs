use crate::models::{EconomicMetrics, HealthStatus, Pillars};

// Weights for the Health Index
const W_LIQUIDITY: f64 = 0.25;
const W_BURN_RATE: f64 = 0.20;
const W_DEBT_STRUCTURE: f64 = 0.25;
const W_REAL_GROWTH: f64 = 0.15;
const W_DEMOGRAPHICS: f64 = 0.15;

/// No underlying series yet; held at the neutral midpoint on purpose.
pub const DEMOGRAPHICS_PLACEHOLDER: f64 = 50.0;

/// Normalizes raw metrics into the five 0-100 pillar scores.
/// A missing input propagates as None; nothing is guessed.
pub fn compute_pillars(metrics: &EconomicMetrics) -> Pillars {
    // Liquidity: reserve cover, target > 6 months of imports
    let liquidity = metrics
        .reserve_months
        .value
        .map(|months| (months / 6.0 * 100.0).clamp(0.0, 100.0).round());

    // Burn rate: inflation eats the score 5 points per percent
    let burn_rate = metrics
        .inflation
        .value
        .map(|inflation| (100.0 - inflation * 5.0).clamp(0.0, 100.0).round());

    // Debt structure: full marks up to 40% of GDP, linear penalty above
    let debt_structure = metrics
        .debt_to_gdp
        .value
        .map(|debt| (100.0 - (debt - 40.0).max(0.0)).clamp(0.0, 100.0).round());

    // Real growth: -2% maps to 0, +3% maps to 100
    let real_growth = metrics
        .gdp_growth
        .value
        .map(|growth| ((growth + 2.0) * 20.0).clamp(0.0, 100.0).round());

    Pillars {
        liquidity,
        burn_rate,
        debt_structure,
        real_growth,
        demographics: Some(DEMOGRAPHICS_PLACEHOLDER),
    }
}

/// Calculates the weighted Health Index (0-100), rounded to 1 decimal.
/// Returns None if any data-derived pillar is missing: one gap
/// invalidates the whole score, weights are never renormalized.
pub fn calculate_health_index(pillars: &Pillars) -> Option<f64> {
    let liquidity = pillars.liquidity?;
    let burn_rate = pillars.burn_rate?;
    let debt_structure = pillars.debt_structure?;
    let real_growth = pillars.real_growth?;

    // Demographics is a constant placeholder, so it never gates the score
    let demographics = pillars.demographics.unwrap_or(DEMOGRAPHICS_PLACEHOLDER);

    let index = liquidity * W_LIQUIDITY
        + burn_rate * W_BURN_RATE
        + debt_structure * W_DEBT_STRUCTURE
        + real_growth * W_REAL_GROWTH
        + demographics * W_DEMOGRAPHICS;

    Some((index * 10.0).round() / 10.0)
}

/// Classifies the composite index into a status category.
pub fn health_status(index: Option<f64>) -> HealthStatus {
    match index {
        None => HealthStatus::Unknown,
        Some(i) if i >= 75.0 => HealthStatus::Success,
        Some(i) if i >= 50.0 => HealthStatus::Warning,
        Some(_) => HealthStatus::Danger,
    }
}
