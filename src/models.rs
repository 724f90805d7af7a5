use serde::{Deserialize, Serialize};

/// One raw observation from a statistical provider: a value and the
/// reporting period it belongs to (e.g. "2023").
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Observation {
    pub period: String,
    pub value: f64,
}

/// One resolved data point for a single indicator.
/// `source` stays populated even when the value is missing, so the UI
/// can always attribute what it shows (or failed to show).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IndicatorSample {
    pub value: Option<f64>,
    pub period: Option<String>,
    pub source: String,
}

impl IndicatorSample {
    pub fn new(value: f64, period: &str, source: &str) -> Self {
        Self {
            value: Some(value),
            period: Some(period.to_string()),
            source: source.to_string(),
        }
    }

    pub fn unavailable(source: &str) -> Self {
        Self {
            value: None,
            period: None,
            source: source.to_string(),
        }
    }
}

/// The five resolved metrics plus the "invisible warning" slots.
/// The warning slots have no wired data series and stay unavailable.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EconomicMetrics {
    pub gdp_growth: IndicatorSample,
    pub inflation: IndicatorSample,
    pub debt_to_gdp: IndicatorSample,
    pub reserve_months: IndicatorSample,
    pub current_account: IndicatorSample,
    pub credit_to_gdp_gap: IndicatorSample,
    pub debt_service_ratio: IndicatorSample,
    pub reer_misalignment: IndicatorSample,
}

impl EconomicMetrics {
    /// All slots unavailable, attributed to `source`.
    pub fn unavailable(source: &str) -> Self {
        Self {
            gdp_growth: IndicatorSample::unavailable(source),
            inflation: IndicatorSample::unavailable(source),
            debt_to_gdp: IndicatorSample::unavailable(source),
            reserve_months: IndicatorSample::unavailable(source),
            current_account: IndicatorSample::unavailable(source),
            credit_to_gdp_gap: IndicatorSample::unavailable("pending"),
            debt_service_ratio: IndicatorSample::unavailable("pending"),
            reer_misalignment: IndicatorSample::unavailable("pending"),
        }
    }
}

/// The 5 pillars of economic health.
/// Each is a 0-100 score rounded to the nearest integer, or None when
/// the underlying indicator could not be resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pillars {
    pub liquidity: Option<f64>,
    pub burn_rate: Option<f64>,
    pub debt_structure: Option<f64>,
    pub real_growth: Option<f64>,
    pub demographics: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Success,
    Warning,
    Danger,
    Unknown,
}

/// One country's composite result. Built fresh on every fetch cycle and
/// replaced wholesale on refresh; never mutated in place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthRecord {
    pub id: String,
    pub name: String,
    pub flag_code: String,
    pub data_year: String,
    pub health_index: Option<f64>,
    pub status: HealthStatus,
    pub pillars: Pillars,
    pub metrics: EconomicMetrics,
    pub narrative: String,
}

/// Country details from the metadata collaborator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryMeta {
    pub id: String,
    pub name: String,
    pub iso2_code: String,
    pub region: String,
}

/// Entry in the selectable country list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryOption {
    pub code: String,
    pub name: String,
    pub region: String,
}
