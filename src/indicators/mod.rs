use serde::Serialize;

pub mod registry;

/// The fixed set of indicator keys resolved for every country.
/// Unknown keys are not modeled; the set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorKey {
    GdpGrowth,
    Inflation,
    GovDebt,
    Reserves,
    CurrentAccount,
}

impl IndicatorKey {
    pub const ALL: [IndicatorKey; 5] = [
        IndicatorKey::GdpGrowth,
        IndicatorKey::Inflation,
        IndicatorKey::GovDebt,
        IndicatorKey::Reserves,
        IndicatorKey::CurrentAccount,
    ];

    /// Stable slug used in config files and logs.
    pub fn slug(&self) -> &'static str {
        match self {
            IndicatorKey::GdpGrowth => "gdp_growth",
            IndicatorKey::Inflation => "inflation",
            IndicatorKey::GovDebt => "gov_debt",
            IndicatorKey::Reserves => "reserves",
            IndicatorKey::CurrentAccount => "current_account",
        }
    }
}
