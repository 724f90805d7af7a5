use once_cell::sync::Lazy;
use serde::Serialize;

use crate::indicators::IndicatorKey;

// ============================================================================
// ENUMS
// ============================================================================

/// Defines how the indicator value should be formatted/displayed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UnitType {
    /// Percentage (e.g., 4.26 -> "4.26%")
    Percent,
    /// Months of import cover (e.g., 5.2 -> "5.2 months")
    Months,
}

// ============================================================================
// METADATA STRUCT
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorMetadata {
    pub key: IndicatorKey,
    pub name: String,
    pub description: Option<String>,
    /// World Bank series code queried first.
    pub code: String,
    /// Secondary series probed in order when the primary window is empty.
    /// Only the government-debt series carries alternates; the upstream
    /// central-government debt series is sparse for many countries.
    pub alternates: Vec<String>,
    pub unit: UnitType,
}

// Helper macro to reduce boilerplate
macro_rules! ind {
    ($key:expr, $name:expr, $desc:expr, $code:expr, $alts:expr, $unit:expr) => {
        IndicatorMetadata {
            key: $key,
            name: $name.to_string(),
            description: Some($desc.to_string()),
            code: $code.to_string(),
            alternates: $alts.iter().map(|s: &&str| s.to_string()).collect(),
            unit: $unit,
        }
    };
}

// ============================================================================
// STATIC INDICATOR REGISTRY (Lazy initialization, O(1) lookup by key)
// ============================================================================

static INDICATORS: Lazy<Vec<IndicatorMetadata>> = Lazy::new(|| {
    vec![
        ind!(IndicatorKey::GdpGrowth, "GDP Growth",
             "Annual GDP growth, constant prices", "NY.GDP.MKTP.KD.ZG",
             [], UnitType::Percent),
        ind!(IndicatorKey::Inflation, "Inflation (CPI)",
             "Consumer price inflation, annual %", "FP.CPI.TOTL.ZG",
             [], UnitType::Percent),
        ind!(IndicatorKey::GovDebt, "Government Debt / GDP",
             "Central government debt, % of GDP", "GC.DOD.TOTL.GD.ZS",
             ["DT.DOD.DECT.GN.ZS", "FS.AST.DOMS.GD.ZS"], UnitType::Percent),
        ind!(IndicatorKey::Reserves, "Reserve Cover",
             "Total reserves in months of imports", "FI.RES.TOTL.MO",
             [], UnitType::Months),
        ind!(IndicatorKey::CurrentAccount, "Current Account",
             "Current account balance, % of GDP", "BN.CAB.XOKA.GD.ZS",
             [], UnitType::Percent),
    ]
});

pub struct Registry;

impl Registry {
    pub fn all() -> &'static [IndicatorMetadata] {
        &INDICATORS
    }

    pub fn get(key: IndicatorKey) -> &'static IndicatorMetadata {
        INDICATORS
            .iter()
            .find(|m| m.key == key)
            .expect("registry covers every IndicatorKey")
    }
}
