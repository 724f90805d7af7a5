use async_trait::async_trait;
use anyhow::Result;
use chrono::{Datelike, Utc};

use crate::models::{CountryMeta, CountryOption, Observation};

pub mod worldbank;

/// Year window hint for an indicator query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// Bounded recent window used for primary lookups.
    pub fn recent() -> Self {
        let to = Utc::now().year();
        Self { from: to - 5, to }
    }

    /// Wider historical window used when probing alternate series.
    pub fn wide() -> Self {
        let to = Utc::now().year();
        Self { from: to - 15, to }
    }
}

/// A provider of raw indicator observations.
///
/// `Ok(None)` means the window held no usable data; `Err` means the
/// lookup failed outright (network, malformed payload). Callers treat
/// both as "unavailable" but log them differently.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    fn name(&self) -> &str;

    /// Most recent non-null observation within the hinted range.
    async fn lookup_indicator(
        &self,
        country_code: &str,
        indicator_code: &str,
        range: YearRange,
    ) -> Result<Option<Observation>>;
}

/// A provider of country metadata and the selectable country list.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// `Ok(None)` when the code is unknown upstream.
    async fn lookup_country(&self, country_code: &str) -> Result<Option<CountryMeta>>;

    async fn list_countries(&self) -> Result<Vec<CountryOption>>;
}
