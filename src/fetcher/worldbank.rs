use async_trait::async_trait;
use anyhow::{Result, anyhow};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::{CountrySource, IndicatorSource, YearRange};
use crate::models::{CountryMeta, CountryOption, Observation};

const DEFAULT_API_BASE: &str = "https://api.worldbank.org/v2";

pub struct WorldBankFetcher {
    client: Client,
    base_url: String,
}

impl WorldBankFetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("EconHealthAnalyzer/1.0"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = std::env::var("WB_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self { client, base_url }
    }

    /// World Bank API returns an array: [Metadata, [Rows...]]
    /// Rows carry "date" (the period label, usually "YYYY") and "value"
    /// (number, string-encoded number, or null for missing periods).
    fn parse_observations(json: &Value) -> Vec<Observation> {
        let rows = match json.as_array().and_then(|arr| arr.get(1)).and_then(|v| v.as_array()) {
            Some(rows) => rows,
            // A single-element response is the API's way of saying
            // "nothing here" (bad indicator, no rows for the range).
            None => return Vec::new(),
        };

        let mut observations = Vec::new();

        for row in rows {
            let period = match row["date"].as_str() {
                Some(p) => p,
                None => continue,
            };

            if let Some(value) = row["value"].as_f64() {
                observations.push(Observation { period: period.to_string(), value });
            } else if let Some(value_str) = row["value"].as_str() {
                // Sometimes value comes back as a string "123.45"
                if let Ok(value) = value_str.parse::<f64>() {
                    observations.push(Observation { period: period.to_string(), value });
                }
            }
        }

        // API returns DESC usually, but don't rely on it
        observations.sort_by(|a, b| b.period.cmp(&a.period));
        observations
    }

    fn parse_country_details(json: &Value) -> Option<CountryMeta> {
        let entry = json.as_array()?.get(1)?.as_array()?.first()?;
        Some(CountryMeta {
            id: entry["id"].as_str()?.to_string(),
            name: entry["name"].as_str()?.to_string(),
            iso2_code: entry["iso2Code"].as_str().unwrap_or_default().to_string(),
            region: entry["region"]["value"].as_str().unwrap_or_default().to_string(),
        })
    }

    /// Filters out aggregates (regions, income groups). Aggregates have
    /// region iso2code "NA" or an empty capital city.
    fn parse_country_list(json: &Value) -> Vec<CountryOption> {
        let rows = match json.as_array().and_then(|arr| arr.get(1)).and_then(|v| v.as_array()) {
            Some(rows) => rows,
            None => return Vec::new(),
        };

        let mut countries: Vec<CountryOption> = rows
            .iter()
            .filter(|c| {
                c["region"]["iso2code"].as_str() != Some("NA")
                    && c["capitalCity"].as_str().map(|s| !s.is_empty()).unwrap_or(false)
            })
            .filter_map(|c| {
                Some(CountryOption {
                    code: c["id"].as_str()?.to_string(),
                    name: c["name"].as_str()?.to_string(),
                    region: c["region"]["value"].as_str().unwrap_or_default().to_string(),
                })
            })
            .collect();

        countries.sort_by(|a, b| a.name.cmp(&b.name));
        countries
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "worldbank request");
        let resp = self.client.get(url).send().await?;

        if !resp.status().is_success() {
            return Err(anyhow!("World Bank API error: {}", resp.status()));
        }

        Ok(resp.json().await?)
    }
}

impl Default for WorldBankFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IndicatorSource for WorldBankFetcher {
    fn name(&self) -> &str {
        "worldbank"
    }

    async fn lookup_indicator(
        &self,
        country_code: &str,
        indicator_code: &str,
        range: YearRange,
    ) -> Result<Option<Observation>> {
        let url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page=100&date={}:{}",
            self.base_url, country_code, indicator_code, range.from, range.to
        );

        let json = self.get_json(&url).await?;
        let observations = Self::parse_observations(&json);

        if observations.is_empty() {
            warn!(country_code, indicator_code, "no data in window");
        }

        // Sorted newest-first, so the head is the most recent non-null value
        Ok(observations.into_iter().next())
    }
}

#[async_trait]
impl CountrySource for WorldBankFetcher {
    async fn lookup_country(&self, country_code: &str) -> Result<Option<CountryMeta>> {
        let url = format!("{}/country/{}?format=json", self.base_url, country_code);
        let json = self.get_json(&url).await?;
        Ok(Self::parse_country_details(&json))
    }

    async fn list_countries(&self) -> Result<Vec<CountryOption>> {
        // per_page=300 covers the full list in one page
        let url = format!("{}/country?format=json&per_page=300", self.base_url);
        let json = self.get_json(&url).await?;
        Ok(Self::parse_country_list(&json))
    }
}

/// Init-once/read-many memo of the full country list. Owned by whoever
/// drives the fetch cycle; the core never touches it.
#[derive(Default)]
pub struct CountryListCache {
    cell: OnceCell<Vec<CountryOption>>,
}

impl CountryListCache {
    pub fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    pub async fn get_or_fetch(&self, source: &dyn CountrySource) -> Result<&[CountryOption]> {
        let list = self
            .cell
            .get_or_try_init(|| async { source.list_countries().await })
            .await?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_wb_observations() {
        let json_data = json!([
            { "page": 1, "pages": 1, "per_page": 100, "total": 3 },
            [
                { "indicator": { "id": "NY.GDP.MKTP.KD.ZG", "value": "GDP growth" }, "country": { "id": "SE", "value": "Sweden" }, "countryiso3code": "SWE", "date": "2024", "value": null, "unit": "", "obs_status": "", "decimal": 1 },
                { "indicator": { "id": "NY.GDP.MKTP.KD.ZG", "value": "GDP growth" }, "country": { "id": "SE", "value": "Sweden" }, "countryiso3code": "SWE", "date": "2023", "value": 3.0, "unit": "", "obs_status": "", "decimal": 1 },
                { "indicator": { "id": "NY.GDP.MKTP.KD.ZG", "value": "GDP growth" }, "country": { "id": "SE", "value": "Sweden" }, "countryiso3code": "SWE", "date": "2022", "value": 2.5, "unit": "", "obs_status": "", "decimal": 1 }
            ]
        ]);

        let observations = WorldBankFetcher::parse_observations(&json_data);
        // Null 2024 row is skipped, newest usable value first
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].period, "2023");
        assert_eq!(observations[0].value, 3.0);
    }

    #[test]
    fn test_parse_string_encoded_value() {
        let json_data = json!([
            { "page": 1 },
            [ { "date": "2023", "value": "55.5" } ]
        ]);

        let observations = WorldBankFetcher::parse_observations(&json_data);
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].value, 55.5);
    }

    #[test]
    fn test_parse_empty_envelope() {
        // Unknown indicator: the API answers with a single metadata element
        let json_data = json!([ { "message": [{ "id": "120", "value": "Invalid indicator" }] } ]);
        assert!(WorldBankFetcher::parse_observations(&json_data).is_empty());
    }

    #[test]
    fn test_parse_country_details() {
        let json_data = json!([
            { "page": 1, "pages": 1, "per_page": 50, "total": 1 },
            [{
                "id": "SWE", "iso2Code": "SE", "name": "Sweden",
                "region": { "id": "ECS", "iso2code": "Z7", "value": "Europe & Central Asia" },
                "capitalCity": "Stockholm"
            }]
        ]);

        let meta = WorldBankFetcher::parse_country_details(&json_data).unwrap();
        assert_eq!(meta.id, "SWE");
        assert_eq!(meta.iso2_code, "SE");
        assert_eq!(meta.name, "Sweden");
    }

    #[test]
    fn test_parse_country_details_not_found() {
        let json_data = json!([ { "message": [{ "id": "120", "value": "Invalid value" }] } ]);
        assert!(WorldBankFetcher::parse_country_details(&json_data).is_none());
    }

    #[test]
    fn test_country_list_filters_aggregates() {
        let json_data = json!([
            { "page": 1 },
            [
                { "id": "SWE", "name": "Sweden", "region": { "iso2code": "Z7", "value": "Europe & Central Asia" }, "capitalCity": "Stockholm" },
                { "id": "EUU", "name": "European Union", "region": { "iso2code": "NA", "value": "Aggregates" }, "capitalCity": "" },
                { "id": "ARG", "name": "Argentina", "region": { "iso2code": "ZJ", "value": "Latin America & Caribbean" }, "capitalCity": "Buenos Aires" }
            ]
        ]);

        let countries = WorldBankFetcher::parse_country_list(&json_data);
        assert_eq!(countries.len(), 2);
        // Sorted by name
        assert_eq!(countries[0].code, "ARG");
        assert_eq!(countries[1].code, "SWE");
    }
}
