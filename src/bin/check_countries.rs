use econ_health_analyzer::core::rate_limiter::RateLimiter;
use econ_health_analyzer::fetcher::worldbank::{CountryListCache, WorldBankFetcher};
use econ_health_analyzer::fetcher::{IndicatorSource, YearRange};
use econ_health_analyzer::indicators::registry::Registry;
use econ_health_analyzer::indicators::IndicatorKey;
use std::io::Write;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Sweeps the full country list and reports countries with no usable
/// data for the core indicators. Those show up as empty cards.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let fetcher = Arc::new(WorldBankFetcher::new());
    let cache = CountryListCache::new();

    println!("Fetching all countries...");
    let countries = cache
        .get_or_fetch(fetcher.as_ref())
        .await
        .expect("country list fetch failed")
        .to_vec();
    println!("Found {} countries. Checking data availability...", countries.len());

    // Growth, inflation and debt decide whether a card is effectively dead
    let probe_keys = [IndicatorKey::GdpGrowth, IndicatorKey::Inflation, IndicatorKey::GovDebt];

    let mut missing = Vec::new();

    // Process in chunks to avoid rate limiting
    const CHUNK_SIZE: usize = 20;
    for chunk in countries.chunks(CHUNK_SIZE) {
        let mut tasks = JoinSet::new();

        for country in chunk {
            let fetcher = fetcher.clone();
            let country = country.clone();
            tasks.spawn(async move {
                let mut has_data = false;
                for key in probe_keys {
                    let code = &Registry::get(key).code;
                    if let Ok(Some(_)) = fetcher
                        .lookup_indicator(&country.code, code, YearRange::recent())
                        .await
                    {
                        has_data = true;
                        break;
                    }
                }
                (country, has_data)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Ok((country, has_data)) = joined {
                if !has_data {
                    missing.push(country);
                }
            }
        }

        print!(".");
        let _ = std::io::stdout().flush();
        RateLimiter::wait("worldbank").await;
    }

    println!("\n\n--- Countries with NO data (Growth, Inflation, Debt) ---\n");
    if missing.is_empty() {
        println!("All countries have at least some data.");
    } else {
        for country in &missing {
            println!("- {} ({})", country.name, country.code);
        }
        println!("\nTotal: {} countries might show as empty cards.", missing.len());
    }
}
