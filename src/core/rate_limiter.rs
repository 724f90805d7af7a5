use std::time::Duration;
use tokio::time::sleep;
use rand::Rng;

pub struct RateLimiter;

impl RateLimiter {
    /// Wait appropriate duration based on the data source
    pub async fn wait(source: &str) {
        match source.to_uppercase().as_str() {
            "WORLDBANK" => {
                // The API is lenient, but full-list sweeps fire hundreds
                // of requests. Jitter keeps the bursts apart.
                let delay = {
                    let mut rng = rand::thread_rng();
                    rng.gen_range(250..750)
                };
                sleep(Duration::from_millis(delay)).await;
            }
            _ => {
                // Default minimal safe delay
                sleep(Duration::from_millis(100)).await;
            }
        }
    }
}
