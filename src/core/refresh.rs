use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tokio::task::JoinSet;
use tracing::debug;

use crate::models::HealthRecord;
use crate::HealthService;

/// Drives multi-country fetch cycles with last-requester-wins
/// semantics. Every refresh takes a new generation number; results
/// arriving for an older generation are discarded instead of applied,
/// so a slow early request can never overwrite a newer one. In-flight
/// network calls are not cancelled, only their results dropped.
#[derive(Clone)]
pub struct RefreshCoordinator {
    service: Arc<HealthService>,
    generation: Arc<AtomicU64>,
    records: Arc<RwLock<HashMap<String, HealthRecord>>>,
}

impl RefreshCoordinator {
    pub fn new(service: HealthService) -> Self {
        Self {
            service: Arc::new(service),
            generation: Arc::new(AtomicU64::new(0)),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetches all requested countries in parallel and applies whatever
    /// still belongs to the current generation. Returns this refresh's
    /// generation number.
    pub async fn refresh(&self, codes: &[String]) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(generation, count = codes.len(), "refresh started");

        let mut tasks = JoinSet::new();
        for code in codes {
            let service = self.service.clone();
            let code = code.clone();
            tasks.spawn(async move {
                let record = service.get_health_record(&code).await;
                (code, record)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            let Ok((code, record)) = joined else { continue };

            // Checked under the write lock so a newer refresh can't
            // interleave between check and insert.
            let mut records = self.records.write().await;
            if self.generation.load(Ordering::SeqCst) == generation {
                records.insert(code, record);
            } else {
                debug!(%code, generation, "discarding stale result");
            }
        }

        generation
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn record(&self, code: &str) -> Option<HealthRecord> {
        self.records.read().await.get(code).cloned()
    }

    /// Snapshot of all applied records.
    pub async fn records(&self) -> HashMap<String, HealthRecord> {
        self.records.read().await.clone()
    }
}
