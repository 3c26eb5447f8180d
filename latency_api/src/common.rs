use latency_core::TelemetryDataset;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub start_time: Instant,
    pub dataset: Arc<TelemetryDataset>,
}

impl AppState {
    pub fn new(dataset: TelemetryDataset) -> Self {
        Self {
            start_time: Instant::now(),
            dataset: Arc::new(dataset),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: u64,
    pub records: usize,
    pub regions: usize,
}

impl HealthStatus {
    pub fn healthy(state: &AppState) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now(),
            uptime_seconds: state.start_time.elapsed().as_secs(),
            records: state.dataset.len(),
            regions: state.dataset.region_count(),
        }
    }
}
