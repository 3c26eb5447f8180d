use crate::common::{AppState, HealthStatus};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    response::Json,
    routing::{get, post},
    Router,
};
use latency_metrics::{MetricsAggregator, RegionReport};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyQuery {
    pub regions: Vec<String>,
    pub threshold_ms: i64,
}

/// Builds the HTTP router over an already-loaded dataset.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/latency", post(latency_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(&state))
}

async fn latency_metrics(
    State(state): State<AppState>,
    payload: Result<Json<LatencyQuery>, JsonRejection>,
) -> Result<Json<RegionReport>, ApiError> {
    let Json(query) = payload?;

    let report = MetricsAggregator::compute(&state.dataset, &query.regions, query.threshold_ms);
    debug!(
        requested = query.regions.len(),
        matched = report.len(),
        threshold_ms = query.threshold_ms,
        "computed latency report"
    );

    Ok(Json(report))
}
