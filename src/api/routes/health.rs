//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once there is something to show: at least one city profile.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.dataset.cities.is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset_ok = state.dataset_issues == 0;

    Json(HealthResponse {
        status: if dataset_ok { "healthy" } else { "degraded" }.to_string(),
        dataset: if dataset_ok { "ok" } else { "issues" }.to_string(),
        providers: state.dataset.providers.len(),
        articles: state.dataset.articles.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::dataset::Dataset;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_needs_cities() {
        let empty = Arc::new(AppState::new(Dataset::default(), ServerConfig::default()));
        assert_eq!(
            readiness(State(empty)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_full_health_reports_degraded_dataset() {
        let mut dataset = Dataset::bundled().unwrap();
        dataset.providers[0].category = 404;
        let state = Arc::new(AppState::new(dataset, ServerConfig::default()));

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "degraded");
        assert_eq!(health.dataset, "issues");
    }
}
