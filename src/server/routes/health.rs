//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (shell document loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the client shell is available to serve.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.has_shell() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let shell_ok = state.has_shell();

    Json(HealthResponse {
        status: if shell_ok { "healthy" } else { "degraded" }.to_string(),
        shell: if shell_ok { "ok" } else { "empty" }.to_string(),
        routes: state.table.len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::routing::RouteTable;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_shell_not_ready() {
        let state = Arc::new(AppState::new(
            RouteTable::standard(),
            "   ",
            ServerConfig::default(),
        ));
        assert_eq!(
            readiness(State(Arc::clone(&state))).await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "degraded");
        assert_eq!(health.routes, 8);
    }
}
