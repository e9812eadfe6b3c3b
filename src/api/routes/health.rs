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
/// Liveness probe. Returns 200 if the process is alive.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Readiness probe. Checks the ledger's data directory is still
/// writable, since every vote performs a synchronous save.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_ledger_health(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let ledger_ok = check_ledger_health(&state);
    let tally = state.ledger.snapshot().await;

    Json(HealthResponse {
        status: if ledger_ok { "healthy" } else { "unhealthy" }.to_string(),
        ledger: if ledger_ok { "ok" } else { "error" }.to_string(),
        total_votes: tally.total(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Check that the tally file's directory exists and is writable
fn check_ledger_health(state: &AppState) -> bool {
    let Some(dir) = state.ledger.path().parent() else {
        return false;
    };

    dir.metadata()
        .map(|m| m.is_dir() && !m.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
