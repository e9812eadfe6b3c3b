//! Votebox REST API
//!
//! HTTP API layer for the voting board, built with Axum.
//!
//! # Endpoints
//!
//! ## Poll
//! - `GET /api/v1/candidates` - The fixed candidate set with labels
//! - `GET /api/v1/tally` - Current vote counts
//! - `POST /api/v1/votes` - Cast a vote
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use votebox::api::{serve, ApiConfig, AppState};
//! use votebox::ledger::{LedgerConfig, TallyStore, VoteLedger};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = TallyStore::new(&LedgerConfig::default());
//!     let ledger = Arc::new(VoteLedger::open(store)?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(ledger, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/candidates", get(routes::candidates::list_candidates))
        .route("/tally", get(routes::tally::get_tally))
        .route("/votes", post(routes::vote::cast_vote));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Kiosk deployment; tighten via cors_origins if exposed
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Votebox API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Votebox API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{LedgerConfig, TallyStore, VoteLedger};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = TallyStore::new(&LedgerConfig::new(dir.path()));
        let ledger = Arc::new(VoteLedger::open(store).unwrap());
        let api_config = ApiConfig::default();

        let state = AppState::new(ledger, api_config);
        let router = build_router(state);

        (router, dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_candidates() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/candidates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 3);
        assert_eq!(json["candidates"][0]["id"], "BNP");
    }

    #[tokio::test]
    async fn test_tally_starts_at_zero() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tally")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 0);
        assert_eq!(json["counts"]["BNP"], 0);
        assert_eq!(json["counts"]["Jamaat"], 0);
        assert_eq!(json["counts"]["NCP"], 0);
    }

    #[tokio::test]
    async fn test_cast_vote() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/votes")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"candidate": "Jamaat"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["candidate"], "Jamaat");
        assert_eq!(json["tally"]["counts"]["Jamaat"], 1);
        assert_eq!(json["tally"]["total"], 1);
    }

    #[tokio::test]
    async fn test_cast_vote_unknown_candidate() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/votes")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"candidate": "WriteIn"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "UNKNOWN_CANDIDATE");
    }

    #[tokio::test]
    async fn test_cast_vote_invalid_json() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/votes")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_votes_survive_restart() {
        let dir = tempdir().unwrap();
        let config = LedgerConfig::new(dir.path());

        // First session: cast two votes
        {
            let ledger = Arc::new(VoteLedger::open(TallyStore::new(&config)).unwrap());
            let app = build_router(AppState::new(ledger, ApiConfig::default()));

            for _ in 0..2 {
                let response = app
                    .clone()
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/api/v1/votes")
                            .header("Content-Type", "application/json")
                            .body(Body::from(r#"{"candidate": "NCP"}"#))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::CREATED);
            }
        }

        // Second session: tally picks up where it left off
        {
            let ledger = Arc::new(VoteLedger::open(TallyStore::new(&config)).unwrap());
            let app = build_router(AppState::new(ledger, ApiConfig::default()));

            let response = app
                .oneshot(
                    Request::builder()
                        .uri("/api/v1/tally")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            let json = body_json(response).await;
            assert_eq!(json["counts"]["NCP"], 2);
            assert_eq!(json["total"], 2);
        }
    }
}
