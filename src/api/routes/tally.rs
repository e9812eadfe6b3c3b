//! Tally Route
//!
//! - GET /api/v1/tally - Current vote counts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::TallyResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/tally
///
/// Return the live vote count for every candidate.
pub async fn get_tally(State(state): State<Arc<AppState>>) -> ApiResult<Json<TallyResponse>> {
    let tally = state.ledger.snapshot().await;
    Ok(Json(TallyResponse::from(&tally)))
}
