//! Vote Route
//!
//! Endpoint for casting a vote.
//!
//! - POST /api/v1/votes - Record one vote for a candidate

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{TallyResponse, VoteRequest, VoteResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::ledger::Candidate;

/// POST /api/v1/votes
///
/// Record a single vote. The candidate string is validated against the
/// fixed set before the ledger is touched; the response carries the
/// tally as it stands after this vote so the page can redraw without a
/// second request.
pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoteRequest>,
) -> ApiResult<(StatusCode, Json<VoteResponse>)> {
    let candidate = parse_candidate(&req)?;

    let tally = state.ledger.record_vote(candidate).await?;
    let timestamp = Utc::now().timestamp_millis();

    tracing::info!(%candidate, total = tally.total(), "Vote cast");

    Ok((
        StatusCode::CREATED,
        Json(VoteResponse {
            status: "ok".to_string(),
            candidate: candidate.name().to_string(),
            timestamp,
            tally: TallyResponse::from(&tally),
        }),
    ))
}

/// Validate the request and resolve the candidate
fn parse_candidate(req: &VoteRequest) -> ApiResult<Candidate> {
    if req.candidate.trim().is_empty() {
        return Err(ApiError::Validation(
            "Candidate name cannot be empty".to_string(),
        ));
    }

    let candidate: Candidate = req.candidate.parse()?;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidate_valid() {
        let req = VoteRequest {
            candidate: "BNP".to_string(),
        };
        assert_eq!(parse_candidate(&req).unwrap(), Candidate::Bnp);
    }

    #[test]
    fn test_parse_candidate_empty() {
        let req = VoteRequest {
            candidate: "  ".to_string(),
        };
        assert!(matches!(
            parse_candidate(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_candidate_outside_fixed_set() {
        let req = VoteRequest {
            candidate: "WriteIn".to_string(),
        };
        assert!(matches!(parse_candidate(&req), Err(ApiError::Ledger(_))));
    }
}
