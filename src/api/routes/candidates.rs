//! Candidate Routes
//!
//! - GET /api/v1/candidates - List the fixed candidate set

use axum::Json;

use crate::api::dto::{CandidateListResponse, CandidateResponse};
use crate::ledger::Candidate;

/// GET /api/v1/candidates
///
/// List the fixed candidate set with display metadata. The set is
/// compiled in; this endpoint exists so the frontend renders from one
/// source of truth.
pub async fn list_candidates() -> Json<CandidateListResponse> {
    let candidates: Vec<CandidateResponse> = Candidate::all()
        .iter()
        .map(|&c| CandidateResponse::from(c))
        .collect();

    Json(CandidateListResponse {
        total: candidates.len(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_candidates_is_fixed_set() {
        let Json(response) = list_candidates().await;
        assert_eq!(response.total, 3);

        let ids: Vec<&str> = response.candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["BNP", "Jamaat", "NCP"]);
    }
}
