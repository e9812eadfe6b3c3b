//! HTTP API Client
//!
//! Functions for communicating with the Votebox REST API.

use gloo_net::http::Request;

use crate::state::global::{Candidate, Tally};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8086/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("votebox_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct CandidateListResponse {
    pub total: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, serde::Deserialize)]
pub struct VoteResponse {
    pub status: String,
    pub candidate: String,
    pub timestamp: i64,
    pub tally: Tally,
}

#[derive(Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ledger: String,
    pub total_votes: u64,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorDetail {
    #[allow(dead_code)]
    code: String,
    message: String,
}

async fn error_message(response: gloo_net::http::Response) -> String {
    response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error.message)
        .unwrap_or_else(|_| "Unknown error".to_string())
}

// ============ API Functions ============

/// Fetch the candidate set
pub async fn fetch_candidates() -> Result<Vec<Candidate>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/candidates", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let result: CandidateListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.candidates)
}

/// Fetch the current tally
pub async fn fetch_tally() -> Result<Tally, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/tally", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Cast a vote. The response carries the updated tally.
pub async fn submit_vote(candidate_id: &str) -> Result<VoteResponse, String> {
    #[derive(serde::Serialize)]
    struct VoteRequest {
        candidate: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/votes", api_base))
        .json(&VoteRequest {
            candidate: candidate_id.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Check API health
pub async fn check_health() -> Result<HealthResponse, String> {
    let api_base = get_api_base();
    let health_url = api_base.replace("/api/v1", "/health");

    let response = Request::get(&health_url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("API is not healthy".to_string());
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
