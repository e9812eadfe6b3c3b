//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ledger::{Candidate, VoteTally};

// ============================================
// VOTE DTOs
// ============================================

/// Vote request: one ballot for one candidate
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    /// Candidate identifier (one of the fixed set, e.g. "BNP")
    pub candidate: String,
}

/// Vote response: confirmation plus the updated tally
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    /// Status: "ok"
    pub status: String,
    /// Candidate the vote was counted for
    pub candidate: String,
    /// Timestamp the vote was recorded (ms since epoch)
    pub timestamp: i64,
    /// Updated counts after this vote
    pub tally: TallyResponse,
}

// ============================================
// TALLY DTOs
// ============================================

/// Current vote counts
#[derive(Debug, Serialize, Deserialize)]
pub struct TallyResponse {
    /// Counts keyed by candidate name
    pub counts: BTreeMap<String, u64>,
    /// Total votes cast
    pub total: u64,
}

impl From<&VoteTally> for TallyResponse {
    fn from(tally: &VoteTally) -> Self {
        Self {
            counts: tally
                .iter()
                .map(|(c, n)| (c.name().to_string(), n))
                .collect(),
            total: tally.total(),
        }
    }
}

// ============================================
// CANDIDATE DTOs
// ============================================

/// Candidate list response
#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub total: usize,
    pub candidates: Vec<CandidateResponse>,
}

/// One candidate with its display metadata
#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    /// Canonical identifier (what a vote request must send)
    pub id: String,
    /// English display label
    pub label_en: String,
    /// Bangla display label
    pub label_bn: String,
    /// Party logo URL
    pub logo_url: String,
    /// Accent color for buttons and chart bars
    pub color: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.name().to_string(),
            label_en: candidate.label_en().to_string(),
            label_bn: candidate.label_bn().to_string(),
            logo_url: candidate.logo_url().to_string(),
            color: candidate.color().to_string(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Ledger status: "ok" or "error"
    pub ledger: String,
    /// Total votes currently recorded
    pub total_votes: u64,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
