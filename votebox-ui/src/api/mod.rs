//! API Layer
//!
//! HTTP client for the Votebox REST API.

pub mod client;

pub use client::{
    check_health, fetch_candidates, fetch_tally, get_api_base, submit_vote, DEFAULT_API_BASE,
};
