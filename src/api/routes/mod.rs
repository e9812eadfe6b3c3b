//! API route handlers

pub mod candidates;
pub mod health;
pub mod tally;
pub mod vote;
