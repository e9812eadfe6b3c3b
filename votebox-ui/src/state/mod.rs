//! State Management
//!
//! Global application state for the poll page.

pub mod global;

pub use global::{provide_global_state, Candidate, GlobalState, Language, Tally};
