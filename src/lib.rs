//! # Votebox
//!
//! Kiosk voting board - a single-page poll backed by a file-persisted
//! vote ledger, with a REST API and a WASM frontend.
//!
//! ## Features
//!
//! - **Fixed candidate set**: three parties, compiled in
//! - **Durable tally**: every vote is persisted before it is counted
//! - **Atomic saves**: write-temp-then-rename, never a torn file
//! - **Single writer**: one in-process ledger serializes all votes
//! - **Bilingual**: English and Bangla display labels
//!
//! ## Modules
//!
//! - [`ledger`]: Candidate set, tally, and file-backed persistence
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use votebox::ledger::{Candidate, LedgerConfig, TallyStore, VoteLedger};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open the ledger, reading any persisted tally
//!     let store = TallyStore::new(&LedgerConfig::default());
//!     let ledger = VoteLedger::open(store)?;
//!
//!     // Cast a vote; the new tally is on disk before this returns
//!     let tally = ledger.record_vote(Candidate::Ncp).await?;
//!
//!     println!("NCP now has {} votes", tally.count(Candidate::Ncp));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod ledger;

// Re-export top-level types for convenience
pub use ledger::{
    Candidate, LedgerConfig, LedgerError, LedgerResult, TallyStore, VoteLedger, VoteTally,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, LedgerConfig as ConfigLedgerConfig, ApiConfig as ConfigApiConfig,
    LoggingConfig,
};
