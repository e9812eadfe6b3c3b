//! Vote Ledger
//!
//! The persistence boundary for the poll:
//! - Write path: vote → in-memory tally → atomic file replace
//! - Read path: snapshot of the in-memory tally
//!
//! The tally is guarded by a Tokio `RwLock` so there is exactly one
//! writer per process, and the persisted file is replaced via
//! write-temp-then-rename so a reader never observes a torn write.

pub mod candidate;
pub mod error;
pub mod store;
pub mod tally;

pub use candidate::Candidate;
pub use error::{LedgerError, LedgerResult};
pub use store::{LedgerConfig, TallyStore, VoteLedger};
pub use tally::VoteTally;
