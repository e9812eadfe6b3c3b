//! Ledger error types
//!
//! Defines all errors that can occur at the persistence boundary.

use thiserror::Error;

/// Errors that can occur in the vote ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    /// I/O operation failed (a failed save surfaces here synchronously)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted tally exists but cannot be parsed
    #[error("Corrupt tally file: {0}")]
    Corrupt(String),

    /// Vote for a name outside the fixed candidate set
    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::UnknownCandidate("AwamiLeague".to_string());
        assert_eq!(err.to_string(), "Unknown candidate: AwamiLeague");

        let err = LedgerError::Corrupt("not json".to_string());
        assert_eq!(err.to_string(), "Corrupt tally file: not json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
