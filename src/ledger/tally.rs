//! The vote tally
//!
//! A mapping from candidate to accumulated vote count. Every candidate
//! in the fixed set is always present; the only mutation is
//! increment-by-one. The JSON form is a flat object mapping candidate
//! name to count, e.g. `{"BNP": 3, "Jamaat": 1, "NCP": 0}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ledger::candidate::Candidate;

/// Vote counts for the fixed candidate set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VoteTally {
    counts: BTreeMap<Candidate, u64>,
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl VoteTally {
    /// Zero-initialized tally with every candidate present
    pub fn zeroed() -> Self {
        Self {
            counts: Candidate::all().iter().map(|&c| (c, 0)).collect(),
        }
    }

    /// Fill in any candidate missing from a deserialized tally.
    ///
    /// Keeps the all-keys-present invariant even when the persisted
    /// file predates a candidate or was edited by hand.
    pub fn normalize(&mut self) {
        for &candidate in Candidate::all() {
            self.counts.entry(candidate).or_insert(0);
        }
    }

    /// Current count for a candidate
    pub fn count(&self, candidate: Candidate) -> u64 {
        self.counts.get(&candidate).copied().unwrap_or(0)
    }

    /// Bump a candidate's count by exactly one
    pub fn increment(&mut self, candidate: Candidate) {
        *self.counts.entry(candidate).or_insert(0) += 1;
    }

    /// Total votes cast across all candidates
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate counts in display order
    pub fn iter(&self) -> impl Iterator<Item = (Candidate, u64)> + '_ {
        Candidate::all().iter().map(move |&c| (c, self.count(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_all_candidates() {
        let tally = VoteTally::zeroed();
        for &c in Candidate::all() {
            assert_eq!(tally.count(c), 0);
        }
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_increment_bumps_only_target() {
        let mut tally = VoteTally::zeroed();
        tally.increment(Candidate::Jamaat);

        assert_eq!(tally.count(Candidate::Jamaat), 1);
        assert_eq!(tally.count(Candidate::Bnp), 0);
        assert_eq!(tally.count(Candidate::Ncp), 0);
    }

    #[test]
    fn test_vote_sequence() {
        let mut tally = VoteTally::zeroed();
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Ncp);

        assert_eq!(tally.count(Candidate::Bnp), 2);
        assert_eq!(tally.count(Candidate::Jamaat), 0);
        assert_eq!(tally.count(Candidate::Ncp), 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_json_shape() {
        let mut tally = VoteTally::zeroed();
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Jamaat);

        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"BNP":3,"Jamaat":1,"NCP":0}"#);
    }

    #[test]
    fn test_deserialize_partial_then_normalize() {
        let mut tally: VoteTally = serde_json::from_str(r#"{"BNP": 5}"#).unwrap();
        tally.normalize();

        assert_eq!(tally.count(Candidate::Bnp), 5);
        assert_eq!(tally.count(Candidate::Jamaat), 0);
        assert_eq!(tally.count(Candidate::Ncp), 0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_candidate() {
        let result = serde_json::from_str::<VoteTally>(r#"{"BNP": 1, "AwamiLeague": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative_count() {
        let result = serde_json::from_str::<VoteTally>(r#"{"BNP": -1}"#);
        assert!(result.is_err());
    }
}
