//! Candidate definitions
//!
//! The poll runs over a fixed, closed set of candidates. The set is an
//! enum rather than free-form strings so that an identifier outside the
//! set is rejected at the parse boundary and can never create a tally
//! key. Display metadata (bilingual labels, logo, accent color) is
//! static and compiled in.

use serde::{Deserialize, Serialize};

use crate::ledger::error::LedgerError;

/// One of the fixed options a user may vote for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Candidate {
    #[serde(rename = "BNP")]
    Bnp,
    #[serde(rename = "Jamaat")]
    Jamaat,
    #[serde(rename = "NCP")]
    Ncp,
}

impl Candidate {
    /// All candidates, in display order
    pub fn all() -> &'static [Candidate] {
        &[Candidate::Bnp, Candidate::Jamaat, Candidate::Ncp]
    }

    /// Canonical identifier used in the persisted file and the API
    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Bnp => "BNP",
            Candidate::Jamaat => "Jamaat",
            Candidate::Ncp => "NCP",
        }
    }

    /// English display label
    pub fn label_en(&self) -> &'static str {
        match self {
            Candidate::Bnp => "BNP",
            Candidate::Jamaat => "Jamaat e Islami",
            Candidate::Ncp => "NCP",
        }
    }

    /// Bangla display label
    pub fn label_bn(&self) -> &'static str {
        match self {
            Candidate::Bnp => "বিএনপি",
            Candidate::Jamaat => "জামায়াতে ইসলামী",
            Candidate::Ncp => "এনসিপি",
        }
    }

    /// Public URL of the party logo
    pub fn logo_url(&self) -> &'static str {
        match self {
            Candidate::Bnp => {
                "https://upload.wikimedia.org/wikipedia/en/f/f0/Bangladesh_Nationalist_Party_logo.jpeg"
            }
            Candidate::Jamaat => {
                "https://upload.wikimedia.org/wikipedia/commons/0/04/Bangladesh_Jamaat-e-_Islami_Logo_%28cropped%29.png"
            }
            Candidate::Ncp => "https://upload.wikimedia.org/wikipedia/en/0/0d/NCP_LOGO.png",
        }
    }

    /// Accent color for the vote button and chart bar
    pub fn color(&self) -> &'static str {
        match self {
            Candidate::Bnp => "#3498db",
            Candidate::Jamaat => "#2ecc71",
            Candidate::Ncp => "#e74c3c",
        }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Candidate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bnp" => Ok(Candidate::Bnp),
            "jamaat" => Ok(Candidate::Jamaat),
            "ncp" => Ok(Candidate::Ncp),
            other => Err(LedgerError::UnknownCandidate(other.to_string())),
        }
    }
}
