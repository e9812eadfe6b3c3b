//! Tally persistence and the single-writer ledger
//!
//! `TallyStore` owns the file format: a single JSON object at
//! `<data_dir>/tally.json`. A missing file reads as the zero tally; an
//! unparseable file is a hard `Corrupt` error rather than a silent
//! reset. Saves replace the file atomically (write a sibling temp
//! file, then rename) so a crash mid-write never leaves a torn tally.
//!
//! `VoteLedger` is the process-wide single writer: the in-memory tally
//! sits behind a Tokio `RwLock`, and `record_vote` persists the new
//! tally before committing it to memory, so memory never runs ahead of
//! disk.

use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::ledger::candidate::Candidate;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::tally::VoteTally;

/// Configuration for the ledger
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Root directory for persisted state
    pub data_dir: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("votebox_data"),
        }
    }
}

impl LedgerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get path to the persisted tally file
    pub fn tally_path(&self) -> PathBuf {
        self.data_dir.join("tally.json")
    }
}

/// File-backed store for the tally
#[derive(Debug, Clone)]
pub struct TallyStore {
    path: PathBuf,
}

impl TallyStore {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            path: config.tally_path(),
        }
    }

    /// Open a store on an explicit file path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted tally.
    ///
    /// A missing file is the empty state and yields the zero tally. A
    /// present but unparseable file is `Corrupt`; a well-formed file
    /// that merely omits candidates is normalized with zeros.
    pub fn load(&self) -> LedgerResult<VoteTally> {
        if !self.path.exists() {
            return Ok(VoteTally::zeroed());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut tally: VoteTally = serde_json::from_str(&content)
            .map_err(|e| LedgerError::Corrupt(format!("{:?}: {}", self.path, e)))?;
        tally.normalize();

        Ok(tally)
    }

    /// Serialize the full tally and atomically replace the file.
    ///
    /// The temp file lives in the same directory so the rename stays
    /// on one filesystem. A failed write surfaces to the caller; no
    /// retries.
    pub fn save(&self, tally: &VoteTally) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(tally)?;

        let tmp_path = self.path.with_file_name(format!(
            "{}.tmp",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "tally.json".to_string())
        ));

        std::fs::write(&tmp_path, content)?;
        std::fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

/// The single-writer vote ledger
pub struct VoteLedger {
    store: TallyStore,
    tally: RwLock<VoteTally>,
}

impl VoteLedger {
    /// Open the ledger, reading any persisted tally.
    ///
    /// Fails with `Corrupt` if the file exists but cannot be parsed;
    /// the operator decides whether to fix or delete it.
    pub fn open(store: TallyStore) -> LedgerResult<Self> {
        if let Some(parent) = store.path().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tally = store.load()?;

        tracing::info!(
            path = ?store.path(),
            total_votes = tally.total(),
            "Vote ledger opened"
        );

        Ok(Self {
            store,
            tally: RwLock::new(tally),
        })
    }

    /// Record one vote for a candidate and persist the new tally.
    ///
    /// Persist-then-commit: if the save fails, the in-memory tally is
    /// left unchanged and the error surfaces to the caller.
    pub async fn record_vote(&self, candidate: Candidate) -> LedgerResult<VoteTally> {
        let mut current = self.tally.write().await;

        let mut next = current.clone();
        next.increment(candidate);

        self.store.save(&next)?;
        *current = next.clone();

        tracing::debug!(%candidate, count = next.count(candidate), "Vote recorded");

        Ok(next)
    }

    /// Current tally snapshot
    pub async fn snapshot(&self) -> VoteTally {
        self.tally.read().await.clone()
    }

    /// Path of the persisted tally file
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store(dir: &tempfile::TempDir) -> TallyStore {
        TallyStore::new(&LedgerConfig::new(dir.path()))
    }

    #[test]
    fn test_load_missing_file_is_zero_tally() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        let tally = store.load().unwrap();
        assert_eq!(
            serde_json::to_string(&tally).unwrap(),
            r#"{"BNP":0,"Jamaat":0,"NCP":0}"#
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        let mut tally = VoteTally::zeroed();
        tally.increment(Candidate::Bnp);
        tally.increment(Candidate::Ncp);
        tally.increment(Candidate::Ncp);

        store.save(&tally).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, tally);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        store.save(&VoteTally::zeroed()).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["tally.json"]);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        std::fs::write(store.path(), "not json at all").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, LedgerError::Corrupt(_)));
    }

    #[test]
    fn test_load_partial_file_zero_fills() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        std::fs::write(store.path(), r#"{"Jamaat": 4}"#).unwrap();

        let tally = store.load().unwrap();
        assert_eq!(tally.count(Candidate::Jamaat), 4);
        assert_eq!(tally.count(Candidate::Bnp), 0);
        assert_eq!(tally.count(Candidate::Ncp), 0);
    }

    #[tokio::test]
    async fn test_record_vote_persists_each_mutation() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let ledger = VoteLedger::open(store.clone()).unwrap();

        ledger.record_vote(Candidate::Bnp).await.unwrap();
        ledger.record_vote(Candidate::Bnp).await.unwrap();
        ledger.record_vote(Candidate::Ncp).await.unwrap();

        let snapshot = ledger.snapshot().await;
        assert_eq!(snapshot.count(Candidate::Bnp), 2);
        assert_eq!(snapshot.count(Candidate::Jamaat), 0);
        assert_eq!(snapshot.count(Candidate::Ncp), 1);

        // On-disk state matches memory after every mutation
        let on_disk = store.load().unwrap();
        assert_eq!(on_disk, snapshot);
    }

    #[tokio::test]
    async fn test_resume_from_existing_tally() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(store.path(), r#"{"BNP": 5, "Jamaat": 2, "NCP": 7}"#).unwrap();

        let ledger = VoteLedger::open(store.clone()).unwrap();
        let tally = ledger.record_vote(Candidate::Jamaat).await.unwrap();

        assert_eq!(tally.count(Candidate::Bnp), 5);
        assert_eq!(tally.count(Candidate::Jamaat), 3);
        assert_eq!(tally.count(Candidate::Ncp), 7);

        let on_disk = store.load().unwrap();
        assert_eq!(on_disk, tally);
    }

    #[tokio::test]
    async fn test_open_corrupt_tally_refuses() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);

        std::fs::write(store.path(), "{\"BNP\": ").unwrap();

        assert!(matches!(
            VoteLedger::open(store),
            Err(LedgerError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_votes_all_counted() {
        let dir = tempdir().unwrap();
        let store = test_store(&dir);
        let ledger = std::sync::Arc::new(VoteLedger::open(store.clone()).unwrap());

        let mut handles = Vec::new();
        for _ in 0..20 {
            let ledger = std::sync::Arc::clone(&ledger);
            handles.push(tokio::spawn(async move {
                ledger.record_vote(Candidate::Ncp).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(ledger.snapshot().await.count(Candidate::Ncp), 20);
        assert_eq!(store.load().unwrap().count(Candidate::Ncp), 20);
    }
}
