use std::path::{Path, PathBuf};

use crate::contracts::{Code, Journal, Ledger, LoadReport, SaveError};
use crate::journal::{read_journal, write_full};

/// Journal that mirrors the ledger by rewriting the whole file on every
/// record.
///
/// Cost is O(ledger) per call, which is fine at the call volumes this store
/// is meant for; switch to [`AppendJournal`](crate::journal::AppendJournal)
/// when it is not.
pub struct SnapshotJournal {
    path: PathBuf,
}

impl SnapshotJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Journal for SnapshotJournal {
    fn load(&mut self) -> (Ledger, LoadReport) {
        read_journal(&self.path)
    }

    fn record(&mut self, _code: Code, ledger: &Ledger) -> Result<(), SaveError> {
        write_full(&self.path, ledger)
    }
}
