use std::path::Path;

use crate::contracts::{Ledger, SaveError};
use crate::journal::write_full;

/// Configuration for append-journal compaction.
#[derive(Debug, Clone)]
pub struct CompactionConfig {
    /// Successful appends between compactions. 0 disables compaction.
    pub every_appends: usize,
}

impl Default for CompactionConfig {
    fn default() -> Self {
        Self {
            every_appends: 1024,
        }
    }
}

impl CompactionConfig {
    pub(crate) fn due(&self, appends_since: usize) -> bool {
        self.every_appends > 0 && appends_since >= self.every_appends
    }
}

/// Result of a compaction operation.
#[derive(Debug, Clone)]
pub struct CompactionResult {
    /// Appended lines folded into the rewrite.
    pub appends_folded: usize,
    /// Codes in the rewritten journal.
    pub codes_retained: usize,
}

/// Rewrites the journal file from the ledger, dropping duplicate and
/// damaged lines accumulated since the last rewrite.
pub(crate) fn compact(
    path: &Path,
    ledger: &Ledger,
    appends_folded: usize,
) -> Result<CompactionResult, SaveError> {
    write_full(path, ledger)?;
    Ok(CompactionResult {
        appends_folded,
        codes_retained: ledger.len(),
    })
}
