use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::contracts::{Code, Journal, Ledger, LoadReport, SaveError};
use crate::journal::compaction::{compact, CompactionConfig};
use crate::journal::read_journal;

/// Append-only journal: each record appends one line; a periodic compaction
/// rewrites the file from the ledger.
///
/// Appends that fail are kept in a backlog and retried before the next
/// code, so a successful `record` always leaves the file's parsed set equal
/// to the ledger.
pub struct AppendJournal {
    path: PathBuf,
    config: CompactionConfig,
    /// Codes whose append failed; flushed ahead of the next one.
    backlog: Vec<Code>,
    appends_since_compaction: usize,
}

impl AppendJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, CompactionConfig::default())
    }

    pub fn with_config(path: impl Into<PathBuf>, config: CompactionConfig) -> Self {
        Self {
            path: path.into(),
            config,
            backlog: Vec::new(),
            appends_since_compaction: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }

    fn append_lines(&self, codes: &[Code]) -> Result<(), SaveError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SaveError::Io(e.to_string()))?;

        let mut buf = String::with_capacity(codes.len() * 9);
        for code in codes {
            let _ = writeln!(buf, "{code}");
        }
        file.write_all(buf.as_bytes())
            .map_err(|e| SaveError::Io(e.to_string()))
    }
}

impl Journal for AppendJournal {
    fn load(&mut self) -> (Ledger, LoadReport) {
        read_journal(&self.path)
    }

    fn record(&mut self, code: Code, ledger: &Ledger) -> Result<(), SaveError> {
        self.backlog.push(code);
        let pending = std::mem::take(&mut self.backlog);
        if let Err(e) = self.append_lines(&pending) {
            // A torn append may leave partial lines behind; the loader
            // skips them and the retry re-appends the whole batch.
            self.backlog = pending;
            return Err(e);
        }
        self.appends_since_compaction += pending.len();

        if self.config.due(self.appends_since_compaction) {
            match compact(&self.path, ledger, self.appends_since_compaction) {
                Ok(result) => {
                    self.appends_since_compaction = 0;
                    tracing::info!(
                        folded = result.appends_folded,
                        retained = result.codes_retained,
                        "journal compacted"
                    );
                }
                Err(e) => {
                    // The appended lines are already durable; try again
                    // after the next append.
                    tracing::warn!(error = %e, "journal compaction failed");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn code(raw: u32) -> Code {
        Code::new(raw).unwrap()
    }

    fn record_raw(journal: &mut AppendJournal, ledger: &mut Ledger, raw: u32) {
        let c = code(raw);
        ledger.insert(c);
        journal.record(c, ledger).unwrap();
    }

    #[test]
    fn records_append_one_line_each() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codes.txt");
        let mut journal = AppendJournal::with_config(&path, CompactionConfig { every_appends: 0 });
        let mut ledger = Ledger::new();

        record_raw(&mut journal, &mut ledger, 10000001);
        record_raw(&mut journal, &mut ledger, 10000002);
        record_raw(&mut journal, &mut ledger, 10000003);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "10000001\n10000002\n10000003\n");
    }

    #[test]
    fn compaction_rewrites_to_one_line_per_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codes.txt");
        // Pre-existing damage that compaction should clear out.
        std::fs::write(&path, "garbage\n").unwrap();

        let mut journal = AppendJournal::with_config(&path, CompactionConfig { every_appends: 3 });
        let mut ledger = Ledger::new();
        for raw in [20000001, 20000002, 20000003] {
            record_raw(&mut journal, &mut ledger, raw);
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        let (reloaded, report) = journal.load();
        assert!(report.is_clean());
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn failed_append_lands_in_backlog_and_is_retried() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope").join("codes.txt");
        let mut journal = AppendJournal::with_config(&missing, CompactionConfig { every_appends: 0 });

        let mut ledger = Ledger::new();
        let first = code(30000001);
        ledger.insert(first);
        assert!(journal.record(first, &ledger).is_err());
        assert_eq!(journal.backlog_len(), 1);

        // The directory shows up; the next record flushes both codes.
        std::fs::create_dir_all(missing.parent().unwrap()).unwrap();
        let second = code(30000002);
        ledger.insert(second);
        journal.record(second, &ledger).unwrap();
        assert_eq!(journal.backlog_len(), 0);

        let contents = std::fs::read_to_string(&missing).unwrap();
        assert_eq!(contents, "30000001\n30000002\n");
    }

    #[test]
    fn load_recovers_appended_codes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codes.txt");

        {
            let mut journal = AppendJournal::new(&path);
            let mut ledger = Ledger::new();
            for raw in 40000001..40000021 {
                record_raw(&mut journal, &mut ledger, raw);
            }
        }

        let mut journal = AppendJournal::new(&path);
        let (ledger, report) = journal.load();
        assert!(report.is_clean());
        assert_eq!(ledger.len(), 20);
    }
}
