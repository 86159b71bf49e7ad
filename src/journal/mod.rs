mod append;
mod compaction;
mod snapshot;

pub use append::AppendJournal;
pub use compaction::{CompactionConfig, CompactionResult};
pub use snapshot::SnapshotJournal;

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::contracts::{Code, Ledger, LoadError, LoadReport, SaveError};

/// Parses a journal file into a ledger, fail-soft.
///
/// Duplicate lines collapse into one ledger entry; blank lines are ignored.
pub(crate) fn read_journal(path: &Path) -> (Ledger, LoadReport) {
    let mut ledger = Ledger::new();
    let mut report = LoadReport::default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no journal yet, starting empty");
            return (ledger, report);
        }
        Err(e) => {
            report.failure = Some(LoadError::Io(e.to_string()));
            return (ledger, report);
        }
    };

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                report.failure = Some(LoadError::Io(e.to_string()));
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Code>() {
            Ok(code) => {
                if ledger.insert(code) {
                    report.recovered += 1;
                }
            }
            Err(e) => {
                tracing::warn!(line = %line, error = %e, "skipping journal line");
                report.skipped += 1;
            }
        }
    }

    (ledger, report)
}

/// Rewrites the journal to exactly one line per ledger entry.
pub(crate) fn write_full(path: &Path, ledger: &Ledger) -> Result<(), SaveError> {
    let mut contents = String::with_capacity(ledger.len() * 9);
    for code in ledger.iter() {
        let _ = writeln!(contents, "{code}");
    }
    std::fs::write(path, contents).map_err(|e| SaveError::Io(e.to_string()))
}
