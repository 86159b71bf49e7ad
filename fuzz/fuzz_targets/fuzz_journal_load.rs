#![no_main]

use libfuzzer_sys::fuzz_target;
use tempfile::TempDir;

use codemint::contracts::Journal;
use codemint::journal::SnapshotJournal;

fuzz_target!(|data: &[u8]| {
    // Fuzz journal loading with arbitrary file contents - the loader must
    // skip damage and never panic.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("codes.txt");
    std::fs::write(&path, data).unwrap();

    let mut journal = SnapshotJournal::new(&path);
    let (ledger, report) = journal.load();

    // Every recovered line became exactly one ledger entry.
    assert_eq!(ledger.len(), report.recovered);
});
