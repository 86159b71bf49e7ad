use crate::contracts::{Code, Ledger, LoadError, SaveError};

/// Durable mirror of the ledger.
///
/// # Invariants
/// - After a successful `record`, the journal's parsed set equals the ledger
/// - Loading is fail-soft: a missing or damaged journal degrades the report,
///   never the caller
pub trait Journal {
    /// Reads the journal into a fresh ledger.
    ///
    /// Malformed or out-of-range lines are skipped and counted. A read
    /// failure mid-stream stops the load; everything read so far is kept
    /// and the failure is carried in the report.
    fn load(&mut self) -> (Ledger, LoadReport);

    /// Makes `code` durable. The ledger already contains it.
    fn record(&mut self, code: Code, ledger: &Ledger) -> Result<(), SaveError>;
}

/// Outcome of a journal load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Codes recovered into the ledger.
    pub recovered: usize,
    /// Lines skipped because they did not parse as an 8-digit code.
    pub skipped: usize,
    /// Read failure that stopped the load early, if any.
    pub failure: Option<LoadError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.failure.is_none()
    }
}
