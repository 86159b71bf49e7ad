use crate::contracts::{CandidateSource, Code, Journal, Ledger, LoadReport, MintError};

/// Configuration for the mint's rejection-sampling loop.
#[derive(Debug, Clone)]
pub struct MintConfig {
    /// Maximum candidate draws per call before giving up.
    ///
    /// The universe holds 90M codes, so collisions stay rare until the
    /// ledger is a large fraction of it; the cap exists so a nearly full
    /// ledger fails loudly instead of spinning.
    pub max_attempts: usize,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self { max_attempts: 1_000 }
    }
}

/// Whether an issued code has reached the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// The journal matches the ledger.
    Synced,
    /// The ledger is ahead of the journal. A later successful record
    /// heals this.
    Degraded,
}

/// A freshly minted code together with its durability verdict.
#[derive(Debug, Clone, Copy)]
pub struct Issued {
    pub code: Code,
    pub durability: Durability,
}

/// Counters over one mint instance's lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct MintStats {
    /// Codes issued by this instance.
    pub issued: u64,
    /// Candidates rejected because they were already in the ledger.
    pub rejected: u64,
    /// Journal records that failed.
    pub journal_failures: u64,
}

/// Mints 8-digit codes that never repeat across the life of the journal.
///
/// # Invariants
/// - Every code returned is absent from the ledger at draw time
/// - The ledger only grows
/// - A save failure degrades durability, never uniqueness
pub struct CodeMint<J, S> {
    journal: J,
    source: S,
    config: MintConfig,
    ledger: Ledger,
    load_report: LoadReport,
    out_of_sync: bool,
    stats: MintStats,
}

impl<J: Journal, S: CandidateSource> CodeMint<J, S> {
    /// Opens the mint, recovering previously issued codes from the journal.
    ///
    /// Recovery is fail-soft: a damaged journal leaves the mint usable with
    /// whatever was readable. Check [`CodeMint::load_report`] when the
    /// distinction matters.
    pub fn open(mut journal: J, source: S, config: MintConfig) -> Self {
        let (ledger, report) = journal.load();
        if report.is_clean() {
            tracing::info!(recovered = report.recovered, "journal loaded");
        } else {
            tracing::warn!(
                recovered = report.recovered,
                skipped = report.skipped,
                failure = ?report.failure,
                "journal loaded degraded; uniqueness against unrecovered codes is not guaranteed"
            );
        }
        Self {
            journal,
            source,
            config,
            ledger,
            load_report: report,
            out_of_sync: false,
            stats: MintStats::default(),
        }
    }

    /// Mints one code, unique versus everything in the ledger.
    ///
    /// A journal failure does not fail the call; the code is issued anyway
    /// and the failure is reported through [`Issued::durability`].
    pub fn generate(&mut self) -> Result<Issued, MintError> {
        if self.ledger.is_exhausted() {
            return Err(MintError::SpaceExhausted(Code::SPAN));
        }

        let code = self.draw_fresh()?;
        self.ledger.insert(code);
        self.stats.issued += 1;

        let durability = match self.journal.record(code, &self.ledger) {
            Ok(()) => {
                self.out_of_sync = false;
                Durability::Synced
            }
            Err(e) => {
                self.stats.journal_failures += 1;
                self.out_of_sync = true;
                tracing::warn!(
                    %code,
                    error = %e,
                    "journal record failed; ledger is ahead of the journal"
                );
                Durability::Degraded
            }
        };

        tracing::debug!(%code, ?durability, issued = self.stats.issued, "code minted");
        Ok(Issued { code, durability })
    }

    fn draw_fresh(&mut self) -> Result<Code, MintError> {
        for _ in 0..self.config.max_attempts {
            let candidate = self.source.draw();
            if self.ledger.contains(candidate) {
                self.stats.rejected += 1;
                continue;
            }
            return Ok(candidate);
        }
        Err(MintError::RetriesExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Report from the load that populated this mint's ledger.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    /// True while the ledger holds codes the journal does not.
    pub fn is_out_of_sync(&self) -> bool {
        self.out_of_sync
    }

    pub fn stats(&self) -> MintStats {
        self.stats
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
