use tracing_subscriber::EnvFilter;

use codemint::journal::SnapshotJournal;
use codemint::mint::{CodeMint, Durability, MintConfig};
use codemint::source::UniformSource;

/// Journal shared by every run of the binary.
const JOURNAL_FILE: &str = "issued_codes.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("codemint=info".parse()?))
        .init();

    let journal = SnapshotJournal::new(JOURNAL_FILE);
    let mut mint = CodeMint::open(journal, UniformSource::new(), MintConfig::default());

    let issued = mint.generate()?;
    if issued.durability == Durability::Degraded {
        tracing::warn!("code issued but not journaled; it may repeat after a restart");
    }
    println!("Generated unique number: {}", issued.code);

    Ok(())
}
