pub mod code;
pub mod error;
pub mod journal;
pub mod ledger;
pub mod source;

pub use code::{Code, ParseCodeError};
pub use error::{LoadError, MintError, SaveError};
pub use journal::{Journal, LoadReport};
pub use ledger::Ledger;
pub use source::CandidateSource;
