use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An issued 8-digit code.
///
/// # Invariants
/// - Always within [`Code::MIN`]..=[`Code::MAX`] (eight decimal digits)
/// - Journal lines that fail validation never become a `Code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(u32);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCodeError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("not an 8-digit code: {0}")]
    OutOfRange(u64),
}

impl Code {
    /// Smallest 8-digit code.
    pub const MIN: u32 = 10_000_000;
    /// Largest 8-digit code.
    pub const MAX: u32 = 99_999_999;
    /// Size of the code universe.
    pub const SPAN: u64 = (Self::MAX - Self::MIN + 1) as u64;

    pub fn new(raw: u32) -> Result<Self, ParseCodeError> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(ParseCodeError::OutOfRange(u64::from(raw)))
        }
    }

    /// For values already known to be in range (uniform draws).
    pub(crate) fn from_raw(raw: u32) -> Self {
        debug_assert!((Self::MIN..=Self::MAX).contains(&raw));
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u64 = s
            .trim()
            .parse()
            .map_err(|_| ParseCodeError::NotANumber(s.trim().to_string()))?;
        if raw < u64::from(Self::MIN) || raw > u64::from(Self::MAX) {
            return Err(ParseCodeError::OutOfRange(raw));
        }
        Ok(Self(raw as u32))
    }
}
