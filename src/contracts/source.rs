use crate::contracts::Code;

/// Draws candidate codes for uniqueness checking.
pub trait CandidateSource {
    /// Returns the next candidate, uniformly distributed over the code
    /// universe. Candidates may repeat; the mint rejects used ones.
    fn draw(&mut self) -> Code;
}
