use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::contracts::{CandidateSource, Code};

/// Uniform candidate source over the whole code universe.
///
/// Non-cryptographic; collisions with issued codes are expected and handled
/// by the mint's rejection loop.
pub struct UniformSource {
    rng: SmallRng,
}

impl UniformSource {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic source for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateSource for UniformSource {
    fn draw(&mut self) -> Code {
        Code::from_raw(self.rng.gen_range(Code::MIN..=Code::MAX))
    }
}
