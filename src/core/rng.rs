//! Deterministic random number generation for drawing secrets.
//!
//! Same seed, same sequence: a session built on `GameRng::new(42)` draws
//! the same secrets every time, which is how the tests and the `--seed`
//! flag replay rounds without reaching into the engine.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG the engine uses to draw secret numbers.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy, for normal play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    ///
    /// Panics if the range is empty (`low > high`).
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<i64>) -> i64 {
        self.inner.gen_range(range)
    }
}
