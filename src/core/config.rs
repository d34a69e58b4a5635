//! Session configuration: the guess range and the attempt budget.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Immutable settings for one play session.
///
/// The attempt budget comes from the difficulty tier unless overridden
/// with [`GameConfig::with_max_attempts`]. The config performs no
/// validation; the driver keeps `min <= max` and the budget positive
/// before play starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    min_number: i64,
    max_number: i64,
    difficulty: Difficulty,
    max_attempts: u32,
}

impl GameConfig {
    /// Create a configuration with the difficulty's default budget.
    #[must_use]
    pub fn new(min_number: i64, max_number: i64, difficulty: Difficulty) -> Self {
        Self {
            min_number,
            max_number,
            difficulty,
            max_attempts: difficulty.default_attempts(),
        }
    }

    /// Override the attempt budget.
    ///
    /// Required for [`Difficulty::Custom`], whose default budget is a
    /// placeholder zero.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Smallest number the secret can be.
    #[must_use]
    pub const fn min_number(&self) -> i64 {
        self.min_number
    }

    /// Largest number the secret can be.
    #[must_use]
    pub const fn max_number(&self) -> i64 {
        self.max_number
    }

    /// The tier this configuration was built from.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Maximum guesses before a round ends unsolved.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for GameConfig {
    /// The classic setup: 1 through 100 on medium.
    fn default() -> Self {
        Self::new(1, 100, Difficulty::Medium)
    }
}
