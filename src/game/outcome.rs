//! Result types reported by the engine.

use serde::{Deserialize, Serialize};

/// Direction of the secret relative to the last guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    /// The secret is greater than the guess.
    Higher,
    /// The secret is less than the guess.
    Lower,
}

impl Hint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Hint::Higher => "higher",
            Hint::Lower => "lower",
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single guess.
///
/// `remaining_attempts` is signed: the engine keeps counting past the
/// budget, so a caller that ignores `can_continue` sees it go negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess matched the secret; the round is won.
    Correct {
        /// Total guesses it took, including this one.
        attempts: u32,
        remaining_attempts: i64,
    },
    /// The guess was below the secret.
    TooLow { remaining_attempts: i64 },
    /// The guess was above the secret.
    TooHigh { remaining_attempts: i64 },
}

impl GuessOutcome {
    /// Whether this guess won the round.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }

    /// Directional hint toward the secret, `None` on a correct guess.
    #[must_use]
    pub const fn hint(&self) -> Option<Hint> {
        match self {
            GuessOutcome::Correct { .. } => None,
            GuessOutcome::TooLow { .. } => Some(Hint::Higher),
            GuessOutcome::TooHigh { .. } => Some(Hint::Lower),
        }
    }

    /// Guesses left in the budget after this one.
    #[must_use]
    pub const fn remaining_attempts(&self) -> i64 {
        match self {
            GuessOutcome::Correct {
                remaining_attempts, ..
            }
            | GuessOutcome::TooLow { remaining_attempts }
            | GuessOutcome::TooHigh { remaining_attempts } => *remaining_attempts,
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessOutcome::Correct { attempts, .. } => {
                write!(f, "Correct! You got it in {} guesses.", attempts)
            }
            GuessOutcome::TooLow { .. } => {
                write!(f, "The secret number is higher. Try again!")
            }
            GuessOutcome::TooHigh { .. } => {
                write!(f, "The secret number is lower. Try again!")
            }
        }
    }
}

/// Read-only snapshot of a round in progress.
///
/// The history is copied out of the engine, so mutating a snapshot never
/// touches the engine's own record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    /// Guesses made so far this round.
    pub attempts: u32,
    /// Budget left; negative if the engine was driven past it.
    pub remaining_attempts: i64,
    /// Whether the round has been won.
    pub game_won: bool,
    /// Every guess made this round, oldest first.
    pub guess_history: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_accessors() {
        let low = GuessOutcome::TooLow {
            remaining_attempts: 4,
        };
        assert!(!low.is_correct());
        assert_eq!(low.hint(), Some(Hint::Higher));
        assert_eq!(low.remaining_attempts(), 4);

        let win = GuessOutcome::Correct {
            attempts: 2,
            remaining_attempts: 3,
        };
        assert!(win.is_correct());
        assert_eq!(win.hint(), None);
    }

    #[test]
    fn test_messages() {
        let high = GuessOutcome::TooHigh {
            remaining_attempts: 1,
        };
        assert_eq!(format!("{}", high), "The secret number is lower. Try again!");
        assert_eq!(format!("{}", Hint::Higher), "higher");
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = GuessOutcome::Correct {
            attempts: 2,
            remaining_attempts: 3,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GuessOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
        assert!(json.contains("\"outcome\":\"correct\""));
    }

    #[test]
    fn test_status_serde() {
        let status = GameStatus {
            attempts: 2,
            remaining_attempts: 3,
            game_won: false,
            guess_history: vec![50, 75],
        };

        let json = serde_json::to_string(&status).unwrap();
        let deserialized: GameStatus = serde_json::from_str(&json).unwrap();

        assert_eq!(status, deserialized);
    }
}
