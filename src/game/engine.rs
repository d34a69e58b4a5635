//! The hi-lo game state machine.
//!
//! A `GuessGame` moves through four states: not started, in progress,
//! won, exhausted. `start_new_game` draws a secret and enters play,
//! `make_guess` scores one guess and transitions to won on a match, and
//! the caller gates on `can_continue` to detect exhaustion. The engine
//! performs no input validation and reports no errors; both belong to
//! the driver.

use smallvec::SmallVec;

use super::outcome::{GameStatus, GuessOutcome};
use crate::core::{GameConfig, GameRng};

/// Guess history for one round.
///
/// SmallVec keeps rounds at the default budgets (5-15 guesses) off the
/// heap.
type History = SmallVec<[i64; 16]>;

/// The guessing engine: owns the secret, the attempt counter, and the
/// guess history for the current round.
///
/// One instance serves a whole session. `start_new_game` resets all
/// round state, so rounds repeat without reconstruction.
#[derive(Clone, Debug)]
pub struct GuessGame {
    config: GameConfig,
    rng: GameRng,
    secret_number: Option<i64>,
    attempts: u32,
    game_won: bool,
    guess_history: History,
}

impl GuessGame {
    /// Create an engine over the given configuration and RNG.
    ///
    /// No round is running until [`GuessGame::start_new_game`] is called.
    #[must_use]
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            secret_number: None,
            attempts: 0,
            game_won: false,
            guess_history: History::new(),
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a round: draw a fresh secret and clear all round state.
    ///
    /// Returns the secret for test and debug visibility. The driver logs
    /// it at debug level and never shows it to the player.
    pub fn start_new_game(&mut self) -> i64 {
        let secret = self
            .rng
            .gen_range_inclusive(self.config.min_number()..=self.config.max_number());
        self.secret_number = Some(secret);
        self.attempts = 0;
        self.game_won = false;
        self.guess_history.clear();
        secret
    }

    /// Score one guess against the secret.
    ///
    /// The engine does not gate on the budget itself: calling this after
    /// [`GuessGame::can_continue`] turns false keeps counting and drives
    /// `remaining_attempts` negative.
    ///
    /// # Panics
    ///
    /// Panics if no round has been started.
    pub fn make_guess(&mut self, guess: i64) -> GuessOutcome {
        let secret = self
            .secret_number
            .expect("make_guess called before start_new_game");
        self.attempts += 1;
        self.guess_history.push(guess);

        match guess.cmp(&secret) {
            std::cmp::Ordering::Equal => {
                self.game_won = true;
                GuessOutcome::Correct {
                    attempts: self.attempts,
                    remaining_attempts: self.remaining_attempts(),
                }
            }
            std::cmp::Ordering::Less => GuessOutcome::TooLow {
                remaining_attempts: self.remaining_attempts(),
            },
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh {
                remaining_attempts: self.remaining_attempts(),
            },
        }
    }

    /// Whether another guess may be solicited: budget left and not won.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        self.attempts < self.config.max_attempts() && !self.game_won
    }

    /// Guesses made so far this round.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the current round has been won.
    #[must_use]
    pub const fn game_won(&self) -> bool {
        self.game_won
    }

    /// Snapshot the round state, copying the history out of the engine.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            attempts: self.attempts,
            remaining_attempts: self.remaining_attempts(),
            game_won: self.game_won,
            guess_history: self.guess_history.to_vec(),
        }
    }

    fn remaining_attempts(&self) -> i64 {
        i64::from(self.config.max_attempts()) - i64::from(self.attempts)
    }

    #[cfg(test)]
    fn set_secret(&mut self, secret: i64) {
        self.secret_number = Some(secret);
    }
}
