//! The guessing engine and its result types.

pub mod engine;
pub mod outcome;

pub use engine::GuessGame;
pub use outcome::{GameStatus, GuessOutcome, Hint};
