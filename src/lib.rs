//! # hilo
//!
//! A hi-lo number guessing game for the terminal.
//!
//! The library is the game itself: a small state machine that draws a
//! secret number, scores guesses against it, and tracks the attempt
//! budget. The interactive loop (prompts, menus, input parsing) lives in
//! the binary and talks to the engine only through this public API.
//!
//! ## Design Principles
//!
//! 1. **Core stays pure**: the engine validates nothing and never blocks.
//!    Input handling and range checks belong to the driver.
//!
//! 2. **Deterministic by injection**: randomness enters through
//!    [`GameRng`], so a seed pins down every secret a session will draw.
//!
//! 3. **Snapshots over access**: callers observe a round through copied
//!    [`GameStatus`] values, never through the engine's own state.
//!
//! ## Modules
//!
//! - `core`: difficulty tiers, configuration, RNG
//! - `game`: the `GuessGame` engine and its outcome types

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Difficulty, GameConfig, GameRng};
pub use crate::game::{GameStatus, GuessGame, GuessOutcome, Hint};
