//! Core types: difficulty tiers, configuration, RNG.
//!
//! Everything here is data the engine is configured with, rather than
//! round state. The engine itself lives in `crate::game`.

pub mod config;
pub mod difficulty;
pub mod rng;

pub use config::GameConfig;
pub use difficulty::Difficulty;
pub use rng::GameRng;
