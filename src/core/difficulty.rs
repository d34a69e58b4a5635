//! Difficulty tiers and their default attempt budgets.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Difficulty tier for a session, fixing the default attempt budget.
///
/// Tiers are pure data: a label plus a budget. There is no behavior
/// beyond lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// Player-chosen budget. The placeholder default of 0 is always
    /// overridden through `GameConfig::with_max_attempts`, so it is not
    /// selectable from the command line.
    #[value(skip)]
    Custom,
}

impl Difficulty {
    /// All tiers, in menu order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Custom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom => "Custom",
        }
    }

    /// Default guess budget for this tier.
    #[must_use]
    pub const fn default_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 10,
            Difficulty::Hard => 5,
            Difficulty::Custom => 0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
