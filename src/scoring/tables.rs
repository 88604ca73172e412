use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of podium places a player predicts, and the number of actual
/// finishers those picks are scored against.
pub const PODIUM_SIZE: usize = 3;

/// Competition tier. Selects which point table a scoring run uses.
///
/// Spelled lowercase in the config file:
/// ```yaml
/// tier: bronze
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

/// Point values for one tier. Fixed at compile time and never mutated
/// during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointTable {
    /// Base points for a correct pick at predicted position 0/1/2
    /// (1st/2nd/3rd). Strictly decreasing.
    pub podium: [i64; 3],

    /// Penalty applied per position of displacement when a pick made the
    /// podium but at the wrong spot. Negative.
    pub miss_penalty: i64,

    /// Reserved for joker picks (a uniquely-wrong pick that still made the
    /// top 10). Worth the tier's third-place value once the rules land.
    pub joker: i64,

    /// Bonus for predicting the entire podium in exact order.
    pub perfect_bonus: i64,
}

const GOLD: PointTable = PointTable {
    podium: [10, 8, 6],
    miss_penalty: -2,
    joker: 6,
    perfect_bonus: 10,
};

const SILVER: PointTable = PointTable {
    podium: [8, 6, 4],
    miss_penalty: -1,
    joker: 4,
    perfect_bonus: 6,
};

const BRONZE: PointTable = PointTable {
    podium: [5, 4, 3],
    miss_penalty: -1,
    joker: 3,
    perfect_bonus: 5,
};

impl Tier {
    pub fn table(self) -> &'static PointTable {
        match self {
            Tier::Gold => &GOLD,
            Tier::Silver => &SILVER,
            Tier::Bronze => &BRONZE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Bronze => "bronze",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Tier::Gold),
            "silver" => Ok(Tier::Silver),
            "bronze" => Ok(Tier::Bronze),
            _ => Err(ScoreError::UnknownTier(s.to_string())),
        }
    }
}

/// Fatal input-validation errors. Scoring never starts with any of these
/// present; there are no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown tier '{0}' (expected gold, silver, or bronze)")]
    UnknownTier(String),

    #[error("player '{player}' picked {got} finishers, need exactly {PODIUM_SIZE}")]
    WrongPickCount { player: String, got: usize },

    #[error("player '{player}' has a blank pick at position {position}")]
    BlankPick { player: String, position: usize },

    #[error("duplicate player '{0}'")]
    DuplicatePlayer(String),
}
