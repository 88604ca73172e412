pub mod engine;
pub mod simple;
pub mod tables;
pub mod validation;

pub use engine::{
    score_event, Entry, PickContribution, PickOutcome, Picks, PlayerScore, ScoreSheet,
    StandingsEntry, RARITY_MIN_PLAYERS,
};
pub use simple::score_simple;
pub use tables::{PointTable, ScoreError, Tier, PODIUM_SIZE};
pub use validation::build_entries;
