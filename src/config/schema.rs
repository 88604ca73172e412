use serde::{Deserialize, Serialize};

use crate::scoring::Tier;

/// Pool configuration for one race event.
///
/// Example YAML:
/// ```yaml
/// tier: bronze
/// race:
///   name: Tour de France
///   year: "2026"
/// players:
///   - name: Ben
///     picks: [Pogacar, Vingegaard, Evenepoel]
///   - name: Mara
///     picks: [Evenepoel, Pogacar, Roglic]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Competition tier: gold, silver, or bronze. Anything else is
    /// rejected at parse time.
    pub tier: Tier,

    pub race: RaceConfig,

    /// Players in pool order. Order matters: it breaks standings ties.
    #[serde(default)]
    pub players: Vec<PlayerConfig>,

    /// Manual finisher list, top first. When set, no fetch happens --
    /// useful for scoring from a TV broadcast before the site updates.
    #[serde(default)]
    pub results: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RaceConfig {
    pub name: String,

    /// Edition year, quoted in YAML ("2026").
    pub year: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub name: String,

    /// Predicted podium, winner first. Exactly three surnames.
    pub picks: Vec<String>,
}
