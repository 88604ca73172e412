use std::collections::HashMap;

use super::tables::{PointTable, Tier, PODIUM_SIZE};

/// Minimum pool size before rarity bonuses apply. Small pools pay base
/// points only.
pub const RARITY_MIN_PLAYERS: usize = 6;

/// A validated top-3 prediction, indexed 0 (predicted winner) through 2.
/// Built by `validation::build_entries`, which proves the length, so the
/// engine never sees a malformed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picks(pub(crate) [String; PODIUM_SIZE]);

impl Picks {
    pub fn get(&self, position: usize) -> &str {
        &self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One player and their picks, in the order they appear in the pool.
#[derive(Debug, Clone)]
pub struct Entry {
    pub player: String,
    pub picks: Picks,
}

/// How a single pick fared against the podium.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// Right rider, right position. `rarity_bonus` is the extra on top of
    /// base points when few players saw it coming.
    Exact { rarity_bonus: i64 },
    /// Right rider, wrong podium spot. `penalty` is the (negative)
    /// displacement charge already included in the pick's points.
    Displaced { actual_position: usize, penalty: i64 },
    /// Not on the podium at all.
    Miss,
}

/// Per-pick trace, kept so verbose output can show players where their
/// points came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickContribution {
    pub position: usize,
    pub pick: String,
    pub outcome: PickOutcome,
    pub points: i64,
}

#[derive(Debug, Clone)]
pub struct PlayerScore {
    pub player: String,
    pub total: i64,
    pub picks: Vec<PickContribution>,
    pub perfect_bonus: i64,
    pub joker_bonus: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub player: String,
    pub score: i64,
}

/// Everything a scoring run produces. `scores` and `standings` hold the
/// same players and the same values; `standings` adds the ranking.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    pub scores: HashMap<String, i64>,
    pub standings: Vec<StandingsEntry>,
    pub details: Vec<PlayerScore>,
}

/// Score a full pool against the actual finish order.
///
/// Only the first three finishers (the podium) earn points; `actual` may
/// carry up to ten names and may be shorter than three, in which case the
/// vacant podium spots simply can't be hit. Pure function: no I/O, no
/// shared state, same inputs give the same sheet.
pub fn score_event(tier: Tier, entries: &[Entry], actual: &[String]) -> ScoreSheet {
    let table = tier.table();
    let frequency = pick_frequency(entries);
    let player_count = entries.len();

    let details: Vec<PlayerScore> = entries
        .iter()
        .map(|entry| score_entry(entry, actual, table, &frequency, player_count))
        .collect();

    let scores = details
        .iter()
        .map(|d| (d.player.clone(), d.total))
        .collect();

    // Single stable sort after all scores are in: ties keep the order
    // players appear in the pool.
    let mut standings: Vec<StandingsEntry> = details
        .iter()
        .map(|d| StandingsEntry {
            player: d.player.clone(),
            score: d.total,
        })
        .collect();
    standings.sort_by(|a, b| b.score.cmp(&a.score));

    ScoreSheet {
        scores,
        standings,
        details,
    }
}

/// Count how many (player, position) pairs named each rider, across every
/// pick in the pool.
fn pick_frequency(entries: &[Entry]) -> HashMap<&str, usize> {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        for pick in entry.picks.iter() {
            *frequency.entry(pick).or_insert(0) += 1;
        }
    }
    frequency
}

fn score_entry(
    entry: &Entry,
    actual: &[String],
    table: &PointTable,
    frequency: &HashMap<&str, usize>,
    player_count: usize,
) -> PlayerScore {
    let podium = &actual[..actual.len().min(PODIUM_SIZE)];
    let mut picks = Vec::with_capacity(PODIUM_SIZE);

    for (position, pick) in entry.picks.iter().enumerate() {
        let contribution = match podium.iter().position(|name| name == pick) {
            Some(actual_position) if actual_position == position => {
                let base = table.podium[position];
                let seen_by = frequency.get(pick).copied().unwrap_or(0);
                let rarity_bonus = rarity_bonus(base, seen_by, player_count);
                PickContribution {
                    position,
                    pick: pick.to_string(),
                    outcome: PickOutcome::Exact { rarity_bonus },
                    points: base + rarity_bonus,
                }
            }
            Some(actual_position) => {
                let distance = position.abs_diff(actual_position) as i64;
                let penalty = table.miss_penalty * distance;
                let base = table.podium[position].min(table.podium[actual_position]);
                PickContribution {
                    position,
                    pick: pick.to_string(),
                    outcome: PickOutcome::Displaced {
                        actual_position,
                        penalty,
                    },
                    points: base + penalty,
                }
            }
            None => PickContribution {
                position,
                pick: pick.to_string(),
                outcome: PickOutcome::Miss,
                points: 0,
            },
        };
        picks.push(contribution);
    }

    let perfect_bonus = if podium.len() == PODIUM_SIZE
        && entry.picks.iter().eq(podium.iter().map(String::as_str))
    {
        table.perfect_bonus
    } else {
        0
    };

    let joker_bonus = joker_bonus(&entry.picks, actual);

    let total = picks.iter().map(|p| p.points).sum::<i64>() + perfect_bonus + joker_bonus;

    PlayerScore {
        player: entry.player.clone(),
        total,
        picks,
        perfect_bonus,
        joker_bonus,
    }
}

/// Extra points for a correct pick few players made. Only kicks in with a
/// pool of 6 or more; rarest case first, since a frequency of 1 also
/// satisfies the shared-by-two check.
fn rarity_bonus(base: i64, frequency: usize, player_count: usize) -> i64 {
    if player_count < RARITY_MIN_PLAYERS {
        0
    } else if frequency == 1 {
        2 * base
    } else if frequency <= 2 {
        base
    } else {
        0
    }
}

// TODO: score joker picks (a uniquely-wrong pick that still cracked the
// top 10) once the league settles the rule. The point tables already
// reserve a third-place-equivalent value for it.
fn joker_bonus(_picks: &Picks, _actual: &[String]) -> i64 {
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str, picks: [&str; 3]) -> Entry {
        Entry {
            player: player.to_string(),
            picks: Picks(picks.map(String::from)),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Ten finishers; podium is Pogacar, Evenepoel, Vingegaard.
    fn full_results() -> Vec<String> {
        names(&[
            "Pogacar",
            "Evenepoel",
            "Vingegaard",
            "Roglic",
            "Ayuso",
            "Mas",
            "Hindley",
            "Gaudu",
            "Yates",
            "Bernal",
        ])
    }

    #[test]
    fn test_all_miss_scores_zero_every_tier() {
        for tier in [Tier::Gold, Tier::Silver, Tier::Bronze] {
            let entries = vec![entry("A", ["Nobody", "Unknown", "Stranger"])];
            let sheet = score_event(tier, &entries, &full_results());
            assert_eq!(sheet.scores["A"], 0, "{tier}");
        }
    }

    #[test]
    fn test_perfect_podium_earns_bases_plus_bonus() {
        let entries = vec![entry("A", ["Pogacar", "Evenepoel", "Vingegaard"])];
        for tier in [Tier::Gold, Tier::Silver, Tier::Bronze] {
            let t = tier.table();
            let expected = t.podium[0] + t.podium[1] + t.podium[2] + t.perfect_bonus;
            let sheet = score_event(tier, &entries, &full_results());
            assert_eq!(sheet.scores["A"], expected, "{tier}");
            assert_eq!(sheet.details[0].perfect_bonus, t.perfect_bonus, "{tier}");
        }
    }

    #[test]
    fn test_bronze_worked_example() {
        // Exact hit at 1st (+5), Vingegaard predicted 2nd but finished 3rd
        // (min(4,3) - 1 = 2), Evenepoel predicted 3rd but finished 2nd
        // (min(3,4) - 1 = 2). No perfect bonus: order differs.
        let entries = vec![entry("A", ["Pogacar", "Vingegaard", "Evenepoel"])];
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        assert_eq!(sheet.scores["A"], 9);

        let detail = &sheet.details[0];
        assert_eq!(detail.perfect_bonus, 0);
        assert_eq!(detail.picks[0].points, 5);
        assert_eq!(detail.picks[1].points, 2);
        assert_eq!(detail.picks[2].points, 2);
        assert_eq!(
            detail.picks[1].outcome,
            PickOutcome::Displaced {
                actual_position: 2,
                penalty: -1
            }
        );
    }

    #[test]
    fn test_displacement_penalty_symmetric() {
        // Same rider two positions off, in either direction, is worth the
        // same: min(5, 3) - 2 = 1 under bronze.
        let down = vec![entry("A", ["Vingegaard", "X", "Y"])];
        let up = vec![entry("A", ["X", "Y", "Pogacar"])];
        let sheet_down = score_event(Tier::Bronze, &down, &full_results());
        let sheet_up = score_event(Tier::Bronze, &up, &full_results());
        assert_eq!(sheet_down.scores["A"], 1);
        assert_eq!(sheet_up.scores["A"], sheet_down.scores["A"]);
    }

    /// Filler players whose picks never hit the podium.
    fn filler_pool(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| entry(&format!("filler{i}"), ["Roglic", "Ayuso", "Mas"]))
            .collect()
    }

    #[test]
    fn test_unique_correct_pick_pays_triple_in_big_pool() {
        let mut entries = filler_pool(5);
        entries.push(entry("A", ["Pogacar", "Nobody", "Stranger"]));
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        // Six players, only A named the winner: 3 x 5.
        assert_eq!(sheet.scores["A"], 15);
        assert_eq!(
            sheet.details[5].picks[0].outcome,
            PickOutcome::Exact { rarity_bonus: 10 }
        );
    }

    #[test]
    fn test_pick_shared_by_two_pays_double_in_big_pool() {
        let mut entries = filler_pool(4);
        entries.push(entry("A", ["Pogacar", "Nobody", "Stranger"]));
        entries.push(entry("B", ["Pogacar", "Unknown", "Stranger"]));
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        assert_eq!(sheet.scores["A"], 10);
        assert_eq!(sheet.scores["B"], 10);
    }

    #[test]
    fn test_no_rarity_bonus_in_small_pool() {
        let mut entries = filler_pool(4);
        entries.push(entry("A", ["Pogacar", "Nobody", "Stranger"]));
        // Five players total: base points only, unique pick or not.
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        assert_eq!(sheet.scores["A"], 5);
    }

    #[test]
    fn test_no_rarity_bonus_for_popular_pick() {
        let mut entries = filler_pool(3);
        entries.push(entry("A", ["Pogacar", "Nobody", "Stranger"]));
        entries.push(entry("B", ["Pogacar", "Unknown", "Stranger"]));
        entries.push(entry("C", ["Pogacar", "Unknown", "Nobody"]));
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        // Six players, three named the winner: base only.
        assert_eq!(sheet.scores["A"], 5);
    }

    #[test]
    fn test_finisher_outside_podium_is_a_miss() {
        // Roglic finished 4th; predicting him 3rd earns nothing.
        let entries = vec![entry("A", ["Nobody", "Unknown", "Roglic"])];
        let sheet = score_event(Tier::Gold, &entries, &full_results());
        assert_eq!(sheet.scores["A"], 0);
        assert_eq!(sheet.details[0].picks[2].outcome, PickOutcome::Miss);
    }

    #[test]
    fn test_short_result_list_leaves_vacant_spots_unhit() {
        let actual = names(&["Pogacar"]);
        let entries = vec![entry("A", ["Pogacar", "Evenepoel", "Vingegaard"])];
        let sheet = score_event(Tier::Bronze, &entries, &actual);
        // Winner pick lands, the other two spots don't exist yet, and a
        // one-rider podium can never be predicted perfectly.
        assert_eq!(sheet.scores["A"], 5);
        assert_eq!(sheet.details[0].perfect_bonus, 0);
    }

    #[test]
    fn test_empty_result_list_scores_zero() {
        let entries = vec![entry("A", ["Pogacar", "Evenepoel", "Vingegaard"])];
        let sheet = score_event(Tier::Bronze, &entries, &[]);
        assert_eq!(sheet.scores["A"], 0);
    }

    #[test]
    fn test_empty_pool_yields_empty_sheet() {
        let sheet = score_event(Tier::Gold, &[], &full_results());
        assert!(sheet.scores.is_empty());
        assert!(sheet.standings.is_empty());
        assert!(sheet.details.is_empty());
    }

    #[test]
    fn test_standings_sorted_descending_ties_keep_pool_order() {
        let entries = vec![
            entry("first-zero", ["Nobody", "Unknown", "Stranger"]),
            entry("winner", ["Pogacar", "Evenepoel", "Vingegaard"]),
            entry("second-zero", ["Stranger", "Nobody", "Unknown"]),
        ];
        let sheet = score_event(Tier::Silver, &entries, &full_results());
        let order: Vec<&str> = sheet.standings.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(order, ["winner", "first-zero", "second-zero"]);
        assert!(sheet.standings[0].score > sheet.standings[1].score);
        assert_eq!(sheet.standings[1].score, sheet.standings[2].score);
    }

    #[test]
    fn test_scores_and_standings_agree() {
        let entries = vec![
            entry("A", ["Pogacar", "Vingegaard", "Evenepoel"]),
            entry("B", ["Evenepoel", "Pogacar", "Mas"]),
        ];
        let sheet = score_event(Tier::Gold, &entries, &full_results());
        assert_eq!(sheet.scores.len(), 2);
        assert_eq!(sheet.standings.len(), 2);
        for standing in &sheet.standings {
            assert_eq!(sheet.scores[&standing.player], standing.score);
        }
    }

    #[test]
    fn test_repeated_pick_counts_twice_in_frequency() {
        // One player naming the same rider at two positions contributes two
        // (player, position) pairs, killing the unique-pick triple.
        let mut entries = filler_pool(4);
        entries.push(entry("A", ["Pogacar", "Pogacar", "Stranger"]));
        entries.push(entry("B", ["Nobody", "Unknown", "Stranger"]));
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        // Exact at 1st doubles (frequency 2): 5 + 5. Second Pogacar pick is
        // displaced from 2nd to 1st: min(4, 5) - 1 = 3.
        assert_eq!(sheet.scores["A"], 13);
    }

    #[test]
    fn test_joker_not_scored_yet() {
        // Uniquely-wrong top-10 pick: Bernal finished 10th.
        let mut entries = filler_pool(5);
        entries.push(entry("A", ["Bernal", "Nobody", "Stranger"]));
        let sheet = score_event(Tier::Bronze, &entries, &full_results());
        assert_eq!(sheet.scores["A"], 0);
        assert_eq!(sheet.details[5].joker_bonus, 0);
    }
}
