use std::collections::HashSet;

use super::engine::{Entry, Picks};
use super::tables::{ScoreError, PODIUM_SIZE};
use crate::config::PlayerConfig;

/// Validate the pool roster and turn it into scoring entries.
/// Returns all validation errors at once (not just the first); nothing is
/// scored while any are present.
pub fn build_entries(players: &[PlayerConfig]) -> Result<Vec<Entry>, Vec<ScoreError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(players.len());

    for player in players {
        if !seen.insert(player.name.as_str()) {
            errors.push(ScoreError::DuplicatePlayer(player.name.clone()));
            continue;
        }

        match player.picks.as_slice() {
            [first, second, third] => {
                let picks = [first.clone(), second.clone(), third.clone()];
                if let Some(position) = picks.iter().position(|p| p.trim().is_empty()) {
                    errors.push(ScoreError::BlankPick {
                        player: player.name.clone(),
                        position,
                    });
                    continue;
                }
                entries.push(Entry {
                    player: player.name.clone(),
                    picks: Picks(picks),
                });
            }
            picks => {
                // Never truncate or pad a bad ballot.
                errors.push(ScoreError::WrongPickCount {
                    player: player.name.clone(),
                    got: picks.len(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(entries)
    } else {
        Err(errors)
    }
}
