use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{PickOutcome, PlayerScore, StandingsEntry};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a player name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// "1st", "2nd", "3rd" for podium indices 0..3.
fn place(position: usize) -> &'static str {
    match position {
        0 => "1st",
        1 => "2nd",
        2 => "3rd",
        _ => "?",
    }
}

/// Format standings as a ranked table: index, score, player.
/// Index column: 3 chars (fits "99."), right-aligned.
/// Score column: right-aligned, 5 chars wide.
pub fn format_standings_table(standings: &[StandingsEntry], use_colors: bool) -> String {
    if standings.is_empty() {
        return "No players in the pool.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let score_width = 5;
    let separator = "  ";

    standings
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", entry.score, width = score_width);

            let fixed_width = index_width + 1 + score_width + separator.len();
            let name = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_name(&entry.player, width - fixed_width)
                } else {
                    truncate_name(&entry.player, 20)
                }
            } else {
                entry.player.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    name
                )
            } else {
                format!("{} {}{}{}", index_str, score_padded, separator, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one player's score with the per-pick trace (for verbose mode)
pub fn format_player_detail(detail: &PlayerScore, use_colors: bool) -> String {
    let mut lines = Vec::with_capacity(detail.picks.len() + 2);

    if use_colors {
        lines.push(format!(
            "{}  {} pts",
            detail.player.bold(),
            detail.total.bold()
        ));
    } else {
        lines.push(format!("{}  {} pts", detail.player, detail.total));
    }

    for pick in &detail.picks {
        let description = match &pick.outcome {
            PickOutcome::Exact { rarity_bonus: 0 } => "hit".to_string(),
            PickOutcome::Exact { rarity_bonus } => {
                format!("hit, rare pick ({:+})", rarity_bonus)
            }
            PickOutcome::Displaced {
                actual_position,
                penalty,
            } => format!("finished {} ({})", place(*actual_position), penalty),
            PickOutcome::Miss => "missed the podium".to_string(),
        };
        lines.push(format!(
            "  {} {:<16} {:>4}  {}",
            place(pick.position),
            pick.pick,
            format!("{:+}", pick.points),
            description
        ));
    }

    if detail.perfect_bonus != 0 {
        lines.push(format!(
            "      perfect podium      {:+}",
            detail.perfect_bonus
        ));
    }

    lines.join("\n")
}

/// Format the fetched finisher list, one per line, race order.
pub fn format_results_list(finishers: &[String], use_colors: bool) -> String {
    if finishers.is_empty() {
        return "No results posted yet.".to_string();
    }

    finishers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let index_str = format!("{:>2}.", idx + 1);
            if use_colors {
                format!("{} {}", index_str.dimmed(), name)
            } else {
                format!("{} {}", index_str, name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as tab-separated values for scripting
/// Columns: score, player (no headers, no colors)
pub fn format_tsv(standings: &[StandingsEntry]) -> String {
    standings
        .iter()
        .map(|entry| format!("{}\t{}", entry.score, entry.player))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format standings as JSON for machine consumption
pub fn format_json(standings: &[StandingsEntry]) -> Result<String> {
    let entries: Vec<serde_json::Value> = standings
        .iter()
        .map(|entry| {
            serde_json::json!({
                "player": entry.player,
                "score": entry.score,
            })
        })
        .collect();
    serde_json::to_string_pretty(&serde_json::json!({ "standings": entries }))
        .context("Failed to serialize standings")
}
