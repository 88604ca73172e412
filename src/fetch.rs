use anyhow::Result;

use crate::config::Config;
use crate::results::{FixedResults, RaceKey, ResultsSource, WebResults};
use crate::scoring::{score_event, Entry, ScoreSheet, Tier};

/// What one scoring run produced. `sheet` is None when no results were
/// available yet; that is "no data", never "everyone missed".
pub struct EventOutcome {
    pub finishers: Vec<String>,
    pub sheet: Option<ScoreSheet>,
}

/// Pick the results source the config asks for: the manual `results:`
/// override when present, the live site otherwise.
pub fn results_source(config: &Config) -> Result<Box<dyn ResultsSource>> {
    match &config.results {
        Some(list) => Ok(Box::new(FixedResults(list.clone()))),
        None => Ok(Box::new(WebResults::new()?)),
    }
}

/// Fetch the race result and score the pool against it.
///
/// This function is called from main.rs after the roster has been
/// validated; entries arriving here are well formed. Network failures
/// propagate; an empty finisher list short-circuits to no sheet.
pub async fn fetch_and_score(
    source: &dyn ResultsSource,
    tier: Tier,
    entries: &[Entry],
    race: &RaceKey,
    verbose: bool,
) -> Result<EventOutcome> {
    if verbose {
        eprintln!("Fetching results: {} {}", race.name, race.year);
    }

    let finishers = source.top_finishers(race).await?;

    if verbose {
        eprintln!("  {} finishers", finishers.len());
    }

    if finishers.is_empty() {
        return Ok(EventOutcome {
            finishers,
            sheet: None,
        });
    }

    let sheet = score_event(tier, entries, &finishers);
    Ok(EventOutcome {
        finishers,
        sheet: Some(sheet),
    })
}
