use anyhow::Result;
use async_trait::async_trait;

use super::types::RaceKey;

/// Capability to fetch ordered finisher names for a race. The scoring side
/// only ever talks to this trait, so standings can be computed from canned
/// lists without touching the network.
#[async_trait]
pub trait ResultsSource: Send + Sync {
    /// Finisher surnames in race order, at most ten. Empty means the race
    /// has no posted result yet ("no data"), not that everyone missed.
    async fn top_finishers(&self, race: &RaceKey) -> Result<Vec<String>>;
}

/// A canned finisher list. Backs the config `results:` override and tests.
pub struct FixedResults(pub Vec<String>);

#[async_trait]
impl ResultsSource for FixedResults {
    async fn top_finishers(&self, _race: &RaceKey) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_results_echo_their_list() {
        let source = FixedResults(vec!["Pogacar".to_string(), "Vingegaard".to_string()]);
        let race = RaceKey::new("Tour de France", "2026");
        let finishers = source.top_finishers(&race).await.unwrap();
        assert_eq!(finishers, ["Pogacar", "Vingegaard"]);
    }
}
