use std::time::Duration;

use serde::Deserialize;

use crate::deck::Deck;

fn default_outcome_pause_ms() -> u64 {
    2_000
}

fn default_poll_interval_ms() -> u64 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Seed of the first round's shuffle; later rounds step the seed by one.
    /// Without a seed every round draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_outcome_pause_ms")]
    pub outcome_pause_ms: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            seed: None,
            outcome_pause_ms: default_outcome_pause_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl TableConfig {
    pub fn outcome_pause(&self) -> Duration {
        Duration::from_millis(self.outcome_pause_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Fresh shuffled deck for the given zero-based round.
    pub fn deck_for_round(&self, round: u64) -> Deck {
        match self.seed {
            Some(seed) => Deck::new(seed.wrapping_add(round)),
            None => Deck::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: TableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, TableConfig::default());
        assert_eq!(cfg.outcome_pause(), Duration::from_secs(2));
        assert_eq!(cfg.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn camel_case_fields() {
        let cfg: TableConfig =
            serde_json::from_str(r#"{"seed": 9, "outcomePauseMs": 0, "pollIntervalMs": 5}"#)
                .unwrap();
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.outcome_pause_ms, 0);
        assert_eq!(cfg.poll_interval_ms, 5);
    }

    #[test]
    fn seeded_rounds_step_the_seed() {
        let cfg = TableConfig {
            seed: Some(10),
            ..TableConfig::default()
        };
        assert_eq!(cfg.deck_for_round(1).cards(), Deck::new(11).cards());
        assert_ne!(cfg.deck_for_round(0).cards(), cfg.deck_for_round(1).cards());
    }
}
