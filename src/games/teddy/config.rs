//! Game and match-run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::minimax::DifficultyDepths;

/// Configuration for boards and AI-vs-AI match runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeddyConfig {
    /// Fewest bins on a new board.
    pub min_bins: u32,

    /// Most bins on a new board.
    pub max_bins: u32,

    /// Most bears in a single bin on a new board (every bin starts with at
    /// least one).
    pub max_bears_per_bin: u32,

    /// Games played for each difficulty matchup.
    pub games_per_matchup: u32,

    /// Seed for board generation. Same seed produces the same match run.
    pub seed: u64,

    /// Search depth per difficulty.
    pub depths: DifficultyDepths,
}

impl Default for TeddyConfig {
    fn default() -> Self {
        Self {
            min_bins: 2,
            max_bins: 4,
            max_bears_per_bin: 4,
            games_per_matchup: 10,
            seed: 42,
            depths: DifficultyDepths::default(),
        }
    }
}

impl TeddyConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bin count range.
    pub fn with_bins(mut self, min: u32, max: u32) -> Self {
        self.min_bins = min;
        self.max_bins = max;
        self
    }

    /// Set the maximum bears per bin.
    pub fn with_max_bears_per_bin(mut self, max: u32) -> Self {
        self.max_bears_per_bin = max;
        self
    }

    /// Set the number of games per matchup.
    pub fn with_games_per_matchup(mut self, games: u32) -> Self {
        self.games_per_matchup = games;
        self
    }

    /// Set the board seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the difficulty depth table.
    pub fn with_depths(mut self, depths: DifficultyDepths) -> Self {
        self.depths = depths;
        self
    }

    /// Check that the bounds can produce a non-empty board.
    pub fn validate(&self) -> Result<()> {
        if self.min_bins == 0 {
            return Err(Error::InvalidConfig("min_bins must be at least 1".to_string()));
        }
        if self.min_bins > self.max_bins {
            return Err(Error::InvalidConfig(format!(
                "min_bins ({}) exceeds max_bins ({})",
                self.min_bins, self.max_bins
            )));
        }
        if self.max_bears_per_bin == 0 {
            return Err(Error::InvalidConfig(
                "max_bears_per_bin must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TeddyConfig::default();
        assert_eq!(config.min_bins, 2);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TeddyConfig::new()
            .with_bins(1, 3)
            .with_max_bears_per_bin(6)
            .with_games_per_matchup(2)
            .with_seed(7)
            .with_depths(DifficultyDepths::default().with_hard(4));

        assert_eq!((config.min_bins, config.max_bins), (1, 3));
        assert_eq!(config.max_bears_per_bin, 6);
        assert_eq!(config.games_per_matchup, 2);
        assert_eq!(config.seed, 7);
        assert_eq!(config.depths.hard, 4);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(TeddyConfig::new().with_bins(0, 3).validate().is_err());
        assert!(TeddyConfig::new().with_bins(4, 2).validate().is_err());
        assert!(matches!(
            TeddyConfig::new().with_max_bears_per_bin(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = TeddyConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TeddyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
