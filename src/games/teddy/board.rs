//! The game board: the configuration currently in play.

use crate::core::{Configuration, GameRng};
use crate::error::Result;

use super::config::TeddyConfig;

/// Holds the configuration in play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    configuration: Configuration,
}

impl Board {
    /// Create a board from an existing configuration.
    pub fn new(configuration: Configuration) -> Self {
        Self { configuration }
    }

    /// Create a random board.
    ///
    /// The bin count is drawn from `min_bins..=max_bins`, then each bin gets
    /// between one and `max_bears_per_bin` bears.
    pub fn random(config: &TeddyConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let bin_count = rng.gen_range_inclusive(config.min_bins..=config.max_bins);
        let counts: Vec<u32> = (0..bin_count)
            .map(|_| rng.gen_range_inclusive(1..=config.max_bears_per_bin))
            .collect();

        Ok(Self::new(Configuration::new(counts)))
    }

    /// The configuration in play.
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Replace the configuration after a turn.
    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    /// True once the last bear has been taken.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.configuration.is_empty()
    }
}
