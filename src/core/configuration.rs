//! Board configurations.
//!
//! A `Configuration` is an immutable snapshot of the bear count in every
//! bin. Summary data (total bears, non-empty bins) is computed once when the
//! configuration is built, so queries during search are O(1).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Bear counts, one entry per bin. Boards rarely exceed eight bins.
pub type BinCounts = SmallVec<[u32; 8]>;

/// Immutable snapshot of the bear counts across all bins.
///
/// Equality and hashing are value-based. Two configurations with the same
/// bins in the same order are the same game state.
///
/// ```
/// use teddy_minimax::core::Configuration;
///
/// let config = Configuration::new([3, 0, 2]);
/// assert_eq!(config.total_count(), 5);
/// assert_eq!(config.non_empty_bins(), &[3, 2]);
/// assert!(!config.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u32>", into = "Vec<u32>")]
pub struct Configuration {
    bins: BinCounts,
    non_empty: BinCounts,
    total: u64,
}

impl Configuration {
    /// Create a configuration from bear counts in bin order.
    pub fn new(counts: impl IntoIterator<Item = u32>) -> Self {
        let bins: BinCounts = counts.into_iter().collect();
        let non_empty: BinCounts = bins.iter().copied().filter(|&c| c > 0).collect();
        let total = non_empty.iter().map(|&c| u64::from(c)).sum();

        Self {
            bins,
            non_empty,
            total,
        }
    }

    /// Validate raw per-bin counts and wrap them in a configuration.
    ///
    /// Fails with [`Error::InvalidInput`] if any count is negative or does
    /// not fit in a `u32`.
    pub fn from_signed(counts: &[i64]) -> Result<Self> {
        let bins = counts
            .iter()
            .enumerate()
            .map(|(bin, &count)| {
                u32::try_from(count).map_err(|_| {
                    Error::InvalidInput(format!("bin {bin} has an invalid bear count of {count}"))
                })
            })
            .collect::<Result<BinCounts>>()?;

        Ok(Self::new(bins))
    }

    /// Copy of this configuration with one bin set to a new count.
    pub(crate) fn with_bin(&self, bin: usize, count: u32) -> Self {
        let mut bins = self.bins.clone();
        bins[bin] = count;
        Self::new(bins)
    }

    /// Bear counts for every bin, in bin order.
    #[inline]
    #[must_use]
    pub fn bear_counts(&self) -> &[u32] {
        &self.bins
    }

    /// Number of bins, empty or not.
    #[inline]
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Counts of the bins that still hold bears, in bin order.
    #[inline]
    #[must_use]
    pub fn non_empty_bins(&self) -> &[u32] {
        &self.non_empty
    }

    /// Total number of bears across all bins.
    ///
    /// Summed as `u64`, so full bins never wrap.
    #[inline]
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// True once every bin is empty, i.e. the game is over.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl From<Vec<u32>> for Configuration {
    fn from(counts: Vec<u32>) -> Self {
        Self::new(counts)
    }
}

impl From<Configuration> for Vec<u32> {
    fn from(config: Configuration) -> Self {
        config.bins.into_vec()
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Configuration:")?;
        for count in &self.bins {
            write!(f, " {count}")?;
        }
        write!(f, "]")
    }
}

/// Validate a raw sequence of per-bin counts and wrap it as a configuration.
///
/// This is the entry point the board setup uses for a new game.
pub fn enumerate_configuration(bin_counts: &[i64]) -> Result<Configuration> {
    Configuration::from_signed(bin_counts)
}
