//! Move generation.
//!
//! A move takes one or more bears from a single bin. Moves are produced
//! bin by bin (ascending), and within a bin from "take one" down to "take
//! all". Root move selection breaks ties by this order.

use crate::core::Configuration;

/// Every configuration reachable from `config` in a single move.
///
/// Returns an empty vector for an empty board.
///
/// ```
/// use teddy_minimax::core::Configuration;
/// use teddy_minimax::minimax::generate_moves;
///
/// let moves = generate_moves(&Configuration::new([2, 1]));
/// let counts: Vec<_> = moves.iter().map(|c| c.bear_counts().to_vec()).collect();
/// assert_eq!(counts, vec![vec![1, 1], vec![0, 1], vec![2, 0]]);
/// ```
#[must_use]
pub fn generate_moves(config: &Configuration) -> Vec<Configuration> {
    let mut moves = Vec::with_capacity(config.total_count() as usize);

    for (bin, &count) in config.bear_counts().iter().enumerate() {
        for remaining in (0..count).rev() {
            moves.push(config.with_bin(bin, remaining));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(moves: &[Configuration]) -> Vec<Vec<u32>> {
        moves.iter().map(|c| c.bear_counts().to_vec()).collect()
    }

    #[test]
    fn test_single_bin_descending() {
        let moves = generate_moves(&Configuration::new([4]));
        assert_eq!(counts(&moves), vec![vec![3], vec![2], vec![1], vec![0]]);
    }

    #[test]
    fn test_empty_bins_skipped() {
        let moves = generate_moves(&Configuration::new([0, 2, 0]));
        assert_eq!(counts(&moves), vec![vec![0, 1, 0], vec![0, 0, 0]]);
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        assert!(generate_moves(&Configuration::new([0, 0])).is_empty());
        assert!(generate_moves(&Configuration::new([])).is_empty());
    }

    #[test]
    fn test_move_count_equals_total() {
        let config = Configuration::new([3, 1, 4]);
        assert_eq!(generate_moves(&config).len(), 8);
    }

    #[test]
    fn test_bin_order() {
        let moves = generate_moves(&Configuration::new([1, 1]));
        assert_eq!(counts(&moves), vec![vec![0, 1], vec![1, 0]]);
    }
}
