//! Minimax integration tests: end-to-end move choice and tree shape.

use teddy_minimax::core::Configuration;
use teddy_minimax::minimax::{
    choose_move, evaluate, generate_moves, Difficulty, DifficultyDepths, MinimaxSearch,
    MinimaxTree,
};
use teddy_minimax::Error;

fn config(counts: &[u32]) -> Configuration {
    Configuration::new(counts.iter().copied())
}

// =============================================================================
// End-to-End Scenarios
// =============================================================================

#[test]
fn test_single_bear_forced_move() {
    for difficulty in Difficulty::ALL {
        let next = choose_move(&config(&[1]), difficulty).unwrap();
        assert_eq!(next, config(&[0]));
    }
}

#[test]
fn test_two_bears_leaves_one() {
    for difficulty in Difficulty::ALL {
        let next = choose_move(&config(&[2]), difficulty).unwrap();
        assert_eq!(next, config(&[1]), "difficulty {difficulty} took both bears");
    }
}

#[test]
fn test_tie_goes_to_first_generated_move() {
    for difficulty in Difficulty::ALL {
        let next = choose_move(&config(&[1, 1]), difficulty).unwrap();
        assert_eq!(next, config(&[0, 1]));
    }
}

#[test]
fn test_three_bears_leaves_one() {
    let next = choose_move(&config(&[3]), Difficulty::Hard).unwrap();
    assert_eq!(next, config(&[1]));
}

#[test]
fn test_hard_finds_forced_win() {
    // [2, 1] -> [1, 1] loses (opponent takes one, we take the last).
    // [0, 1] wins: the opponent must take the last bear.
    let next = choose_move(&config(&[2, 1]), Difficulty::Hard).unwrap();
    assert_eq!(next, config(&[0, 1]));
}

// =============================================================================
// Determinism and Errors
// =============================================================================

#[test]
fn test_choose_move_deterministic() {
    let board = config(&[3, 2, 4]);

    for difficulty in Difficulty::ALL {
        let first = choose_move(&board, difficulty).unwrap();
        let second = choose_move(&board, difficulty).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_choose_move_on_empty_board_is_rejected() {
    let err = choose_move(&config(&[0, 0, 0]), Difficulty::Hard).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_chosen_move_is_legal() {
    let board = config(&[2, 3, 1]);
    let legal = generate_moves(&board);

    for difficulty in Difficulty::ALL {
        let next = choose_move(&board, difficulty).unwrap();
        assert!(legal.contains(&next));
    }
}

// =============================================================================
// Depth Bound
// =============================================================================

#[test]
fn test_leaves_sit_one_ply_below_depth_bound() {
    // Nodes at depth <= max_depth are expanded, so a long single-bin game
    // reaches max_depth + 1 and no further.
    for max_depth in 0..4u16 {
        let tree = MinimaxTree::build(config(&[8]), max_depth);
        assert_eq!(tree.stats().max_depth, max_depth + 1);
    }
}

#[test]
fn test_search_depth_follows_difficulty() {
    let depths = DifficultyDepths::default();
    let mut search = MinimaxSearch::new(depths.clone());
    let board = config(&[6]);

    let mut node_counts = Vec::new();
    for difficulty in Difficulty::ALL {
        search.choose_move(&board, difficulty).unwrap();
        assert_eq!(search.stats().search_depth, depths.depth(difficulty));
        assert_eq!(search.stats().tree.max_depth, depths.depth(difficulty) + 1);
        node_counts.push(search.stats().tree.node_count);
    }

    // Harder levels search strictly more of the tree
    assert!(node_counts[0] < node_counts[1]);
    assert!(node_counts[1] < node_counts[2]);
}

// =============================================================================
// Leaf Scoring
// =============================================================================

#[test]
fn test_terminal_leaf_scores_at_any_depth() {
    // Terminal leaves appear at several depths; their score only depends on
    // the parity-driven maximizing flag.
    let mut tree = MinimaxTree::build(config(&[3]), 3);
    let root = tree.root();
    evaluate(&mut tree, root, true);

    for (_, node) in tree.iter() {
        if node.is_terminal() {
            let maximizing = node.depth % 2 == 0;
            let expected = if maximizing { 1.0 } else { 0.0 };
            assert_eq!(node.score, Some(expected), "terminal at depth {}", node.depth);
        }
    }
}

#[test]
fn test_cutoff_leaf_scores() {
    let mut tree = MinimaxTree::build(config(&[4, 3]), 0);
    let root = tree.root();
    evaluate(&mut tree, root, true);

    // Root children are all minimizing cutoff leaves at depth 1
    for &child in tree.children(root) {
        let node = tree.get(child);
        let expected = if node.is_terminal() || node.configuration.total_count() == 2 {
            0.0
        } else {
            0.5
        };
        assert_eq!(node.score, Some(expected));
    }
}
