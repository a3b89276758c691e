//! Difficulty levels and their search depths.

use serde::{Deserialize, Serialize};

/// AI difficulty, ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a level name case-insensitively. Unknown names fall back to `Easy`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Level for a numeric index (0, 1, 2). Unknown indices fall back to `Easy`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// Search depth (in plies) for each difficulty level.
///
/// Depths are passed straight to [`MinimaxTree::build`](super::MinimaxTree::build),
/// so the deepest leaves sit one ply below the configured value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDepths {
    /// Depth for `Difficulty::Easy`.
    pub easy: u16,

    /// Depth for `Difficulty::Medium`.
    pub medium: u16,

    /// Depth for `Difficulty::Hard`.
    pub hard: u16,
}

impl Default for DifficultyDepths {
    fn default() -> Self {
        Self {
            easy: 1,
            medium: 2,
            hard: 3,
        }
    }
}

impl DifficultyDepths {
    /// Set the Easy depth.
    pub fn with_easy(mut self, depth: u16) -> Self {
        self.easy = depth;
        self
    }

    /// Set the Medium depth.
    pub fn with_medium(mut self, depth: u16) -> Self {
        self.medium = depth;
        self
    }

    /// Set the Hard depth.
    pub fn with_hard(mut self, depth: u16) -> Self {
        self.hard = depth;
        self
    }

    /// Search depth for a difficulty level.
    #[must_use]
    pub fn depth(&self, difficulty: Difficulty) -> u16 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// True if every depth is positive and Easy < Medium < Hard.
    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        0 < self.easy && self.easy < self.medium && self.medium < self.hard
    }
}
