//! Matchup categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why two teams meet in a given season.
///
/// Closed set; every stage matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Home-and-away against each division rival.
    Division,
    /// Full slate against the rotating partner division in the same conference.
    IntraPaired,
    /// Full slate against the rotating partner division in the other conference.
    InterPaired,
    /// Rank-matched games against the two remaining same-conference divisions.
    StrengthOfSchedule,
    /// Single rank-matched cross-conference game.
    ExtraSeventeenth,
}

impl Category {
    /// All categories, in sort order.
    pub const ALL: [Category; 5] = [
        Category::Division,
        Category::IntraPaired,
        Category::InterPaired,
        Category::StrengthOfSchedule,
        Category::ExtraSeventeenth,
    ];

    /// Games each team plays in this category per season.
    pub fn required_games(self) -> usize {
        match self {
            Category::Division => 6,
            Category::IntraPaired => 4,
            Category::InterPaired => 4,
            Category::StrengthOfSchedule => 2,
            Category::ExtraSeventeenth => 1,
        }
    }

    /// Dense index (0..5), for per-category counters.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Category::Division => 0,
            Category::IntraPaired => 1,
            Category::InterPaired => 2,
            Category::StrengthOfSchedule => 3,
            Category::ExtraSeventeenth => 4,
        }
    }

    /// Whether this category is built as a complete 4-vs-4 bipartite block.
    pub fn is_paired_block(self) -> bool {
        match self {
            Category::IntraPaired | Category::InterPaired => true,
            Category::Division | Category::StrengthOfSchedule | Category::ExtraSeventeenth => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Division => "DIV",
            Category::IntraPaired => "INTRA",
            Category::InterPaired => "INTER",
            Category::StrengthOfSchedule => "SOS",
            Category::ExtraSeventeenth => "X17",
        };
        f.write_str(s)
    }
}

/// Games per team per season across all categories.
pub const GAMES_PER_TEAM: usize = 17;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_games_sum() {
        let total: usize = Category::ALL.iter().map(|c| c.required_games()).sum();
        assert_eq!(total, GAMES_PER_TEAM);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_paired_block() {
        assert!(Category::IntraPaired.is_paired_block());
        assert!(Category::InterPaired.is_paired_block());
        assert!(!Category::Division.is_paired_block());
    }
}
