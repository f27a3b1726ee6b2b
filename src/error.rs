//! Error types for schedule generation.

use thiserror::Error;

use crate::models::{Category, Violation, Week};
use crate::validation::ValidationError;

/// Result type for schedule generation.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Reasons a season cannot be generated.
///
/// Every variant aborts generation for the year; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The year is not covered by a rotation table.
    #[error("No rotation for season {year} (epoch {epoch_year})")]
    RotationLookup { year: i32, epoch_year: i32 },

    /// A paired-division block is not a complete 8-team, 16-game bipartite graph.
    #[error("{category} bucket has {teams} teams and {games} games, expected 8 and 16")]
    BucketShape {
        category: Category,
        teams: usize,
        games: usize,
    },

    /// A matchup could not be placed into any week of its category.
    #[error("Could not assign a week to {category} game {home} vs {away}")]
    UnassignableMatchup {
        category: Category,
        home: String,
        away: String,
    },

    /// A team would play twice in the same week.
    #[error("Team {team} is already scheduled in week {week}")]
    DoubleBooking { team: String, week: Week },

    /// A team would exceed its per-season count for a category.
    #[error("Team {team} exceeds its {category} quota")]
    QuotaExceeded { team: String, category: Category },

    /// The week slot pattern does not match the category requirements.
    #[error("Invalid slot pattern: {0}")]
    InvalidSlotPattern(String),

    /// The roster is structurally invalid.
    #[error("Invalid roster: {}", join(.0))]
    InvalidRoster(Vec<ValidationError>),

    /// The assembled schedule failed verification.
    #[error("Schedule verification failed with {} violation(s): {}", .0.len(), join_violations(.0))]
    ValidationFailure(Vec<Violation>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.team, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViolationType;

    #[test]
    fn test_display_bucket_shape() {
        let e = ScheduleError::BucketShape {
            category: Category::IntraPaired,
            teams: 6,
            games: 9,
        };
        assert_eq!(
            e.to_string(),
            "INTRA bucket has 6 teams and 9 games, expected 8 and 16"
        );
    }

    #[test]
    fn test_display_validation_failure() {
        let e = ScheduleError::ValidationFailure(vec![Violation::new(
            ViolationType::RepeatOpponent,
            "NE",
            "plays KC twice",
        )]);
        assert_eq!(
            e.to_string(),
            "Schedule verification failed with 1 violation(s): NE: plays KC twice"
        );
    }
}
