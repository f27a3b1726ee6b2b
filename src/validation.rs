//! Input validation for league rosters.
//!
//! Checks structural integrity of the externally supplied roster before
//! any scheduling happens. Detects:
//! - Duplicate team IDs
//! - Empty team IDs
//! - Wrong total team count
//! - Divisions that do not hold exactly four teams
//!
//! All problems are collected rather than stopping at the first one.

use crate::models::{Conference, Division, Team, DIVISION_SIZE, LEAGUE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two teams share the same ID.
    DuplicateId,
    /// A team has an empty ID.
    EmptyId,
    /// The roster does not hold exactly 32 teams.
    WrongTeamCount,
    /// A conference/division pair does not hold exactly 4 teams.
    WrongDivisionSize,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a league roster.
///
/// Checks:
/// 1. Exactly 32 teams
/// 2. No empty team IDs
/// 3. No duplicate team IDs
/// 4. Every (conference, division) pair holds exactly 4 teams
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(teams: &[Team]) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.len() != LEAGUE_SIZE {
        errors.push(ValidationError::new(
            ValidationErrorKind::WrongTeamCount,
            format!("Expected {LEAGUE_SIZE} teams, found {}", teams.len()),
        ));
    }

    let mut ids = HashSet::new();
    for (i, team) in teams.iter().enumerate() {
        if team.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Team at position {i} has an empty ID"),
            ));
        } else if !ids.insert(team.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
    }

    let mut sizes = [[0usize; 4]; 2];
    for team in teams {
        sizes[team.conference.index()][team.division.index()] += 1;
    }
    for conference in Conference::ALL {
        for division in Division::ALL {
            let n = sizes[conference.index()][division.index()];
            if n != DIVISION_SIZE {
                errors.push(ValidationError::new(
                    ValidationErrorKind::WrongDivisionSize,
                    format!(
                        "Division {conference:?}/{division:?} has {n} teams, expected {DIVISION_SIZE}"
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
