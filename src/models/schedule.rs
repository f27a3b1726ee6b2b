//! Season schedule (solution) model.
//!
//! A season schedule is, for every team, an 18-entry week-ordered
//! timeline of 17 games and one bye. Verification findings are
//! recorded as [`Violation`]s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Category, League, TeamId, Week};

/// One week of a team's timeline, seen from that team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub week: Week,
    /// `None` marks the bye.
    pub opponent: Option<TeamId>,
    /// Always `false` for the bye.
    pub is_home: bool,
    /// Category the game was scheduled under; `None` for the bye.
    pub category: Option<Category>,
}

impl ScheduleEntry {
    /// A game entry.
    pub fn game(week: Week, opponent: TeamId, is_home: bool, category: Category) -> Self {
        Self {
            week,
            opponent: Some(opponent),
            is_home,
            category: Some(category),
        }
    }

    /// A bye marker.
    pub fn bye(week: Week) -> Self {
        Self {
            week,
            opponent: None,
            is_home: false,
            category: None,
        }
    }

    #[inline]
    pub fn is_bye(&self) -> bool {
        self.opponent.is_none()
    }
}

/// A team's bye week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByeAssignment {
    pub team: TeamId,
    pub week: Week,
}

/// One team's full season, sorted by week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSchedule {
    pub team: TeamId,
    pub entries: Vec<ScheduleEntry>,
}

impl TeamSchedule {
    /// Entry for a given week.
    pub fn entry(&self, week: Week) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.week == week)
    }

    /// Non-bye entries.
    pub fn games(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter().filter(|e| !e.is_bye())
    }

    /// The bye week (first one, if the timeline is malformed).
    pub fn bye_week(&self) -> Option<Week> {
        self.entries.iter().find(|e| e.is_bye()).map(|e| e.week)
    }

    /// Number of home games.
    pub fn home_games(&self) -> usize {
        self.games().filter(|e| e.is_home).count()
    }
}

/// Every team's timeline for one season, indexed by [`TeamId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    pub year: i32,
    pub teams: Vec<TeamSchedule>,
}

/// External contract shape of one week: `{week, opponent, isHome}` or
/// `{week, opponent: null}` for the bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEntry {
    pub week: Week,
    pub opponent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_home: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl SeasonSchedule {
    /// Timeline for a team.
    pub fn team(&self, team: TeamId) -> Option<&TeamSchedule> {
        self.teams.get(team.index())
    }

    /// The game a team plays in a week, `None` on its bye.
    pub fn game_in_week(&self, team: TeamId, week: Week) -> Option<&ScheduleEntry> {
        self.team(team)?.entry(week).filter(|e| !e.is_bye())
    }

    pub fn bye_week(&self, team: TeamId) -> Option<Week> {
        self.team(team)?.bye_week()
    }

    /// Number of games across the league (each game counted once).
    pub fn game_count(&self) -> usize {
        self.teams
            .iter()
            .map(|t| t.games().filter(|e| e.is_home).count())
            .sum()
    }

    /// Renders the schedule keyed by external team id.
    pub fn to_contract(&self, league: &League) -> BTreeMap<String, Vec<ContractEntry>> {
        self.teams
            .iter()
            .map(|ts| {
                let entries = ts
                    .entries
                    .iter()
                    .map(|e| ContractEntry {
                        week: e.week,
                        opponent: e.opponent.map(|o| league.team(o).id.clone()),
                        is_home: e.opponent.map(|_| e.is_home),
                        category: e.category,
                    })
                    .collect();
                (league.team(ts.team).id.clone(), entries)
            })
            .collect()
    }
}

/// A verification finding for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Offending team's external id.
    pub team: String,
    /// Week involved, where one applies.
    pub week: Option<Week>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A category's game count differs from its requirement.
    CategoryCount(Category),
    /// A division rival is not met exactly twice with home sides swapped.
    DivisionRival,
    /// A non-division opponent appears more than once.
    RepeatOpponent,
    /// An opponent fits no category for this season's rotation.
    UnexpectedOpponent,
    /// A week is missing or listed twice.
    WeekCoverage,
    /// Not exactly one bye.
    ByeCount,
    /// The opponent's timeline does not mirror this game.
    Asymmetric,
}

impl Violation {
    pub fn new(
        violation_type: ViolationType,
        team: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            team: team.into(),
            week: None,
            message: message.into(),
        }
    }

    /// Attaches the week involved.
    pub fn in_week(mut self, week: Week) -> Self {
        self.week = Some(week);
        self
    }

    /// Category count mismatch.
    pub fn category_count(
        team: impl Into<String>,
        category: Category,
        found: usize,
    ) -> Self {
        Self::new(
            ViolationType::CategoryCount(category),
            team,
            format!(
                "{category} games: expected {}, found {found}",
                category.required_games()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> TeamSchedule {
        TeamSchedule {
            team: TeamId(0),
            entries: vec![
                ScheduleEntry::game(1, TeamId(1), true, Category::Division),
                ScheduleEntry::bye(2),
                ScheduleEntry::game(3, TeamId(2), false, Category::Division),
            ],
        }
    }

    #[test]
    fn test_team_schedule_queries() {
        let ts = sample_team();
        assert_eq!(ts.bye_week(), Some(2));
        assert_eq!(ts.games().count(), 2);
        assert_eq!(ts.home_games(), 1);
        assert_eq!(ts.entry(3).unwrap().opponent, Some(TeamId(2)));
        assert!(ts.entry(4).is_none());
    }

    #[test]
    fn test_game_in_week_skips_bye() {
        let season = SeasonSchedule {
            year: 2024,
            teams: vec![sample_team()],
        };
        assert!(season.game_in_week(TeamId(0), 1).is_some());
        assert!(season.game_in_week(TeamId(0), 2).is_none());
        assert_eq!(season.bye_week(TeamId(0)), Some(2));
        assert!(season.team(TeamId(5)).is_none());
    }

    #[test]
    fn test_bye_contract_shape() {
        let entry = ContractEntry {
            week: 9,
            opponent: None,
            is_home: None,
            category: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"week":9,"opponent":null}"#);
    }

    #[test]
    fn test_game_contract_shape() {
        let entry = ContractEntry {
            week: 1,
            opponent: Some("KC".into()),
            is_home: Some(true),
            category: Some(Category::Division),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"week":1,"opponent":"KC","isHome":true,"category":"Division"}"#
        );
    }

    #[test]
    fn test_violation_factories() {
        let v = Violation::category_count("NE", Category::Division, 7);
        assert_eq!(v.violation_type, ViolationType::CategoryCount(Category::Division));
        assert!(v.message.contains("expected 6, found 7"));
        assert_eq!(v.week, None);

        let v2 = Violation::new(ViolationType::Asymmetric, "NE", "mismatch").in_week(4);
        assert_eq!(v2.week, Some(4));
    }
}
