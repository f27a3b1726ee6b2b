//! Schedule balance metrics.
//!
//! Reporting only: computed from a finished [`SeasonSchedule`] and never
//! fed back into generation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Home games | Games hosted, per team |
//! | Longest road trip | Most consecutive away games, byes break a streak |
//! | Byes per week | Teams idle in each week |
//! | Max home imbalance | Largest \|home − away\| over all teams |

use std::collections::BTreeMap;

use crate::models::{SeasonSchedule, Week};

/// Balance indicators for one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Home games, indexed by team.
    pub home_games: Vec<usize>,
    /// Longest run of consecutive away games, indexed by team.
    pub longest_road_trip: Vec<usize>,
    /// Number of teams on bye per week (weeks without byes omitted).
    pub byes_per_week: BTreeMap<Week, usize>,
    /// Largest difference between home and away games for any team.
    pub max_home_imbalance: usize,
}

impl ScheduleSummary {
    /// Computes the summary from a season schedule.
    pub fn calculate(schedule: &SeasonSchedule) -> Self {
        let mut home_games = Vec::with_capacity(schedule.teams.len());
        let mut longest_road_trip = Vec::with_capacity(schedule.teams.len());
        let mut byes_per_week = BTreeMap::new();
        let mut max_home_imbalance = 0;

        for timeline in &schedule.teams {
            let home = timeline.home_games();
            let away = timeline.games().count() - home;
            home_games.push(home);
            max_home_imbalance = max_home_imbalance.max(home.abs_diff(away));

            let mut run = 0;
            let mut longest = 0;
            for e in &timeline.entries {
                if e.is_bye() {
                    *byes_per_week.entry(e.week).or_insert(0) += 1;
                    run = 0;
                } else if e.is_home {
                    run = 0;
                } else {
                    run += 1;
                    longest = longest.max(run);
                }
            }
            longest_road_trip.push(longest);
        }

        Self {
            home_games,
            longest_road_trip,
            byes_per_week,
            max_home_imbalance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ScheduleEntry, TeamId, TeamSchedule};

    fn sample() -> SeasonSchedule {
        let g = |week, home| ScheduleEntry::game(week, TeamId(1), home, Category::Division);
        SeasonSchedule {
            year: 2024,
            teams: vec![TeamSchedule {
                team: TeamId(0),
                entries: vec![
                    g(1, false),
                    g(2, false),
                    ScheduleEntry::bye(3),
                    g(4, false),
                    g(5, true),
                    g(6, false),
                ],
            }],
        }
    }

    #[test]
    fn test_summary_metrics() {
        let s = ScheduleSummary::calculate(&sample());
        assert_eq!(s.home_games, vec![1]);
        assert_eq!(s.longest_road_trip, vec![2]);
        assert_eq!(s.byes_per_week.get(&3), Some(&1));
        assert_eq!(s.max_home_imbalance, 3);
    }

    #[test]
    fn test_empty_schedule() {
        let s = ScheduleSummary::calculate(&SeasonSchedule {
            year: 2024,
            teams: Vec::new(),
        });
        assert!(s.home_games.is_empty());
        assert!(s.byes_per_week.is_empty());
        assert_eq!(s.max_home_imbalance, 0);
    }
}
