//! Schedule assembler: merges games and byes into per-team timelines.

use crate::error::{Result, ScheduleError};
use crate::models::{
    ByeAssignment, League, ScheduleEntry, ScheduledGame, SeasonSchedule, TeamSchedule,
};

/// Builds every team's week-ordered timeline.
///
/// Each game appears twice, once from each side. Byes are appended as
/// entries without an opponent. No validation happens here beyond refusing
/// games without a week; see [`verify_schedule`](super::verify_schedule).
///
/// # Errors
/// `UnassignableMatchup` if any game has no week.
pub fn assemble(
    league: &League,
    games: &[ScheduledGame],
    byes: &[ByeAssignment],
    year: i32,
) -> Result<SeasonSchedule> {
    let mut entries: Vec<Vec<ScheduleEntry>> = vec![Vec::new(); league.len()];

    for g in games {
        let m = g.matchup;
        let week = g.week.ok_or_else(|| ScheduleError::UnassignableMatchup {
            category: m.category,
            home: league.team(m.home).id.clone(),
            away: league.team(m.away).id.clone(),
        })?;
        entries[m.home.index()].push(ScheduleEntry::game(week, m.away, true, m.category));
        entries[m.away.index()].push(ScheduleEntry::game(week, m.home, false, m.category));
    }

    for bye in byes {
        if let Some(list) = entries.get_mut(bye.team.index()) {
            list.push(ScheduleEntry::bye(bye.week));
        }
    }

    let teams = league
        .team_ids()
        .zip(entries)
        .map(|(team, mut entries)| {
            // Stable: a bye that collides with a game stays after it.
            entries.sort_by_key(|e| e.week);
            TeamSchedule { team, entries }
        })
        .collect();

    Ok(SeasonSchedule { year, teams })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RawMatchup, TeamId};

    #[test]
    fn test_game_appears_for_both_sides() {
        let league = League::standard();
        let games = vec![ScheduledGame {
            matchup: RawMatchup::new(Category::Division, TeamId(0), TeamId(1)),
            week: Some(3),
        }];
        let season = assemble(&league, &games, &[], 2024).unwrap();

        let home = season.game_in_week(TeamId(0), 3).unwrap();
        assert_eq!(home.opponent, Some(TeamId(1)));
        assert!(home.is_home);

        let away = season.game_in_week(TeamId(1), 3).unwrap();
        assert_eq!(away.opponent, Some(TeamId(0)));
        assert!(!away.is_home);
        assert_eq!(away.category, Some(Category::Division));
    }

    #[test]
    fn test_entries_sorted_with_bye() {
        let league = League::standard();
        let games = vec![
            ScheduledGame {
                matchup: RawMatchup::new(Category::Division, TeamId(0), TeamId(1)),
                week: Some(4),
            },
            ScheduledGame {
                matchup: RawMatchup::new(Category::Division, TeamId(2), TeamId(0)),
                week: Some(1),
            },
        ];
        let byes = vec![ByeAssignment {
            team: TeamId(0),
            week: 2,
        }];
        let season = assemble(&league, &games, &byes, 2024).unwrap();
        let weeks: Vec<u8> = season.teams[0].entries.iter().map(|e| e.week).collect();
        assert_eq!(weeks, vec![1, 2, 4]);
        assert_eq!(season.bye_week(TeamId(0)), Some(2));
    }

    #[test]
    fn test_unassigned_game_is_error() {
        let league = League::standard();
        let games = vec![ScheduledGame::unassigned(RawMatchup::new(
            Category::InterPaired,
            TeamId(0),
            TeamId(16),
        ))];
        let err = assemble(&league, &games, &[], 2024).unwrap_err();
        assert!(matches!(err, ScheduleError::UnassignableMatchup { .. }));
    }
}
