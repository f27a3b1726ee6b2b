//! Bye allocator: one unused week per team.
//!
//! Teams are processed in id order. Each takes the first free week in the
//! preferred window, else the first free week of the season. If a team has
//! no free week at all, a formula fallback keeps the output well-formed and
//! a warning is logged; verification then rejects the schedule.

use log::{debug, warn};

use crate::models::{ByeAssignment, League, ScheduledGame, TeamId, Week, SEASON_WEEKS};

/// Picks a bye week for every team.
///
/// `games` must all have weeks assigned; unassigned games are ignored.
pub fn allocate_byes(
    league: &League,
    games: &[ScheduledGame],
    window: (Week, Week),
    year: i32,
) -> Vec<ByeAssignment> {
    let mut busy = vec![[false; SEASON_WEEKS as usize + 1]; league.len()];
    for g in games {
        if let Some(week) = g.week {
            busy[g.matchup.home.index()][usize::from(week)] = true;
            busy[g.matchup.away.index()][usize::from(week)] = true;
        }
    }

    let (first, last) = window;
    let byes: Vec<ByeAssignment> = league
        .team_ids()
        .map(|team| {
            let free = |w: &Week| !busy[team.index()][usize::from(*w)];
            let week = (first.max(1)..=last.min(SEASON_WEEKS))
                .find(free)
                .or_else(|| {
                    let week = (1..=SEASON_WEEKS).find(free)?;
                    warn!(
                        "{}: no free week in {first}..={last}, bye falls back to week {week}",
                        league.team(team).id
                    );
                    Some(week)
                })
                .unwrap_or_else(|| {
                    let week = fallback_week(year, team);
                    warn!(
                        "{}: no free week at all, forcing bye into week {week}",
                        league.team(team).id
                    );
                    week
                });
            ByeAssignment { team, week }
        })
        .collect();

    debug!("assigned {} byes", byes.len());
    byes
}

/// `5 + (year + team) mod 10`: a mid-season week that only exists to keep
/// the timeline well-formed.
fn fallback_week(year: i32, team: TeamId) -> Week {
    let offset = (i64::from(year) + team.index() as i64).rem_euclid(10);
    5 + offset as Week
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, RawMatchup};

    /// A game for `team` against a fixed opponent in each of `weeks`.
    fn games_for(team: TeamId, weeks: impl IntoIterator<Item = Week>) -> Vec<ScheduledGame> {
        weeks
            .into_iter()
            .map(|w| ScheduledGame {
                matchup: RawMatchup::new(Category::Division, team, TeamId(31)),
                week: Some(w),
            })
            .collect()
    }

    #[test]
    fn test_bye_takes_only_free_week() {
        let league = League::standard();
        let games = games_for(TeamId(0), (1..=18).filter(|&w| w != 7));
        let byes = allocate_byes(&league, &games, (5, 14), 2024);
        assert_eq!(byes[0], ByeAssignment { team: TeamId(0), week: 7 });
    }

    #[test]
    fn test_prefers_window() {
        let league = League::standard();
        // With no games every team takes the first week of the window.
        let byes = allocate_byes(&league, &[], (5, 14), 2024);
        assert!(byes.iter().all(|b| b.week == 5));
        assert_eq!(byes.len(), league.len());
    }

    #[test]
    fn test_falls_back_outside_window() {
        let league = League::standard();
        let games = games_for(TeamId(0), (1..=18).filter(|&w| w != 2));
        let byes = allocate_byes(&league, &games, (5, 14), 2024);
        assert_eq!(byes[0].week, 2);
    }

    #[test]
    fn test_formula_fallback_when_full() {
        let league = League::standard();
        let games = games_for(TeamId(0), 1..=18);
        let byes = allocate_byes(&league, &games, (5, 14), 2024);
        // 5 + (2024 + 0) mod 10
        assert_eq!(byes[0].week, 9);
    }

    #[test]
    fn test_fallback_week_range() {
        for year in 2000..2020 {
            for t in 0..32 {
                let w = fallback_week(year, TeamId(t));
                assert!((5..=14).contains(&w));
            }
        }
    }
}
