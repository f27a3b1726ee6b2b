//! Schedule verification.
//!
//! Replays each team's timeline and re-derives every opponent's category
//! from league structure and the season's [`Rotation`], independently of
//! the category recorded on the entry. Checks:
//! - Weeks 1..=18 each appear exactly once, with exactly one bye
//! - Exact per-category game counts
//! - Each division rival met twice, once at home and once away
//! - No other opponent met more than once
//! - Every opponent fits some category for the season
//! - The opponent's timeline mirrors each game
//!
//! Verification only reports; it never changes the schedule.
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round robin scheduling: a survey", EJOR 188(3)

use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};
use crate::models::{
    Category, League, SeasonSchedule, TeamId, Violation, ViolationType, SEASON_WEEKS,
};
use crate::rotation::Rotation;

/// Category a meeting between `team` and `opponent` belongs to this season,
/// or `None` if the two should not meet.
pub fn classify(
    league: &League,
    rotation: &Rotation,
    team: TeamId,
    opponent: TeamId,
) -> Option<Category> {
    if team == opponent {
        return None;
    }
    let conference = league.conference_of(team);
    let division = league.division_of(team);
    let opp_division = league.division_of(opponent);
    let rank_matched = league.rank(team) == league.rank(opponent);

    if league.conference_of(opponent) == conference {
        if opp_division == division {
            Some(Category::Division)
        } else if opp_division == rotation.intra_partner(division) {
            Some(Category::IntraPaired)
        } else if rank_matched {
            Some(Category::StrengthOfSchedule)
        } else {
            None
        }
    } else if opp_division == rotation.inter_partner(conference, division) {
        Some(Category::InterPaired)
    } else if opp_division == rotation.extra_partner(conference, division) && rank_matched {
        Some(Category::ExtraSeventeenth)
    } else {
        None
    }
}

/// Checks one team's timeline and returns every problem found.
pub fn analyze_team_schedule(
    league: &League,
    rotation: &Rotation,
    schedule: &SeasonSchedule,
    team: TeamId,
) -> Vec<Violation> {
    let name = league.team(team).id.as_str();
    let mut violations = Vec::new();

    let Some(timeline) = schedule.team(team) else {
        violations.push(Violation::new(
            ViolationType::WeekCoverage,
            name,
            "team has no timeline",
        ));
        return violations;
    };

    // Week coverage.
    let mut per_week = [0usize; SEASON_WEEKS as usize + 1];
    for e in &timeline.entries {
        match per_week.get_mut(usize::from(e.week)) {
            Some(n) if e.week >= 1 => *n += 1,
            _ => violations.push(
                Violation::new(
                    ViolationType::WeekCoverage,
                    name,
                    format!("entry in invalid week {}", e.week),
                )
                .in_week(e.week),
            ),
        }
    }
    for week in 1..=SEASON_WEEKS {
        let n = per_week[usize::from(week)];
        if n != 1 {
            violations.push(
                Violation::new(
                    ViolationType::WeekCoverage,
                    name,
                    format!("week {week} appears {n} times"),
                )
                .in_week(week),
            );
        }
    }

    let byes = timeline.entries.iter().filter(|e| e.is_bye()).count();
    if byes != 1 {
        violations.push(Violation::new(
            ViolationType::ByeCount,
            name,
            format!("expected 1 bye, found {byes}"),
        ));
    }

    // Category counts and meetings.
    let mut counts = [0usize; Category::ALL.len()];
    let mut meetings: BTreeMap<TeamId, (usize, usize)> = BTreeMap::new();

    for e in timeline.games() {
        let Some(opponent) = e.opponent else { continue };
        let opp_name = &league.team(opponent).id;

        let tally = meetings.entry(opponent).or_insert((0, 0));
        if e.is_home {
            tally.0 += 1;
        } else {
            tally.1 += 1;
        }

        match classify(league, rotation, team, opponent) {
            Some(category) => {
                counts[category.index()] += 1;
                if let Some(recorded) = e.category.filter(|&r| r != category) {
                    violations.push(
                        Violation::new(
                            ViolationType::UnexpectedOpponent,
                            name,
                            format!("game vs {opp_name} recorded as {recorded}, is {category}"),
                        )
                        .in_week(e.week),
                    );
                }
            }
            None => violations.push(
                Violation::new(
                    ViolationType::UnexpectedOpponent,
                    name,
                    format!("{opp_name} fits no category this season"),
                )
                .in_week(e.week),
            ),
        }

        // Symmetry.
        let mirrored = schedule
            .team(opponent)
            .and_then(|t| t.entry(e.week))
            .is_some_and(|o| o.opponent == Some(team) && o.is_home != e.is_home);
        if !mirrored {
            violations.push(
                Violation::new(
                    ViolationType::Asymmetric,
                    name,
                    format!("{opp_name} does not list this game"),
                )
                .in_week(e.week),
            );
        }
    }

    for category in Category::ALL {
        let found = counts[category.index()];
        if found != category.required_games() {
            violations.push(Violation::category_count(name, category, found));
        }
    }

    for &rival in league.members(league.conference_of(team), league.division_of(team)) {
        if rival == team {
            continue;
        }
        let (home, away) = meetings.get(&rival).copied().unwrap_or((0, 0));
        if home != 1 || away != 1 {
            violations.push(Violation::new(
                ViolationType::DivisionRival,
                name,
                format!(
                    "{}: {home} home and {away} away, expected 1 and 1",
                    league.team(rival).id
                ),
            ));
        }
    }

    for (&opponent, &(home, away)) in &meetings {
        let is_rival = league.conference_of(opponent) == league.conference_of(team)
            && league.division_of(opponent) == league.division_of(team);
        if !is_rival && home + away > 1 {
            violations.push(Violation::new(
                ViolationType::RepeatOpponent,
                name,
                format!("plays {} {} times", league.team(opponent).id, home + away),
            ));
        }
    }

    violations
}

/// Checks every team.
///
/// # Errors
/// `ValidationFailure` carrying all violations, in team order.
pub fn verify_schedule(
    league: &League,
    rotation: &Rotation,
    schedule: &SeasonSchedule,
) -> Result<()> {
    let violations: Vec<Violation> = league
        .team_ids()
        .flat_map(|team| analyze_team_schedule(league, rotation, schedule, team))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ScheduleError::ValidationFailure(violations))
    }
}
