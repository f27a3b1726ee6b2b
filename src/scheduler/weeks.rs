//! Week allocator: stamps a week onto every matchup.
//!
//! # Algorithm
//!
//! 1. Paired categories (intra/inter): partition into 4×4 buckets and run
//!    the circle method. Round `r` pairs `side_a[i]` with
//!    `side_b[(i + r) mod 4]` and lands in the `r`-th week the slot pattern
//!    gives that category. Buckets are team-disjoint, so they share weeks.
//! 2. Remaining categories: sweep weeks 1..=18; in a week dedicated to
//!    category C, take C's unassigned matchups in canonical order whenever
//!    both teams are free that week and under their C quota.
//! 3. Any matchup still without a week is a hard failure. There is no
//!    backtracking; the slot pattern makes the sweep succeed for a
//!    32-team, 8-division league.
//!
//! # Complexity
//! O(W · M) for the sweep, W = 18 weeks, M = matchups.
//!
//! # References
//! - de Werra (1981), "Scheduling in Sports", Annals of Discrete Mathematics 11
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

use log::debug;

use super::buckets::{partition, Bucket};
use super::OpponentSet;
use crate::config::{SlotPattern, WeekSlot};
use crate::error::{Result, ScheduleError};
use crate::models::{
    Category, League, MatchupId, ScheduledGame, TeamId, Week, DIVISION_SIZE, SEASON_WEEKS,
};

const CATEGORY_COUNT: usize = Category::ALL.len();

/// Per-team week occupancy and category tallies during allocation.
struct WeekGrid<'a> {
    league: &'a League,
    set: &'a OpponentSet,
    games: Vec<ScheduledGame>,
    /// `[team][week]`, week 0 unused.
    busy: Vec<[bool; SEASON_WEEKS as usize + 1]>,
    tallies: Vec<[usize; CATEGORY_COUNT]>,
}

impl<'a> WeekGrid<'a> {
    fn new(league: &'a League, set: &'a OpponentSet) -> Self {
        Self {
            league,
            set,
            games: set
                .matchups()
                .iter()
                .copied()
                .map(ScheduledGame::unassigned)
                .collect(),
            busy: vec![[false; SEASON_WEEKS as usize + 1]; set.team_count()],
            tallies: vec![[0; CATEGORY_COUNT]; set.team_count()],
        }
    }

    fn name(&self, team: TeamId) -> String {
        self.league.team(team).id.clone()
    }

    #[inline]
    fn is_free(&self, team: TeamId, week: Week) -> bool {
        !self.busy[team.index()][usize::from(week)]
    }

    #[inline]
    fn under_quota(&self, team: TeamId, category: Category) -> bool {
        self.tallies[team.index()][category.index()] < category.required_games()
    }

    /// Assigns `week` to a matchup, enforcing the booking and quota rules.
    fn stamp(&mut self, id: MatchupId, week: Week) -> Result<()> {
        let m = *self.set.get(id);
        for team in [m.home, m.away] {
            if !self.is_free(team, week) {
                return Err(ScheduleError::DoubleBooking {
                    team: self.name(team),
                    week,
                });
            }
            if !self.under_quota(team, m.category) {
                return Err(ScheduleError::QuotaExceeded {
                    team: self.name(team),
                    category: m.category,
                });
            }
        }
        for team in [m.home, m.away] {
            self.busy[team.index()][usize::from(week)] = true;
            self.tallies[team.index()][m.category.index()] += 1;
        }
        self.games[id.0].week = Some(week);
        Ok(())
    }

    fn unassignable(&self, id: MatchupId) -> ScheduleError {
        let m = self.set.get(id);
        ScheduleError::UnassignableMatchup {
            category: m.category,
            home: self.name(m.home),
            away: self.name(m.away),
        }
    }

    /// Circle-method rounds for one bucket.
    fn round_robin(&mut self, bucket: &Bucket, weeks: &[Week]) -> Result<()> {
        for (round, &week) in weeks.iter().enumerate().take(DIVISION_SIZE) {
            for (i, &a) in bucket.side_a.iter().enumerate() {
                let b = bucket.side_b[(i + round) % DIVISION_SIZE];
                let id = bucket
                    .matchup_between(self.set, a, b)
                    .filter(|id| !self.games[id.0].is_assigned())
                    .ok_or_else(|| ScheduleError::UnassignableMatchup {
                        category: self.set.get(bucket.games[0]).category,
                        home: self.name(a),
                        away: self.name(b),
                    })?;
                self.stamp(id, week)?;
            }
        }
        Ok(())
    }

    /// Greedy pass over one week for one category.
    fn fill_week(&mut self, category: Category, week: Week) -> Result<usize> {
        let candidates: Vec<MatchupId> = self
            .set
            .ids_of(category)
            .filter(|id| !self.games[id.0].is_assigned())
            .collect();

        let mut placed = 0;
        for id in candidates {
            let m = *self.set.get(id);
            let fits = [m.home, m.away]
                .iter()
                .all(|&t| self.is_free(t, week) && self.under_quota(t, category));
            if fits {
                self.stamp(id, week)?;
                placed += 1;
            }
        }
        Ok(placed)
    }
}

/// Assigns a week to every matchup of `set`.
///
/// Returns games in the same (canonical) order as `set.matchups()`, all
/// with `week` set.
///
/// # Errors
/// - `BucketShape` if a paired category does not split into 4×4 blocks.
/// - `InvalidSlotPattern` if a paired category does not get 4 weeks.
/// - `DoubleBooking` / `QuotaExceeded` on an inconsistent placement.
/// - `UnassignableMatchup` if any matchup is left without a week.
pub fn allocate_weeks(
    league: &League,
    set: &OpponentSet,
    pattern: &SlotPattern,
) -> Result<Vec<ScheduledGame>> {
    let mut grid = WeekGrid::new(league, set);

    for category in Category::ALL {
        if !category.is_paired_block() {
            continue;
        }
        let weeks = pattern.weeks_for(category);
        if weeks.len() != DIVISION_SIZE {
            return Err(ScheduleError::InvalidSlotPattern(format!(
                "{category} needs {DIVISION_SIZE} weeks for round-robin, found {}",
                weeks.len()
            )));
        }
        let buckets = partition(set, category)?;
        debug!("{category}: {} buckets in weeks {weeks:?}", buckets.len());
        for bucket in &buckets {
            grid.round_robin(bucket, &weeks)?;
        }
    }

    for week in pattern.weeks() {
        match pattern.slot(week) {
            Some(WeekSlot::Play(category)) if !category.is_paired_block() => {
                let placed = grid.fill_week(category, week)?;
                debug!("week {week}: placed {placed} {category} games");
            }
            Some(WeekSlot::Play(_)) | Some(WeekSlot::Reserved) | None => {}
        }
    }

    if let Some(pos) = grid.games.iter().position(|g| !g.is_assigned()) {
        return Err(grid.unassignable(MatchupId(pos)));
    }

    Ok(grid.games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Conference, Division, RawMatchup};
    use crate::rotation::Rotation;
    use crate::scheduler::build_opponents;
    use std::collections::HashSet;

    fn allocate(year: i32) -> (League, Rotation, OpponentSet, Vec<ScheduledGame>) {
        let league = League::standard();
        let rotation = Rotation::for_year(year, 2002).unwrap();
        let set = build_opponents(&league, &rotation);
        let games = allocate_weeks(&league, &set, &SlotPattern::default()).unwrap();
        (league, rotation, set, games)
    }

    #[test]
    fn test_every_game_gets_a_week() {
        let (_, _, set, games) = allocate(2024);
        assert_eq!(games.len(), set.len());
        assert!(games.iter().all(|g| g.is_assigned()));
    }

    #[test]
    fn test_one_game_per_team_per_week() {
        let (league, _, _, games) = allocate(2024);
        let mut seen = HashSet::new();
        for g in &games {
            let week = g.week.unwrap();
            assert!(seen.insert((g.matchup.home, week)));
            assert!(seen.insert((g.matchup.away, week)));
        }
        // 17 games per team, nothing in the reserved week.
        assert_eq!(seen.len(), league.len() * 17);
        assert!(seen.iter().all(|&(_, w)| w != 9));
    }

    #[test]
    fn test_games_land_in_their_category_weeks() {
        let (_, _, _, games) = allocate(2031);
        let pattern = SlotPattern::default();
        for g in &games {
            assert_eq!(
                pattern.slot(g.week.unwrap()),
                Some(WeekSlot::Play(g.matchup.category))
            );
        }
    }

    #[test]
    fn test_intra_block_round_robin() {
        let (league, rotation, _, games) = allocate(2024);
        let side_a = league.members(Conference::A, Division::D1);
        let partner = rotation.intra_partner(Division::D1);
        let side_b = league.members(Conference::A, partner);

        let block: Vec<&ScheduledGame> = games
            .iter()
            .filter(|g| g.matchup.category == Category::IntraPaired)
            .filter(|g| side_a.iter().any(|&t| g.matchup.involves(t)))
            .collect();
        assert_eq!(block.len(), 16);

        for week in SlotPattern::default().weeks_for(Category::IntraPaired) {
            let in_week: Vec<_> = block.iter().filter(|g| g.week == Some(week)).collect();
            assert_eq!(in_week.len(), 4);
            for &a in side_a {
                assert_eq!(in_week.iter().filter(|g| g.matchup.involves(a)).count(), 1);
            }
        }
        for &a in side_a {
            for &b in side_b {
                let n = block
                    .iter()
                    .filter(|g| g.matchup.involves(a) && g.matchup.involves(b))
                    .count();
                assert_eq!(n, 1);
            }
        }
    }

    #[test]
    fn test_division_weeks_are_perfect_matchings() {
        let (league, _, _, games) = allocate(2024);
        for week in SlotPattern::default().weeks_for(Category::Division) {
            let n = games.iter().filter(|g| g.week == Some(week)).count();
            assert_eq!(n, league.len() / 2);
        }
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let (_, _, _, first) = allocate(2027);
        let (_, _, _, second) = allocate(2027);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_pattern() {
        use Category::*;
        use WeekSlot::*;
        let pattern = SlotPattern::new(vec![
            Play(Division),
            Play(Division),
            Play(Division),
            Play(IntraPaired),
            Play(IntraPaired),
            Play(IntraPaired),
            Reserved,
            Play(IntraPaired),
            Play(InterPaired),
            Play(InterPaired),
            Play(InterPaired),
            Play(InterPaired),
            Play(StrengthOfSchedule),
            Play(StrengthOfSchedule),
            Play(ExtraSeventeenth),
            Play(Division),
            Play(Division),
            Play(Division),
        ])
        .unwrap();
        let league = League::standard();
        let rotation = Rotation::for_year(2040, 2002).unwrap();
        let set = build_opponents(&league, &rotation);
        let games = allocate_weeks(&league, &set, &pattern).unwrap();
        assert!(games.iter().all(|g| g.week.is_some() && g.week != Some(7)));
    }

    #[test]
    fn test_extra_game_without_slot_is_unassignable() {
        let league = League::standard();
        let rotation = Rotation::for_year(2024, 2002).unwrap();
        let set = build_opponents(&league, &rotation);

        // A second division meeting beyond the quota can never be placed.
        let mut matchups: Vec<RawMatchup> = set.matchups().to_vec();
        let extra = matchups[0];
        matchups.push(extra);
        let overfull = OpponentSet::from_matchups(2024, league.len(), matchups);

        let err = allocate_weeks(&league, &overfull, &SlotPattern::default()).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::UnassignableMatchup {
                category: Category::Division,
                ..
            }
        ));
    }

    #[test]
    fn test_stamp_rejects_double_booking() {
        let league = League::standard();
        let rotation = Rotation::for_year(2024, 2002).unwrap();
        let set = build_opponents(&league, &rotation);
        let mut grid = WeekGrid::new(&league, &set);

        let first = MatchupId(0);
        let m = *set.get(first);
        let team = m.home;
        let rival = m.away;
        // Another game for `team` whose opponent is still free in week 1.
        let second = set
            .for_team(team)
            .iter()
            .copied()
            .find(|&id| !set.get(id).involves(rival))
            .unwrap();

        grid.stamp(first, 1).unwrap();
        let err = grid.stamp(second, 1).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DoubleBooking {
                team: league.team(team).id.clone(),
                week: 1,
            }
        );
        assert!(!grid.games[second.0].is_assigned());
        assert!(grid.stamp(second, 2).is_ok());
    }

    #[test]
    fn test_stamp_rejects_quota_overrun() {
        let league = League::standard();
        let rotation = Rotation::for_year(2024, 2002).unwrap();
        let set = build_opponents(&league, &rotation);

        // Duplicate one seventeenth-game meeting; the quota is one per team.
        let extra = set.ids_of(Category::ExtraSeventeenth).next().unwrap();
        let m = *set.get(extra);
        let mut matchups: Vec<RawMatchup> = set.matchups().to_vec();
        matchups.push(m);
        let doubled = OpponentSet::from_matchups(2024, league.len(), matchups);
        let copies: Vec<MatchupId> = doubled
            .ids_of(Category::ExtraSeventeenth)
            .filter(|&id| *doubled.get(id) == m)
            .collect();
        assert_eq!(copies.len(), 2);

        let mut grid = WeekGrid::new(&league, &doubled);
        grid.stamp(copies[0], 14).unwrap();
        let err = grid.stamp(copies[1], 15).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::QuotaExceeded {
                team: league.team(m.home).id.clone(),
                category: Category::ExtraSeventeenth,
            }
        );
    }
}
