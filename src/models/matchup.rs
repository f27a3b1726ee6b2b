//! Matchups and scheduled games.

use serde::{Deserialize, Serialize};

use super::{Category, TeamId};

/// A week number, 1-based.
pub type Week = u8;

/// Weeks in a regular season.
pub const SEASON_WEEKS: Week = 18;

/// Index into an [`OpponentSet`](crate::scheduler::OpponentSet)'s matchup list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchupId(pub usize);

/// A game two teams must play this season, with its home side chosen.
///
/// Field order gives the canonical sort: category, then home, then away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RawMatchup {
    pub category: Category,
    pub home: TeamId,
    pub away: TeamId,
}

impl RawMatchup {
    pub fn new(category: Category, home: TeamId, away: TeamId) -> Self {
        Self {
            category,
            home,
            away,
        }
    }

    /// Whether `team` plays in this matchup.
    #[inline]
    pub fn involves(&self, team: TeamId) -> bool {
        self.home == team || self.away == team
    }

    /// The other side, if `team` plays in this matchup.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if self.home == team {
            Some(self.away)
        } else if self.away == team {
            Some(self.home)
        } else {
            None
        }
    }

    /// Unordered pair as (lower, higher).
    #[inline]
    pub fn pair(&self) -> (TeamId, TeamId) {
        if self.home < self.away {
            (self.home, self.away)
        } else {
            (self.away, self.home)
        }
    }
}

/// A matchup with its assigned week.
///
/// `week` is `None` only while the week allocator is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub matchup: RawMatchup,
    pub week: Option<Week>,
}

impl ScheduledGame {
    /// An unassigned game.
    pub fn unassigned(matchup: RawMatchup) -> Self {
        Self {
            matchup,
            week: None,
        }
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.week.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_of() {
        let m = RawMatchup::new(Category::Division, TeamId(3), TeamId(1));
        assert_eq!(m.opponent_of(TeamId(3)), Some(TeamId(1)));
        assert_eq!(m.opponent_of(TeamId(1)), Some(TeamId(3)));
        assert_eq!(m.opponent_of(TeamId(7)), None);
        assert_eq!(m.pair(), (TeamId(1), TeamId(3)));
    }

    #[test]
    fn test_sort_order() {
        let mut v = vec![
            RawMatchup::new(Category::StrengthOfSchedule, TeamId(0), TeamId(9)),
            RawMatchup::new(Category::Division, TeamId(2), TeamId(0)),
            RawMatchup::new(Category::Division, TeamId(0), TeamId(3)),
            RawMatchup::new(Category::Division, TeamId(0), TeamId(1)),
        ];
        v.sort();
        assert_eq!(v[0], RawMatchup::new(Category::Division, TeamId(0), TeamId(1)));
        assert_eq!(v[1], RawMatchup::new(Category::Division, TeamId(0), TeamId(3)));
        assert_eq!(v[2], RawMatchup::new(Category::Division, TeamId(2), TeamId(0)));
        assert_eq!(v[3].category, Category::StrengthOfSchedule);
    }

    #[test]
    fn test_unassigned_game() {
        let g = ScheduledGame::unassigned(RawMatchup::new(
            Category::ExtraSeventeenth,
            TeamId(0),
            TeamId(16),
        ));
        assert!(!g.is_assigned());
    }
}
