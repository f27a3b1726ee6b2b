//! Opponent builder: the set of games each team must play in a season.
//!
//! # Algorithm
//!
//! 1. Division: every pair inside a division, twice, home sides swapped.
//! 2. Intra/inter paired: every cross pair between two rotation-paired
//!    divisions (16 games), home side by `(i + j + year) mod 2`.
//! 3. Strength of schedule: rank-matched games against the two
//!    same-conference divisions outside the intra pairing.
//! 4. Seventeenth game: rank-matched against the extra rotation partner.
//!
//! Matchups are stored in canonical order (category, home, away), which is
//! also the order every later stage scans them in.

use log::debug;

use crate::models::{
    Category, Conference, Division, League, MatchupId, RawMatchup, TeamId, DIVISION_SIZE,
    GAMES_PER_TEAM,
};
use crate::rotation::Rotation;

/// All matchups of one season plus a per-team index.
#[derive(Debug, Clone)]
pub struct OpponentSet {
    year: i32,
    matchups: Vec<RawMatchup>,
    by_team: Vec<Vec<MatchupId>>,
}

impl OpponentSet {
    /// Indexes a matchup list for `team_count` teams, sorting it into
    /// canonical order.
    pub fn from_matchups(year: i32, team_count: usize, mut matchups: Vec<RawMatchup>) -> Self {
        matchups.sort();

        let mut by_team = vec![Vec::new(); team_count];
        for (i, m) in matchups.iter().enumerate() {
            for team in [m.home, m.away] {
                if let Some(list) = by_team.get_mut(team.index()) {
                    list.push(MatchupId(i));
                }
            }
        }

        Self {
            year,
            matchups,
            by_team,
        }
    }

    /// Season year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All matchups in canonical order.
    pub fn matchups(&self) -> &[RawMatchup] {
        &self.matchups
    }

    #[inline]
    pub fn get(&self, id: MatchupId) -> &RawMatchup {
        &self.matchups[id.0]
    }

    /// Number of matchups.
    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Matchups involving `team`, in canonical order.
    pub fn for_team(&self, team: TeamId) -> &[MatchupId] {
        self.by_team
            .get(team.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Matchup ids of one category, in canonical order.
    pub fn ids_of(&self, category: Category) -> impl Iterator<Item = MatchupId> + '_ {
        self.matchups
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.category == category)
            .map(|(i, _)| MatchupId(i))
    }

    /// Number of teams indexed.
    pub fn team_count(&self) -> usize {
        self.by_team.len()
    }
}

/// Builds every matchup for the season described by `rotation`.
pub fn build_opponents(league: &League, rotation: &Rotation) -> OpponentSet {
    let parity = rotation.parity();
    let mut matchups = Vec::with_capacity(league.len() * GAMES_PER_TEAM / 2);

    for conference in Conference::ALL {
        for division in Division::ALL {
            division_games(league, conference, division, &mut matchups);
        }
    }

    for conference in Conference::ALL {
        for division in Division::ALL {
            let partner = rotation.intra_partner(division);
            if division < partner {
                paired_games(
                    Category::IntraPaired,
                    league.members(conference, division),
                    league.members(conference, partner),
                    parity,
                    &mut matchups,
                );
            }
        }
    }

    for division in Division::ALL {
        let partner = rotation.inter_partner(Conference::A, division);
        paired_games(
            Category::InterPaired,
            league.members(Conference::A, division),
            league.members(Conference::B, partner),
            parity,
            &mut matchups,
        );
    }

    for conference in Conference::ALL {
        for division in Division::ALL {
            for other in rotation.sos_divisions(division) {
                if division < other {
                    let flip = parity + division.index() + other.index();
                    rank_matched_games(
                        Category::StrengthOfSchedule,
                        league.members(conference, division),
                        league.members(conference, other),
                        flip,
                        &mut matchups,
                    );
                }
            }
        }
    }

    for division in Division::ALL {
        let partner = rotation.extra_partner(Conference::A, division);
        rank_matched_games(
            Category::ExtraSeventeenth,
            league.members(Conference::A, division),
            league.members(Conference::B, partner),
            parity,
            &mut matchups,
        );
    }

    debug!(
        "season {}: built {} matchups for {} teams",
        rotation.year(),
        matchups.len(),
        league.len()
    );

    OpponentSet::from_matchups(rotation.year(), league.len(), matchups)
}

fn division_games(
    league: &League,
    conference: Conference,
    division: Division,
    out: &mut Vec<RawMatchup>,
) {
    let members = league.members(conference, division);
    for i in 0..DIVISION_SIZE {
        for j in (i + 1)..DIVISION_SIZE {
            out.push(RawMatchup::new(Category::Division, members[i], members[j]));
            out.push(RawMatchup::new(Category::Division, members[j], members[i]));
        }
    }
}

/// Complete 4×4 block; each team ends up with two home games.
fn paired_games(
    category: Category,
    side_a: &[TeamId; DIVISION_SIZE],
    side_b: &[TeamId; DIVISION_SIZE],
    parity: usize,
    out: &mut Vec<RawMatchup>,
) {
    for (i, &a) in side_a.iter().enumerate() {
        for (j, &b) in side_b.iter().enumerate() {
            let m = if (i + j + parity) % 2 == 0 {
                RawMatchup::new(category, a, b)
            } else {
                RawMatchup::new(category, b, a)
            };
            out.push(m);
        }
    }
}

/// One game per rank between two divisions.
fn rank_matched_games(
    category: Category,
    side_a: &[TeamId; DIVISION_SIZE],
    side_b: &[TeamId; DIVISION_SIZE],
    flip: usize,
    out: &mut Vec<RawMatchup>,
) {
    for (rank, (&a, &b)) in side_a.iter().zip(side_b).enumerate() {
        let m = if (rank + flip) % 2 == 0 {
            RawMatchup::new(category, a, b)
        } else {
            RawMatchup::new(category, b, a)
        };
        out.push(m);
    }
}
