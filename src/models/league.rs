//! League structure: the team arena plus division membership tables.
//!
//! A league is exactly 2 conferences × 4 divisions × 4 teams. Within each
//! division, teams are ranked 0..4 by lexicographic id; rank drives the
//! rank-matched categories (strength of schedule, seventeenth game).

use serde::{Deserialize, Serialize};

use super::{Conference, Division, Team, TeamId};
use crate::error::{Result, ScheduleError};
use crate::validation::{validate_roster, ValidationError, ValidationErrorKind};

/// Teams per division.
pub const DIVISION_SIZE: usize = 4;
/// Divisions per conference.
pub const DIVISIONS_PER_CONFERENCE: usize = 4;
/// Teams in the league.
pub const LEAGUE_SIZE: usize = 32;

type DivisionTable = [[[TeamId; DIVISION_SIZE]; DIVISIONS_PER_CONFERENCE]; 2];

/// Read-only league structure built from a validated roster.
///
/// Serializes as its roster; deserializing runs the same validation as
/// [`League::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Team>", into = "Vec<Team>")]
pub struct League {
    teams: Vec<Team>,
    /// `[conference][division]` → members in rank order.
    divisions: DivisionTable,
    /// Rank of each team within its division.
    ranks: Vec<usize>,
}

impl League {
    /// Builds a league from a roster.
    ///
    /// # Errors
    /// `ScheduleError::InvalidRoster` listing every structural problem
    /// (team count, division sizes, duplicate or empty ids).
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        validate_roster(&teams).map_err(ScheduleError::InvalidRoster)?;

        let mut divisions = [[[TeamId(0); DIVISION_SIZE]; DIVISIONS_PER_CONFERENCE]; 2];
        let mut ranks = vec![0; teams.len()];

        for conference in Conference::ALL {
            for division in Division::ALL {
                let mut members: Vec<TeamId> = teams
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.conference == conference && t.division == division)
                    .map(|(i, _)| TeamId(i))
                    .collect();
                members.sort_by(|a, b| teams[a.0].id.cmp(&teams[b.0].id));

                let slot = &mut divisions[conference.index()][division.index()];
                if members.len() != DIVISION_SIZE {
                    return Err(ScheduleError::InvalidRoster(vec![ValidationError::new(
                        ValidationErrorKind::WrongDivisionSize,
                        format!("{conference:?}/{division:?} has {} teams", members.len()),
                    )]));
                }
                for (rank, &team) in members.iter().enumerate() {
                    slot[rank] = team;
                    ranks[team.0] = rank;
                }
            }
        }

        Ok(Self {
            teams,
            divisions,
            ranks,
        })
    }

    /// A fixed 32-team roster, already in conference/division/rank order.
    pub fn standard() -> Self {
        const ROSTER: [[[&str; DIVISION_SIZE]; DIVISIONS_PER_CONFERENCE]; 2] = [
            [
                ["BUF", "MIA", "NE", "NYJ"],
                ["BAL", "CIN", "CLE", "PIT"],
                ["HOU", "IND", "JAX", "TEN"],
                ["DEN", "KC", "LAC", "LV"],
            ],
            [
                ["DAL", "NYG", "PHI", "WAS"],
                ["CHI", "DET", "GB", "MIN"],
                ["ATL", "CAR", "NO", "TB"],
                ["ARI", "LAR", "SEA", "SF"],
            ],
        ];

        let mut teams = Vec::with_capacity(LEAGUE_SIZE);
        let mut divisions = [[[TeamId(0); DIVISION_SIZE]; DIVISIONS_PER_CONFERENCE]; 2];
        let mut ranks = Vec::with_capacity(LEAGUE_SIZE);

        for conference in Conference::ALL {
            for division in Division::ALL {
                for (rank, id) in ROSTER[conference.index()][division.index()]
                    .iter()
                    .enumerate()
                {
                    divisions[conference.index()][division.index()][rank] = TeamId(teams.len());
                    ranks.push(rank);
                    teams.push(Team::new(*id, conference, division));
                }
            }
        }

        Self {
            teams,
            divisions,
            ranks,
        }
    }

    /// All teams in arena order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Team ids in ascending order (the canonical processing order).
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.teams.len()).map(TeamId)
    }

    /// Number of teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether the league has no teams (never true for a built league).
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Roster record for a team.
    #[inline]
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    /// Looks up a team by its external id.
    pub fn find(&self, id: &str) -> Option<TeamId> {
        self.teams.iter().position(|t| t.id == id).map(TeamId)
    }

    /// Division members in rank order.
    #[inline]
    pub fn members(&self, conference: Conference, division: Division) -> &[TeamId; DIVISION_SIZE] {
        &self.divisions[conference.index()][division.index()]
    }

    /// The team holding `rank` in the given division.
    #[inline]
    pub fn at_rank(&self, conference: Conference, division: Division, rank: usize) -> TeamId {
        self.divisions[conference.index()][division.index()][rank]
    }

    /// Rank (0..4) of a team within its division.
    #[inline]
    pub fn rank(&self, id: TeamId) -> usize {
        self.ranks[id.0]
    }

    #[inline]
    pub fn conference_of(&self, id: TeamId) -> Conference {
        self.teams[id.0].conference
    }

    #[inline]
    pub fn division_of(&self, id: TeamId) -> Division {
        self.teams[id.0].division
    }
}

impl TryFrom<Vec<Team>> for League {
    type Error = ScheduleError;

    fn try_from(teams: Vec<Team>) -> Result<Self> {
        Self::new(teams)
    }
}

impl From<League> for Vec<Team> {
    fn from(league: League) -> Self {
        league.teams
    }
}
