//! Bucket extraction for paired-division categories.
//!
//! A bucket is a connected component of the team graph formed by one
//! category's matchups. For intra/inter games each bucket must be a complete
//! 4×4 bipartite block: 8 teams and 16 games.
//!
//! # Algorithm
//! Breadth-first search from the lowest unvisited team; sides are inferred
//! from the seed's neighbours.
//!
//! # Complexity
//! O(V + E) per category.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.2 (Breadth-First Search)

use std::collections::VecDeque;

use super::OpponentSet;
use crate::error::{Result, ScheduleError};
use crate::models::{Category, MatchupId, TeamId, DIVISION_SIZE};

const BUCKET_TEAMS: usize = 2 * DIVISION_SIZE;
const BUCKET_GAMES: usize = DIVISION_SIZE * DIVISION_SIZE;

/// A complete bipartite block of two 4-team sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Side containing the seed team, ascending.
    pub side_a: [TeamId; DIVISION_SIZE],
    /// Seed's neighbours, ascending.
    pub side_b: [TeamId; DIVISION_SIZE],
    /// The block's matchups, in canonical order.
    pub games: Vec<MatchupId>,
}

impl Bucket {
    /// Finds the matchup between two teams of this bucket.
    pub fn matchup_between(
        &self,
        set: &OpponentSet,
        x: TeamId,
        y: TeamId,
    ) -> Option<MatchupId> {
        let key = if x < y { (x, y) } else { (y, x) };
        self.games
            .iter()
            .copied()
            .find(|&id| set.get(id).pair() == key)
    }
}

/// Splits one category's matchups into buckets, ordered by lowest team.
///
/// # Errors
/// `BucketShape` if any component is not an 8-team, 16-game complete
/// bipartite block.
pub fn partition(set: &OpponentSet, category: Category) -> Result<Vec<Bucket>> {
    let ids: Vec<MatchupId> = set.ids_of(category).collect();

    let mut adjacency: Vec<Vec<TeamId>> = vec![Vec::new(); set.team_count()];
    for &id in &ids {
        let m = set.get(id);
        adjacency[m.home.index()].push(m.away);
        adjacency[m.away.index()].push(m.home);
    }
    for neighbours in &mut adjacency {
        neighbours.sort();
        neighbours.dedup();
    }

    let mut component = vec![None; set.team_count()];
    let mut components: Vec<Vec<TeamId>> = Vec::new();

    for start in 0..set.team_count() {
        if component[start].is_some() || adjacency[start].is_empty() {
            continue;
        }
        let index = components.len();
        let mut members = Vec::new();
        let mut queue = VecDeque::from([TeamId(start)]);
        component[start] = Some(index);

        while let Some(team) = queue.pop_front() {
            members.push(team);
            for &next in &adjacency[team.index()] {
                if component[next.index()].is_none() {
                    component[next.index()] = Some(index);
                    queue.push_back(next);
                }
            }
        }
        members.sort();
        components.push(members);
    }

    let mut games_by_component = vec![Vec::new(); components.len()];
    for &id in &ids {
        if let Some(c) = component[set.get(id).home.index()] {
            games_by_component[c].push(id);
        }
    }

    components
        .into_iter()
        .zip(games_by_component)
        .map(|(teams, games)| shape_bucket(category, &adjacency, teams, games))
        .collect()
}

fn shape_bucket(
    category: Category,
    adjacency: &[Vec<TeamId>],
    teams: Vec<TeamId>,
    games: Vec<MatchupId>,
) -> Result<Bucket> {
    let shape_error = || ScheduleError::BucketShape {
        category,
        teams: teams.len(),
        games: games.len(),
    };

    if teams.len() != BUCKET_TEAMS || games.len() != BUCKET_GAMES {
        return Err(shape_error());
    }

    let seed = teams[0];
    let side_b: Vec<TeamId> = adjacency[seed.index()].clone();
    let side_a: Vec<TeamId> = teams
        .iter()
        .copied()
        .filter(|t| !side_b.contains(t))
        .collect();

    if side_a.len() != DIVISION_SIZE || side_b.len() != DIVISION_SIZE {
        return Err(shape_error());
    }
    // Complete bipartite: every A meets exactly the B side, and vice versa.
    if side_a.iter().any(|a| adjacency[a.index()] != side_b)
        || side_b.iter().any(|b| adjacency[b.index()] != side_a)
    {
        return Err(shape_error());
    }

    let side_a: [TeamId; DIVISION_SIZE] = side_a.try_into().map_err(|_| shape_error())?;
    let side_b: [TeamId; DIVISION_SIZE] = side_b.try_into().map_err(|_| shape_error())?;

    Ok(Bucket {
        side_a,
        side_b,
        games,
    })
}
