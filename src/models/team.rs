//! Team model.
//!
//! Teams are supplied by the embedding application as a static roster.
//! Inside the scheduler they are referred to by a dense [`TeamId`] index
//! into the [`League`](super::League) arena.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two conferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Conference {
    A,
    B,
}

impl Conference {
    /// Both conferences, in index order.
    pub const ALL: [Conference; 2] = [Conference::A, Conference::B];

    /// Dense index (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Conference::A => 0,
            Conference::B => 1,
        }
    }
}

/// One of the four divisions inside a conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    D1,
    D2,
    D3,
    D4,
}

impl Division {
    /// All divisions, in index order.
    pub const ALL: [Division; 4] = [Division::D1, Division::D2, Division::D3, Division::D4];

    /// Dense index (0..4).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Division::D1 => 0,
            Division::D2 => 1,
            Division::D3 => 2,
            Division::D4 => 3,
        }
    }

    /// Division for a dense index, `None` outside 0..4.
    pub fn from_index(index: usize) -> Option<Division> {
        Division::ALL.get(index).copied()
    }
}

/// Dense team handle: index into the league's team arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub usize);

impl TeamId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A roster record: identifier plus conference/division placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique external identifier (e.g. an abbreviation).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    pub conference: Conference,
    pub division: Division,
}

impl Team {
    /// Creates a team with the given placement.
    pub fn new(id: impl Into<String>, conference: Conference, division: Division) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            conference,
            division,
        }
    }

    /// Sets the team name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
