//! Year-driven rotation tables.
//!
//! Cross-division categories rotate with the season year. The rotation is a
//! pure function of `(year - epoch)`: the intra-conference table cycles every
//! 3 seasons, the inter-conference and seventeenth-game tables every 4, so
//! the full structure repeats every 12 seasons.
//!
//! The opponent builder and the verifier both read partners from
//! [`Rotation`], so the two can never disagree.
//!
//! # Reference
//! Lewis & Thompson (2011), "On the application of graph colouring
//! techniques in round-robin sports scheduling", Computers & OR 38(1)

use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::models::{Conference, Division};

/// Intra-conference partner: `INTRA_ROTATION[k][d]` is the partner of
/// division `d`, in both conferences. Each row is one of the three perfect
/// matchings of four divisions.
const INTRA_ROTATION: [[usize; 4]; 3] = [
    [1, 0, 3, 2],
    [2, 3, 0, 1],
    [3, 2, 1, 0],
];

/// Inter-conference partner: `INTER_ROTATION[k][d]` is the conference-B
/// division paired with conference-A division `d`.
const INTER_ROTATION: [[usize; 4]; 4] = [
    [0, 1, 2, 3],
    [1, 2, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 1, 2],
];

/// Seventeenth-game partner, offset two steps from the inter partner so it
/// never repeats an inter-conference opponent.
const EXTRA17_ROTATION: [[usize; 4]; 4] = [
    [2, 3, 0, 1],
    [3, 0, 1, 2],
    [0, 1, 2, 3],
    [1, 2, 3, 0],
];

/// Resolved rotation for one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rotation {
    year: i32,
    intra: [Division; 4],
    /// `[conference][division]` → partner division in the other conference.
    inter: [[Division; 4]; 2],
    extra: [[Division; 4]; 2],
}

impl Rotation {
    /// Resolves the tables for `year`.
    ///
    /// # Errors
    /// `RotationLookup` if `year` precedes `epoch_year` or a table row is missing.
    pub fn for_year(year: i32, epoch_year: i32) -> Result<Self> {
        let miss = || ScheduleError::RotationLookup { year, epoch_year };
        let offset = usize::try_from(i64::from(year) - i64::from(epoch_year)).map_err(|_| miss())?;

        let intra_row = INTRA_ROTATION
            .get(offset % INTRA_ROTATION.len())
            .ok_or_else(miss)?;
        let inter_row = INTER_ROTATION
            .get(offset % INTER_ROTATION.len())
            .ok_or_else(miss)?;
        let extra_row = EXTRA17_ROTATION
            .get(offset % EXTRA17_ROTATION.len())
            .ok_or_else(miss)?;

        Ok(Self {
            year,
            intra: resolve(intra_row).ok_or_else(miss)?,
            inter: resolve_bijection(inter_row).ok_or_else(miss)?,
            extra: resolve_bijection(extra_row).ok_or_else(miss)?,
        })
    }

    /// Season year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Same-conference division paired with `division` this season.
    #[inline]
    pub fn intra_partner(&self, division: Division) -> Division {
        self.intra[division.index()]
    }

    /// Other-conference division paired with `division` this season.
    #[inline]
    pub fn inter_partner(&self, conference: Conference, division: Division) -> Division {
        self.inter[conference.index()][division.index()]
    }

    /// Other-conference division supplying the seventeenth game.
    #[inline]
    pub fn extra_partner(&self, conference: Conference, division: Division) -> Division {
        self.extra[conference.index()][division.index()]
    }

    /// The two same-conference divisions that are neither `division` nor its
    /// intra partner, ascending.
    pub fn sos_divisions(&self, division: Division) -> [Division; 2] {
        let partner = self.intra_partner(division);
        let mut out = [division; 2];
        let mut n = 0;
        for d in Division::ALL {
            if d != division && d != partner {
                out[n] = d;
                n += 1;
            }
        }
        out
    }

    /// Parity used to alternate home sides between seasons.
    #[inline]
    pub fn parity(&self) -> usize {
        self.year.rem_euclid(2) as usize
    }
}

fn resolve(row: &[usize; 4]) -> Option<[Division; 4]> {
    let mut out = [Division::D1; 4];
    for (slot, &d) in out.iter_mut().zip(row) {
        *slot = Division::from_index(d)?;
    }
    Some(out)
}

/// Resolves an A → B row and derives the inverse B → A row.
fn resolve_bijection(row: &[usize; 4]) -> Option<[[Division; 4]; 2]> {
    let forward = resolve(row)?;
    let mut inverse = [None; 4];
    for a in Division::ALL {
        let b = forward[a.index()];
        if inverse[b.index()].replace(a).is_some() {
            return None;
        }
    }
    let mut back = [Division::D1; 4];
    for (slot, d) in back.iter_mut().zip(inverse) {
        *slot = d?;
    }
    Some([forward, back])
}
