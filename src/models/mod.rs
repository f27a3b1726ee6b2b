//! League scheduling domain models.
//!
//! Provides the core data types for a season: the league structure that
//! is supplied from outside, the matchups derived from it, and the
//! per-team timelines produced at the end.
//!
//! # Pipeline Mapping
//!
//! | Stage | Consumes | Produces |
//! |-------|----------|----------|
//! | Opponent builder | `League`, year | `RawMatchup` |
//! | Week allocator | `RawMatchup` | `ScheduledGame` |
//! | Bye allocator | `ScheduledGame` | `ByeAssignment` |
//! | Assembler | games + byes | `SeasonSchedule`, `Violation` |

mod category;
mod league;
mod matchup;
mod schedule;
mod team;

pub use category::{Category, GAMES_PER_TEAM};
pub use league::{League, DIVISIONS_PER_CONFERENCE, DIVISION_SIZE, LEAGUE_SIZE};
pub use matchup::{MatchupId, RawMatchup, ScheduledGame, Week, SEASON_WEEKS};
pub use schedule::{
    ByeAssignment, ContractEntry, ScheduleEntry, SeasonSchedule, TeamSchedule, Violation,
    ViolationType,
};
pub use team::{Conference, Division, Team, TeamId};
