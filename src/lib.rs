//! Regular-season schedule generation for a 32-team league.
//!
//! Produces a deterministic 18-week schedule (17 games and one bye per
//! team) for a league of 2 conferences × 4 divisions × 4 teams, from the
//! season year alone.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `League`, `Category`, `RawMatchup`,
//!   `ScheduledGame`, `SeasonSchedule`, `Violation`
//! - **`rotation`**: Year-driven partner tables shared by generation and verification
//! - **`scheduler`**: The pipeline (opponents → weeks → byes → assembly) and `SeasonScheduler`
//! - **`config`**: `SeasonConfig` and the week `SlotPattern`
//! - **`validation`**: Roster integrity checks
//! - **`error`**: `ScheduleError`
//!
//! # Determinism
//!
//! Rotation is a pure function of `year - epoch`; every stage iterates in a
//! fixed order. The same year always yields the same schedule, and years
//! twelve apart share the same opponent structure.

pub mod config;
pub mod error;
pub mod models;
pub mod rotation;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
