//! Season generation pipeline.
//!
//! Four stages, each feeding the next:
//!
//! 1. **Opponents** (`build_opponents`): who plays whom, with home sides.
//! 2. **Weeks** (`allocate_weeks`): circle-method blocks for paired
//!    divisions, greedy slot filling for the rest.
//! 3. **Byes** (`allocate_byes`): each team's single free week.
//! 4. **Assembly** (`assemble`, `verify_schedule`): per-team timelines,
//!    then an independent recount of every team's categories.
//!
//! Generation is all-or-nothing: any stage failure, including failed
//! verification, returns an error and no schedule.

mod assembler;
mod buckets;
mod byes;
mod opponents;
mod summary;
mod verify;
mod weeks;

pub use assembler::assemble;
pub use buckets::{partition, Bucket};
pub use byes::allocate_byes;
pub use opponents::{build_opponents, OpponentSet};
pub use summary::ScheduleSummary;
pub use verify::{analyze_team_schedule, classify, verify_schedule};
pub use weeks::allocate_weeks;

use log::info;

use crate::config::SeasonConfig;
use crate::error::Result;
use crate::models::{League, SeasonSchedule};
use crate::rotation::Rotation;

/// Generates verified season schedules for a fixed league.
///
/// # Example
///
/// ```
/// use league_schedule::models::League;
/// use league_schedule::scheduler::SeasonScheduler;
///
/// let scheduler = SeasonScheduler::new(League::standard());
/// let season = scheduler.generate(2024).unwrap();
///
/// assert_eq!(season.teams.len(), 32);
/// assert!(season.teams.iter().all(|t| t.entries.len() == 18));
/// ```
#[derive(Debug, Clone)]
pub struct SeasonScheduler {
    league: League,
    config: SeasonConfig,
}

impl SeasonScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new(league: League) -> Self {
        Self {
            league,
            config: SeasonConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SeasonConfig) -> Self {
        self.config = config;
        self
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn config(&self) -> &SeasonConfig {
        &self.config
    }

    /// Generates and verifies the schedule for `year`.
    ///
    /// Deterministic: the same year, league and configuration always give
    /// the same schedule.
    ///
    /// # Errors
    /// Any [`ScheduleError`](crate::error::ScheduleError); see the stage
    /// functions for which stage raises which variant.
    pub fn generate(&self, year: i32) -> Result<SeasonSchedule> {
        let rotation = Rotation::for_year(year, self.config.epoch_year)?;

        let opponents = build_opponents(&self.league, &rotation);
        let games = allocate_weeks(&self.league, &opponents, &self.config.slot_pattern)?;
        let byes = allocate_byes(&self.league, &games, self.config.bye_window, year);
        let schedule = assemble(&self.league, &games, &byes, year)?;

        verify_schedule(&self.league, &rotation, &schedule)?;

        info!(
            "generated season {year}: {} games, byes in week {}",
            opponents.len(),
            self.config.slot_pattern.reserved_week()
        );
        Ok(schedule)
    }
}
