//! Season generation settings.
//!
//! # Slot Pattern
//!
//! Each of the 18 weeks is dedicated to one matchup category, except one
//! reserved week that the bye allocator claims. Dedicating whole weeks to a
//! category is what keeps the greedy week filling backtrack-free for a
//! 32-team, 8-division league.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::{Category, Week, SEASON_WEEKS};

/// Use of a single week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekSlot {
    /// Every team plays one game of this category.
    Play(Category),
    /// No games; left for byes.
    Reserved,
}

/// Validated week → category mapping for weeks 1..=18.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeekSlot>", into = "Vec<WeekSlot>")]
pub struct SlotPattern {
    slots: Vec<WeekSlot>,
}

impl SlotPattern {
    /// Builds a pattern from 18 slots, week 1 first.
    ///
    /// # Errors
    /// `InvalidSlotPattern` unless there are exactly 18 slots, exactly one
    /// reserved week, and each category gets exactly as many weeks as it
    /// has games per team.
    pub fn new(slots: Vec<WeekSlot>) -> Result<Self> {
        if slots.len() != SEASON_WEEKS as usize {
            return Err(ScheduleError::InvalidSlotPattern(format!(
                "expected {SEASON_WEEKS} weeks, found {}",
                slots.len()
            )));
        }

        let reserved = slots.iter().filter(|s| **s == WeekSlot::Reserved).count();
        if reserved != 1 {
            return Err(ScheduleError::InvalidSlotPattern(format!(
                "expected exactly one reserved week, found {reserved}"
            )));
        }

        for category in Category::ALL {
            let n = slots
                .iter()
                .filter(|s| **s == WeekSlot::Play(category))
                .count();
            if n != category.required_games() {
                return Err(ScheduleError::InvalidSlotPattern(format!(
                    "{category} has {n} weeks, expected {}",
                    category.required_games()
                )));
            }
        }

        Ok(Self { slots })
    }

    /// Slot for a 1-based week; `None` outside 1..=18.
    pub fn slot(&self, week: Week) -> Option<WeekSlot> {
        let index = usize::from(week).checked_sub(1)?;
        self.slots.get(index).copied()
    }

    /// Weeks dedicated to `category`, ascending.
    pub fn weeks_for(&self, category: Category) -> Vec<Week> {
        self.weeks()
            .filter(|&w| self.slot(w) == Some(WeekSlot::Play(category)))
            .collect()
    }

    /// The week left free for byes.
    pub fn reserved_week(&self) -> Week {
        self.weeks()
            .find(|&w| self.slot(w) == Some(WeekSlot::Reserved))
            .unwrap_or(SEASON_WEEKS)
    }

    /// Weeks 1..=18.
    pub fn weeks(&self) -> impl Iterator<Item = Week> {
        1..=SEASON_WEEKS
    }
}

impl Default for SlotPattern {
    /// Spreads each category across the season and reserves week 9.
    fn default() -> Self {
        use Category::*;
        use WeekSlot::*;
        Self {
            slots: vec![
                Play(Division),
                Play(IntraPaired),
                Play(InterPaired),
                Play(Division),
                Play(IntraPaired),
                Play(InterPaired),
                Play(StrengthOfSchedule),
                Play(Division),
                Reserved,
                Play(IntraPaired),
                Play(InterPaired),
                Play(Division),
                Play(StrengthOfSchedule),
                Play(ExtraSeventeenth),
                Play(IntraPaired),
                Play(InterPaired),
                Play(Division),
                Play(Division),
            ],
        }
    }
}

impl TryFrom<Vec<WeekSlot>> for SlotPattern {
    type Error = ScheduleError;

    fn try_from(slots: Vec<WeekSlot>) -> Result<Self> {
        Self::new(slots)
    }
}

impl From<SlotPattern> for Vec<WeekSlot> {
    fn from(pattern: SlotPattern) -> Self {
        pattern.slots
    }
}

/// Settings for generating a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// First season the rotation tables are anchored to.
    pub epoch_year: i32,
    /// Week → category mapping.
    pub slot_pattern: SlotPattern,
    /// Preferred bye window (inclusive).
    pub bye_window: (Week, Week),
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            epoch_year: 2002,
            slot_pattern: SlotPattern::default(),
            bye_window: (5, 14),
        }
    }
}

impl SeasonConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation epoch.
    pub fn with_epoch_year(mut self, epoch_year: i32) -> Self {
        self.epoch_year = epoch_year;
        self
    }

    /// Sets the slot pattern.
    pub fn with_slot_pattern(mut self, pattern: SlotPattern) -> Self {
        self.slot_pattern = pattern;
        self
    }

    /// Sets the preferred bye window (inclusive).
    pub fn with_bye_window(mut self, first: Week, last: Week) -> Self {
        self.bye_window = (first, last);
        self
    }
}
