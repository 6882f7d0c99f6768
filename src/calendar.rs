//! Gregorian day counting relative to the configured epoch.
//!
//! The closed-form search only ever needs the number of days between the
//! base year and the target year; the hour-stepping search needs the full
//! wall-clock reading of an instant, which is delegated to chrono.

use crate::config::TravelerConfig;
use crate::error::{CelebrationError, CelebrationResult};
use crate::time::Hour;
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

pub const DAYS_IN_YEAR: i64 = 365;

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Leap years in `1..=year`.
pub fn leap_years_through(year: i64) -> i64 {
    year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
}

/// Leap years strictly below `year`.
pub fn leap_years_before(year: i64) -> i64 {
    leap_years_through(year - 1)
}

/// Days from Jan 1 of the base year to Jan 1 of `year`.
pub fn days_from_base_year_to_year_start(config: &TravelerConfig, year: i32) -> CelebrationResult<i64> {
    if year < config.base_year {
        return Err(CelebrationError::InvalidInput(format!(
            "year {} precedes base year {}",
            year, config.base_year
        )));
    }
    if year == config.base_year {
        return Ok(0);
    }
    let (year, base) = (year as i64, config.base_year as i64);
    Ok(DAYS_IN_YEAR * (year - base) + (leap_years_before(year) - leap_years_before(base)))
}

/// Wall-clock reading of an instant in some zone, at hour resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalClock {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl LocalClock {
    /// Reads the clock `local` hours after the epoch of `config`.
    pub fn at(config: &TravelerConfig, local: Hour) -> CelebrationResult<LocalClock> {
        let epoch = config.epoch().ok_or_else(|| {
            CelebrationError::Logic(format!("base year {} has no epoch", config.base_year))
        })?;
        let stamp: NaiveDateTime = TimeDelta::try_hours(local.0)
            .and_then(|delta| epoch.checked_add_signed(delta))
            .ok_or_else(|| CelebrationError::Logic(format!("instant {} is outside the calendar", local.0)))?;
        Ok(LocalClock {
            year: stamp.year(),
            month: stamp.month(),
            day: stamp.day(),
            hour: stamp.hour(),
        })
    }

    pub fn is_new_year_of(&self, year: i32) -> bool {
        (self.year, self.month, self.day, self.hour) == (year, 1, 1, 0)
    }
}
