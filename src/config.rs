use crate::error::ConfigError;
use crate::phase::Phase;
use crate::zone::{ZONE_COUNT, ZoneIndex};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Last year a celebration can be asked for. Hour counts stay far inside
/// `i64` and the epoch-relative calendar stays inside chrono's range.
pub const MAX_YEAR: i32 = 100_000;

/// Everything that shapes the traveler's itinerary. Built once per
/// computation and only ever read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TravelerConfig {
    /// Year whose Jan 1 00:00 (Moscow) is the epoch.
    pub base_year: i32,
    /// Hours after the epoch at which the first phase starts.
    pub first_departure_hour: i64,
    pub flight_hours: i64,
    pub rest_hours: i64,
    /// Zones moved west on every landing.
    pub timezone_shift_per_flight: i64,
    pub start_zone: ZoneIndex,
    pub initial_phase: Phase,
}

impl Default for TravelerConfig {
    fn default() -> Self {
        TravelerConfig {
            base_year: 2020,
            first_departure_hour: 12,
            flight_hours: 2,
            rest_hours: 6,
            timezone_shift_per_flight: 3,
            start_zone: ZoneIndex::MOSCOW,
            initial_phase: Phase::Flight,
        }
    }
}

impl TravelerConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: TravelerConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_year(self, base_year: i32) -> Self {
        TravelerConfig { base_year, ..self }
    }

    pub fn with_first_departure_hour(self, first_departure_hour: i64) -> Self {
        TravelerConfig { first_departure_hour, ..self }
    }

    pub fn with_flight_hours(self, flight_hours: i64) -> Self {
        TravelerConfig { flight_hours, ..self }
    }

    pub fn with_rest_hours(self, rest_hours: i64) -> Self {
        TravelerConfig { rest_hours, ..self }
    }

    pub fn with_timezone_shift(self, timezone_shift_per_flight: i64) -> Self {
        TravelerConfig { timezone_shift_per_flight, ..self }
    }

    pub fn with_start_zone(self, start_zone: ZoneIndex) -> Self {
        TravelerConfig { start_zone, ..self }
    }

    pub fn with_initial_phase(self, initial_phase: Phase) -> Self {
        TravelerConfig { initial_phase, ..self }
    }

    pub fn cycle_length(&self) -> i64 {
        self.flight_hours + self.rest_hours
    }

    pub fn phase_duration(&self, phase: Phase) -> i64 {
        match phase {
            Phase::Flight => self.flight_hours,
            Phase::Rest => self.rest_hours,
        }
    }

    /// 00:00 on Jan 1 of the base year. `None` only for base years chrono
    /// cannot represent, which `validate` rejects.
    pub fn epoch(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.base_year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_YEAR).contains(&self.base_year) {
            return Err(ConfigError::Invalid(format!(
                "base_year must be in 1..={}, got {}",
                MAX_YEAR, self.base_year
            )));
        }
        if self.first_departure_hour < 0 {
            return Err(ConfigError::Invalid(format!(
                "first_departure_hour must not be negative, got {}",
                self.first_departure_hour
            )));
        }
        if self.flight_hours < 1 || self.rest_hours < 1 {
            return Err(ConfigError::Invalid(format!(
                "flight_hours and rest_hours must be at least 1, got {} and {}",
                self.flight_hours, self.rest_hours
            )));
        }
        if !(0..ZONE_COUNT).contains(&self.timezone_shift_per_flight) {
            return Err(ConfigError::Invalid(format!(
                "timezone_shift_per_flight must be in 0..{}, got {}",
                ZONE_COUNT, self.timezone_shift_per_flight
            )));
        }
        // The local clock has to gain time over every cycle, otherwise the
        // traveler could drift backwards forever and never reach a year.
        if self.cycle_length() <= self.timezone_shift_per_flight {
            return Err(ConfigError::Invalid(format!(
                "cycle length {} must exceed timezone_shift_per_flight {}",
                self.cycle_length(),
                self.timezone_shift_per_flight
            )));
        }
        Ok(())
    }
}
