//! Locating the instant the traveler sees a new year arrive.
//!
//! Two interchangeable strategies answer the same question:
//!
//! | Strategy        | How                                                         |
//! |-----------------|-------------------------------------------------------------|
//! | `IterativeScan` | walks the itinerary hour by hour, reading the local clock   |
//! | `ClosedFormScan`| checks each zone's local midnight against the cycle formula |
//!
//! They must return the same instant for every year.

pub mod closed_form;
pub mod facade;
pub mod iterative;

use crate::config::{MAX_YEAR, TravelerConfig};
use crate::error::{CelebrationError, CelebrationResult};
use crate::phase::Phase;
use crate::time::Hour;
use crate::zone::ZoneIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use closed_form::ClosedFormScan;
pub use facade::{CelebrationReport, Celebrator, YearOutcome};
pub use iterative::IterativeScan;

/// Where and when the traveler celebrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    /// Moscow hours since the epoch at which the celebration happens.
    pub instant: Hour,
    /// Zone whose midnight was celebrated.
    pub zone: ZoneIndex,
    /// What the traveler was doing when that zone struck midnight.
    pub phase: Phase,
}

pub trait CelebrationStrategy {
    fn name(&self) -> &'static str;

    fn find(&self, config: &TravelerConfig, year: i32) -> CelebrationResult<Celebration>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Hour-by-hour walk; cost grows with the distance from the base year,
    /// so only practical within a few thousand years of it.
    #[value(alias = "i")]
    Iterative,
    #[default]
    #[value(alias = "closed", alias = "c")]
    ClosedForm,
}

impl CelebrationStrategy for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Iterative => IterativeScan.name(),
            Strategy::ClosedForm => ClosedFormScan.name(),
        }
    }

    fn find(&self, config: &TravelerConfig, year: i32) -> CelebrationResult<Celebration> {
        match self {
            Strategy::Iterative => IterativeScan.find(config, year),
            Strategy::ClosedForm => ClosedFormScan.find(config, year),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rejects years before the base year or past `MAX_YEAR`.
pub fn check_year(config: &TravelerConfig, year: i32) -> CelebrationResult<()> {
    if year < config.base_year {
        return Err(CelebrationError::InvalidInput(format!(
            "year {} precedes base year {}",
            year, config.base_year
        )));
    }
    if year > MAX_YEAR {
        return Err(CelebrationError::InvalidInput(format!(
            "year {} is past the last supported year {}",
            year, MAX_YEAR
        )));
    }
    Ok(())
}
