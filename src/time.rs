use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

pub const HOURS_PER_DAY: i64 = 24;

/// Whole hours elapsed since the epoch, counted on the Moscow clock.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, Serialize, Deserialize, PartialOrd)]
pub struct Hour(pub i64);

impl Hour {
    pub fn from_days(days: i64) -> Hour {
        Hour(days * HOURS_PER_DAY)
    }

    /// Hour of the Moscow day, always in `0..24`.
    pub fn hour_of_day(self) -> i64 {
        self.0.rem_euclid(HOURS_PER_DAY)
    }

    /// Moscow wall clock as `HH:MM`. Minutes are always zero.
    pub fn clock(self) -> String {
        format!("{:02}:00", self.hour_of_day())
    }
}

impl std::fmt::Display for Hour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let days = self.0.div_euclid(HOURS_PER_DAY);
        write!(f, "DAY{} {}", days + 1, self.clock())
    }
}

impl Add<i64> for Hour {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Hour(self.0 + rhs)
    }
}

impl Sub<i64> for Hour {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        Hour(self.0 - rhs)
    }
}

impl Sub<Hour> for Hour {
    type Output = i64;

    fn sub(self, rhs: Hour) -> Self::Output {
        self.0 - rhs.0
    }
}

impl AddAssign<i64> for Hour {
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}
