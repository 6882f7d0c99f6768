use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

pub const ZONE_COUNT: i64 = 24;

/// One of 24 one-hour longitude slots. Index 0 is Moscow; the value is
/// always kept in `0..24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct ZoneIndex(u8);

impl ZoneIndex {
    pub const MOSCOW: ZoneIndex = ZoneIndex(0);

    pub fn new(index: i64) -> ZoneIndex {
        ZoneIndex(index.rem_euclid(ZONE_COUNT) as u8)
    }

    pub fn get(self) -> i64 {
        self.0 as i64
    }

    /// Signed offset from Moscow in hours: indices 0..=12 map to 0..=12,
    /// indices 13..=23 map to -11..=-1.
    pub fn offset(self) -> i64 {
        let index = self.get();
        if index > 12 { index - ZONE_COUNT } else { index }
    }

    pub fn shifted_west(self, zones: i64) -> ZoneIndex {
        ZoneIndex::new(self.get() - zones)
    }

    pub fn all() -> impl Iterator<Item = ZoneIndex> {
        (0..ZONE_COUNT).map(ZoneIndex::new)
    }
}

impl From<i64> for ZoneIndex {
    fn from(index: i64) -> Self {
        ZoneIndex::new(index)
    }
}

impl From<ZoneIndex> for i64 {
    fn from(zone: ZoneIndex) -> Self {
        zone.get()
    }
}

impl fmt::Display for ZoneIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
