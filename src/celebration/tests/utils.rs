use crate::celebration::{Celebrator, Strategy};
use crate::config::TravelerConfig;
use crate::phase::Phase;
use crate::zone::ZoneIndex;
use proptest::prelude::Strategy as _;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub const STRATEGIES: [Strategy; 2] = [Strategy::Iterative, Strategy::ClosedForm];

/// Default expectations, 2020 through 2027.
pub const DEFAULT_CLOCKS: [(i32, &str); 8] = [
    (2020, "00:00"),
    (2021, "03:00"),
    (2022, "22:00"),
    (2023, "18:00"),
    (2024, "14:00"),
    (2025, "22:00"),
    (2026, "18:00"),
    (2027, "14:00"),
];

pub fn celebrator(strategy: Strategy) -> Celebrator {
    Celebrator::new(TravelerConfig::default(), strategy).unwrap()
}

/// A traveler who never changes zone and alternates one-hour phases
/// starting at the epoch.
pub fn stationary(start_zone: i64, initial_phase: Phase) -> TravelerConfig {
    TravelerConfig::default()
        .with_first_departure_hour(0)
        .with_flight_hours(1)
        .with_rest_hours(1)
        .with_timezone_shift(0)
        .with_start_zone(ZoneIndex::new(start_zone))
        .with_initial_phase(initial_phase)
}

pub fn is_clock_string(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && &s[2..] == ":00"
        && s[..2].parse::<u8>().map_or(false, |h| h < 24)
}

pub fn arb_valid_config() -> impl proptest::strategy::Strategy<Value = TravelerConfig> {
    (
        1990i32..2030,
        0i64..30,
        1i64..9,
        1i64..9,
        0i64..24,
        0i64..24,
        prop_oneof![Just(Phase::Flight), Just(Phase::Rest)],
    )
        .prop_map(|(base, departure, flight, rest, shift, zone, phase)| {
            TravelerConfig::default()
                .with_base_year(base)
                .with_first_departure_hour(departure)
                .with_flight_hours(flight)
                .with_rest_hours(rest)
                .with_timezone_shift(shift)
                .with_start_zone(ZoneIndex::new(zone))
                .with_initial_phase(phase)
        })
        .prop_filter("cycle must outrun the zone shift", |c| c.validate().is_ok())
}
