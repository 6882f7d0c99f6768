use crate::celebration::tests::utils::stationary;
use crate::celebration::{CelebrationStrategy, ClosedFormScan};
use crate::config::TravelerConfig;
use crate::phase::Phase;
use crate::time::Hour;
use crate::zone::ZoneIndex;

#[test]
fn test_first_new_year_is_met_resting_three_zones_west() {
    let celebration = ClosedFormScan.find(&TravelerConfig::default(), 2021).unwrap();

    assert_eq!(Hour(366 * 24 + 3), celebration.instant);
    assert_eq!(ZoneIndex::new(21), celebration.zone);
    assert_eq!(Phase::Rest, celebration.phase);
}

#[test]
fn test_landing_instant_for_flight_candidate() {
    let config = stationary(0, Phase::Flight);
    let celebration = ClosedFormScan.find(&config, 2030).unwrap();

    let midnight = Hour::from_days(crate::calendar::days_from_base_year_to_year_start(&config, 2030).unwrap());
    assert_eq!(Phase::Flight, celebration.phase);
    assert_eq!(ZoneIndex::MOSCOW, celebration.zone);
    assert_eq!(midnight + 1, celebration.instant);
}

#[test]
fn test_start_zone_shifts_local_midnight() {
    let celebration = ClosedFormScan.find(&stationary(5, Phase::Rest), 2021).unwrap();

    assert_eq!(ZoneIndex::new(5), celebration.zone);
    assert_eq!(Phase::Flight, celebration.phase);
    assert_eq!(Hour(366 * 24 - 4), celebration.instant);
}

#[test]
fn test_base_year_has_no_candidate() {
    let err = ClosedFormScan.find(&TravelerConfig::default(), 2020).unwrap_err();
    assert!(err.is_logic());
}

#[test]
fn test_year_before_base_is_invalid_input() {
    let err = ClosedFormScan.find(&TravelerConfig::default(), 1).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_year_past_supported_range_is_invalid_input() {
    let err = ClosedFormScan.find(&TravelerConfig::default(), crate::config::MAX_YEAR + 1).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_far_future_years() {
    let config = TravelerConfig::default();
    let celebration = ClosedFormScan.find(&config, 99_997).unwrap();
    assert_eq!("14:00", celebration.instant.clock());

    // The last supported year is one the traveler skips, not one out of range.
    let err = ClosedFormScan.find(&config, crate::config::MAX_YEAR).unwrap_err();
    assert!(err.is_logic());
}
