use crate::celebration::tests::utils::{DEFAULT_CLOCKS, STRATEGIES, celebrator, is_clock_string, stationary};
use crate::celebration::{CelebrationStrategy, Celebrator, ClosedFormScan, IterativeScan, Strategy};
use crate::config::TravelerConfig;
use crate::phase::Phase;
use crate::zone::ZoneIndex;

#[test]
fn test_default_years() {
    for strategy in STRATEGIES {
        let celebrator = celebrator(strategy);
        for (year, expected) in DEFAULT_CLOCKS {
            assert_eq!(Ok(expected.to_string()), celebrator.celebrate(year), "{} with {}", year, strategy);
        }
    }
}

#[test]
fn test_base_year_is_midnight_at_home() {
    let report = celebrator(Strategy::Iterative).report(2020).unwrap();
    assert_eq!("00:00", report.moscow_time);
    assert_eq!(0, report.elapsed_hours);
    assert_eq!(ZoneIndex::MOSCOW, report.zone);
    assert_eq!(Phase::Rest, report.phase);
}

#[test]
fn test_years_before_base_are_rejected() {
    for strategy in STRATEGIES {
        let celebrator = celebrator(strategy);
        for year in [2019, 0, -1, i32::MIN] {
            let err = celebrator.celebrate(year).unwrap_err();
            assert!(err.is_invalid_input(), "{} should be rejected", year);
        }
    }
}

#[test]
fn test_base_year_follows_config() {
    let config = TravelerConfig::default().with_base_year(2000);
    let celebrator = Celebrator::new(config, Strategy::ClosedForm).unwrap();
    assert_eq!(Ok("00:00".to_string()), celebrator.celebrate(2000));
    assert!(celebrator.celebrate(1999).unwrap_err().is_invalid_input());
    // 2000 is a leap year as well, so 2001 plays out like 2021 does from 2020.
    assert_eq!(Ok("03:00".to_string()), celebrator.celebrate(2001));
}

#[test]
fn test_report_fields() {
    let report = celebrator(Strategy::ClosedForm).report(2021).unwrap();
    assert_eq!(2021, report.year);
    assert_eq!("03:00", report.moscow_time);
    assert_eq!(366 * 24 + 3, report.elapsed_hours);
    assert_eq!(ZoneIndex::new(21), report.zone);
    assert_eq!(-3, report.offset);
    assert_eq!(Phase::Rest, report.phase);
}

#[test]
fn test_report_serializes_to_json() {
    let report = celebrator(Strategy::ClosedForm).report(2021).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!("03:00", json["moscow_time"]);
    assert_eq!(21, json["zone"]);
    assert_eq!("rest", json["phase"]);
}

#[test]
fn test_overridden_config_reaches_every_component() {
    for strategy in STRATEGIES {
        let flying = Celebrator::new(stationary(0, Phase::Flight), strategy).unwrap();
        let resting = Celebrator::new(stationary(0, Phase::Rest), strategy).unwrap();
        for year in 2021..2026 {
            assert_eq!(Ok("01:00".to_string()), flying.celebrate(year));
            assert_eq!(Ok("00:00".to_string()), resting.celebrate(year));
        }
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = TravelerConfig::default().with_rest_hours(0);
    assert!(Celebrator::new(config, Strategy::Iterative).is_err());
}

#[test]
fn test_output_shape() {
    let celebrator = celebrator(Strategy::ClosedForm);
    let mut celebrated = 0;
    for year in 2020..2400 {
        match celebrator.celebrate(year) {
            Ok(clock) => {
                assert!(is_clock_string(&clock), "{} gave {}", year, clock);
                celebrated += 1;
            }
            Err(err) => assert!(err.is_logic(), "{} failed with {}", year, err),
        }
    }
    assert!(celebrated > 0);
}

#[test]
fn test_skipped_years_are_logic_errors_from_both_strategies() {
    // Landing from zone 15 (-9) in zone 12 (+12) pushes the local clock 21
    // hours ahead; a local midnight inside that jump is never seen.
    for strategy in STRATEGIES {
        let celebrator = celebrator(strategy);
        assert!(celebrator.celebrate(2028).unwrap_err().is_logic(), "2028 with {}", strategy);
        assert!(celebrator.celebrate(2031).unwrap_err().is_logic(), "2031 with {}", strategy);
        assert_eq!(Ok("18:00".to_string()), celebrator.celebrate(2029), "2029 with {}", strategy);
        assert_eq!(Ok("14:00".to_string()), celebrator.celebrate(2030), "2030 with {}", strategy);
    }
}

#[test]
fn test_strategies_agree_every_year_until_2060() {
    let config = TravelerConfig::default();
    let mut celebrated = 0;
    for year in 2021..=2060 {
        match (IterativeScan.find(&config, year), ClosedFormScan.find(&config, year)) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.instant, b.instant, "instants differ for {}", year);
                celebrated += 1;
            }
            (Err(a), Err(b)) => assert!(a.is_logic() && b.is_logic(), "{}: {} vs {}", year, a, b),
            (a, b) => panic!("{}: iterative {:?} vs closed-form {:?}", year, a, b),
        }
    }
    assert_eq!(27, celebrated);
}

#[test]
fn test_cross_check_accepts_shared_failures() {
    let celebrator = celebrator(Strategy::Iterative);
    assert_eq!("14:00", celebrator.cross_check(2030).unwrap().moscow_time);

    let err = celebrator.cross_check(2028).unwrap_err();
    assert!(err.is_logic());
    assert!(!err.to_string().contains("disagree"), "{}", err);

    assert!(celebrator.cross_check(2019).unwrap_err().is_invalid_input());
}

#[test]
fn test_outcomes_keep_every_year() {
    let outcomes = celebrator(Strategy::ClosedForm).outcomes(2021..=2040, false);
    assert_eq!((2021..=2040).collect::<Vec<_>>(), outcomes.iter().map(|o| o.year).collect::<Vec<_>>());
    assert_eq!(11, outcomes.iter().filter(|o| o.result.is_ok()).count());
    assert!(outcomes[7].result.as_ref().unwrap_err().is_logic());
    assert_eq!("14:00", outcomes[9].result.as_ref().unwrap().moscow_time);
}

#[test]
fn test_outcomes_with_check() {
    let outcomes = celebrator(Strategy::ClosedForm).outcomes([2021, 2028, 2019], true);
    assert_eq!("03:00", outcomes[0].result.as_ref().unwrap().moscow_time);
    assert!(outcomes[1].result.as_ref().unwrap_err().is_logic());
    assert!(outcomes[2].result.as_ref().unwrap_err().is_invalid_input());
}

#[test]
fn test_with_strategy_keeps_config() {
    let config = stationary(3, Phase::Rest);
    let celebrator = Celebrator::new(config, Strategy::Iterative).unwrap().with_strategy(Strategy::ClosedForm);
    assert_eq!(Strategy::ClosedForm, celebrator.strategy());
    assert_eq!(&config, celebrator.config());
}
