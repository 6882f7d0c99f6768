use crate::calendar::days_from_base_year_to_year_start;
use crate::celebration::{Celebration, CelebrationStrategy, check_year};
use crate::config::TravelerConfig;
use crate::error::{CelebrationError, CelebrationResult};
use crate::phase::PhaseMachine;
use crate::time::Hour;
use crate::zone::ZoneIndex;
use tracing::{debug, trace};

/// Checks, for each of the 24 zones, whether the traveler is standing in
/// (or taking off from) that zone at the moment its clock strikes
/// midnight, and keeps the earliest celebration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormScan;

impl ClosedFormScan {
    fn candidate(machine: &PhaseMachine, new_year: Hour, zone: ZoneIndex) -> Option<Celebration> {
        let midnight = new_year - zone.offset();
        if midnight < machine.first_departure() {
            return None;
        }
        let state = machine.classify(midnight);
        trace!(zone = %zone, midnight = midnight.0, at = %state.zone, phase = %state.phase, "candidate");
        (state.zone == zone).then(|| Celebration {
            instant: state.on_ground_at(midnight),
            zone,
            phase: state.phase,
        })
    }
}

impl CelebrationStrategy for ClosedFormScan {
    fn name(&self) -> &'static str {
        "closed-form"
    }

    fn find(&self, config: &TravelerConfig, year: i32) -> CelebrationResult<Celebration> {
        check_year(config, year)?;
        let new_year = Hour::from_days(days_from_base_year_to_year_start(config, year)?);
        let machine = PhaseMachine::new(config);
        debug!(year, moscow_midnight = new_year.0, "scanning zones");

        ZoneIndex::all()
            .filter_map(|zone| ClosedFormScan::candidate(&machine, new_year, zone))
            .min_by_key(|c| c.instant)
            .ok_or_else(|| CelebrationError::Logic(format!("no zone celebrates year {}", year)))
    }
}
