use crate::calendar::LocalClock;
use crate::celebration::{Celebration, CelebrationStrategy, check_year};
use crate::config::TravelerConfig;
use crate::error::{CelebrationError, CelebrationResult};
use crate::phase::PhaseMachine;
use tracing::{debug, trace, warn};

/// Spans past this many years take long enough to be worth a warning.
pub const SLOW_SPAN_YEARS: i32 = 1_000;

/// Walks the itinerary one hour at a time until the traveler's own clock
/// reads Jan 1 00:00 of the target year.
///
/// The walk gives up once the local year passes the target. Each landing
/// turns the local clock back by less than 24 hours, so once a later year
/// has been reached the target midnight can never show up again.
///
/// Cost is one calendar decomposition per hour between the first departure
/// and the target, about 8.8 million steps per thousand years. Use
/// [`ClosedFormScan`](crate::celebration::ClosedFormScan) for distant years.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeScan;

impl CelebrationStrategy for IterativeScan {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn find(&self, config: &TravelerConfig, year: i32) -> CelebrationResult<Celebration> {
        check_year(config, year)?;
        let machine = PhaseMachine::new(config);
        debug!(year, from = machine.first_departure().0, "scanning itinerary");
        if year - config.base_year > SLOW_SPAN_YEARS {
            warn!(year, base_year = config.base_year, "iterative scan over this many years is slow; closed-form answers the same");
        }

        machine
            .itinerary()
            .map(|(hour, state)| {
                LocalClock::at(config, hour + state.zone.offset()).map(|clock| (hour, state, clock))
            })
            .find_map(|step| match step {
                Err(err) => Some(Err(err)),
                Ok((hour, _, clock)) if clock.year > year => Some(Err(CelebrationError::Logic(format!(
                    "local clock reached year {} at hour {} without seeing {} begin",
                    clock.year, hour.0, year
                )))),
                Ok((hour, state, clock)) if clock.is_new_year_of(year) => {
                    trace!(hour = hour.0, zone = %state.zone, phase = %state.phase, "local midnight");
                    Some(Ok(Celebration {
                        instant: state.on_ground_at(hour),
                        zone: state.zone,
                        phase: state.phase,
                    }))
                }
                Ok(_) => None,
            })
            .unwrap_or_else(|| Err(CelebrationError::Logic("itinerary ended".to_string())))
    }
}
