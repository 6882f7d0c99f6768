//! The traveler's flight/rest cycle.
//!
//! There are two ways to ask where the traveler is at a given hour:
//!
//! - step the state one hour at a time from the first departure
//!   ([`TravelerState::step`], [`PhaseMachine::itinerary`]);
//! - classify the hour directly from its position inside the cycle
//!   ([`PhaseMachine::classify`]).
//!
//! Both produce a [`TravelerState`] and must agree for every hour at or
//! after the first departure.

use crate::config::TravelerConfig;
use crate::time::Hour;
use crate::zone::ZoneIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Flight,
    Rest,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::Flight => Phase::Rest,
            Phase::Rest => Phase::Flight,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Flight => write!(f, "flight"),
            Phase::Rest => write!(f, "rest"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerState {
    pub phase: Phase,
    /// Hours left in the current phase, counting the current one. Never zero.
    pub hours_remaining: i64,
    /// Zone the traveler stands in, or took off from while flying.
    pub zone: ZoneIndex,
}

impl TravelerState {
    /// Advances one hour. Landing moves the traveler west; take-off keeps
    /// the zone until the next landing.
    pub fn step(self, config: &TravelerConfig) -> TravelerState {
        if self.hours_remaining > 1 {
            return TravelerState {
                hours_remaining: self.hours_remaining - 1,
                ..self
            };
        }
        match self.phase {
            Phase::Flight => TravelerState {
                phase: Phase::Rest,
                hours_remaining: config.rest_hours,
                zone: self.zone.shifted_west(config.timezone_shift_per_flight),
            },
            Phase::Rest => TravelerState {
                phase: Phase::Flight,
                hours_remaining: config.flight_hours,
                zone: self.zone,
            },
        }
    }

    /// When the traveler next sets foot on the ground, seen from `now`.
    pub fn on_ground_at(&self, now: Hour) -> Hour {
        match self.phase {
            Phase::Rest => now,
            Phase::Flight => now + self.hours_remaining,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PhaseMachine {
    config: TravelerConfig,
}

impl PhaseMachine {
    pub fn new(config: &TravelerConfig) -> PhaseMachine {
        PhaseMachine { config: *config }
    }

    pub fn first_departure(&self) -> Hour {
        Hour(self.config.first_departure_hour)
    }

    pub fn initial_state(&self) -> TravelerState {
        TravelerState {
            phase: self.config.initial_phase,
            hours_remaining: self.config.phase_duration(self.config.initial_phase),
            zone: self.config.start_zone,
        }
    }

    /// State after `steps` hourly steps from the first departure.
    pub fn state_after(&self, steps: i64) -> TravelerState {
        (0..steps).fold(self.initial_state(), |state, _| state.step(&self.config))
    }

    /// Every hour from the first departure onward, paired with the state
    /// the traveler is in during that hour.
    pub fn itinerary(&self) -> impl Iterator<Item = (Hour, TravelerState)> + use<> {
        let config = self.config;
        std::iter::successors(Some((self.first_departure(), self.initial_state())), move |&(hour, state)| {
            Some((hour + 1, state.step(&config)))
        })
    }

    /// Completed cycles at `hour`, `None` before the first departure.
    pub fn cycle_of(&self, hour: Hour) -> Option<i64> {
        let elapsed = hour - self.first_departure();
        (elapsed >= 0).then(|| elapsed.div_euclid(self.config.cycle_length()))
    }

    /// Closed-form state at `hour`. Before the first departure the traveler
    /// waits in the start zone.
    pub fn classify(&self, hour: Hour) -> TravelerState {
        let config = &self.config;
        let elapsed = hour - self.first_departure();
        if elapsed < 0 {
            return TravelerState {
                phase: Phase::Rest,
                hours_remaining: -elapsed,
                zone: config.start_zone,
            };
        }

        let cycle = config.cycle_length();
        let k = elapsed.div_euclid(cycle);
        let into_cycle = elapsed.rem_euclid(cycle);
        let lead = config.initial_phase;
        let lead_hours = config.phase_duration(lead);

        let (phase, hours_remaining) = if into_cycle < lead_hours {
            (lead, lead_hours - into_cycle)
        } else {
            (lead.next(), cycle - into_cycle)
        };
        // Landings completed so far: one per full cycle, plus the current
        // cycle's flight once a flight-first cycle has moved on to rest.
        let landings = k + i64::from(lead == Phase::Flight && phase == Phase::Rest);

        TravelerState {
            phase,
            hours_remaining,
            zone: config
                .start_zone
                .shifted_west(config.timezone_shift_per_flight * landings),
        }
    }
}
