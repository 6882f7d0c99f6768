//! When does a traveler who keeps flying west see the new year arrive?
//!
//! The traveler alternates fixed-length flights and rests, moving a fixed
//! number of time zones west on every landing. For a target year the crate
//! finds the Moscow time at which the traveler celebrates it: at local
//! midnight when resting, or on touchdown when local midnight strikes
//! mid-flight. Some years are never seen at all: a landing that crosses
//! from zone 15 to zone 12 moves the local clock 21 hours forward, and a
//! local midnight inside that jump is a `Logic` error from either strategy.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`zone`]      | `ZoneIndex` and its offset from Moscow                  |
//! | [`calendar`]  | leap years, day counts, local clock readings            |
//! | [`time`]      | `Hour`, elapsed hours since the epoch                   |
//! | [`phase`]     | flight/rest cycle, stepped and closed-form              |
//! | [`celebration`] | the two search strategies and the `Celebrator` entry point |
//! | [`config`]    | `TravelerConfig`                                        |
//! | [`error`]     | `CelebrationError`, `ConfigError`                       |

pub mod calendar;
pub mod celebration;
pub mod config;
pub mod error;
pub mod phase;
pub mod time;
pub mod zone;

pub use celebration::{CelebrationReport, Celebrator, Strategy, YearOutcome};
pub use config::TravelerConfig;
pub use error::{CelebrationError, ConfigError};
