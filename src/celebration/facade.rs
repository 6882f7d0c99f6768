use crate::celebration::{Celebration, CelebrationStrategy, ClosedFormScan, IterativeScan, Strategy, check_year};
use crate::config::TravelerConfig;
use crate::error::{CelebrationError, CelebrationResult, ConfigError};
use crate::phase::Phase;
use crate::time::Hour;
use crate::zone::ZoneIndex;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

/// One row of output: a year and the Moscow time it gets celebrated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct CelebrationReport {
    pub year: i32,
    #[tabled(rename = "moscow time")]
    pub moscow_time: String,
    #[tabled(rename = "elapsed hours")]
    pub elapsed_hours: i64,
    pub zone: ZoneIndex,
    pub offset: i64,
    #[tabled(rename = "phase at midnight")]
    pub phase: Phase,
}

impl CelebrationReport {
    fn new(year: i32, celebration: Celebration) -> CelebrationReport {
        CelebrationReport {
            year,
            moscow_time: celebration.instant.clock(),
            elapsed_hours: celebration.instant.0,
            zone: celebration.zone,
            offset: celebration.zone.offset(),
            phase: celebration.phase,
        }
    }
}

/// A year and whatever its lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOutcome {
    pub year: i32,
    pub result: CelebrationResult<CelebrationReport>,
}

fn describe(result: &CelebrationResult<CelebrationReport>) -> String {
    match result {
        Ok(report) => format!("at hour {}", report.elapsed_hours),
        Err(err) => format!("failed ({})", err),
    }
}

/// Validated entry point: owns a configuration and the strategy to run.
#[derive(Debug, Clone, Copy)]
pub struct Celebrator {
    config: TravelerConfig,
    strategy: Strategy,
}

impl Celebrator {
    pub fn new(config: TravelerConfig, strategy: Strategy) -> Result<Celebrator, ConfigError> {
        config.validate()?;
        Ok(Celebrator { config, strategy })
    }

    pub fn config(&self) -> &TravelerConfig {
        &self.config
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn with_strategy(self, strategy: Strategy) -> Celebrator {
        Celebrator { strategy, ..self }
    }

    /// Moscow time, as `HH:MM`, at which the traveler celebrates `year`.
    pub fn celebrate(&self, year: i32) -> CelebrationResult<String> {
        Ok(self.report(year)?.moscow_time)
    }

    pub fn report(&self, year: i32) -> CelebrationResult<CelebrationReport> {
        self.report_with(&self.strategy, year)
    }

    /// Runs both strategies. They agree when they land on the same instant,
    /// or when both fail the same way (a year the traveler skips is a
    /// `Logic` error from each); anything else is a `Logic` error.
    pub fn cross_check(&self, year: i32) -> CelebrationResult<CelebrationReport> {
        let iterative = self.report_with(&IterativeScan, year);
        let closed_form = self.report_with(&ClosedFormScan, year);
        match (iterative, closed_form) {
            (Ok(a), Ok(b)) if a.elapsed_hours == b.elapsed_hours => Ok(b),
            (Err(a), Err(b)) if a == b || (a.is_logic() && b.is_logic()) => Err(b),
            (a, b) => Err(CelebrationError::Logic(format!(
                "strategies disagree for {}: iterative {}, closed-form {}",
                year,
                describe(&a),
                describe(&b)
            ))),
        }
    }

    /// One outcome per year, in order. A failing year does not stop the
    /// rest from being computed.
    pub fn outcomes(&self, years: impl IntoIterator<Item = i32>, check: bool) -> Vec<YearOutcome> {
        years
            .into_iter()
            .map(|year| YearOutcome {
                year,
                result: if check { self.cross_check(year) } else { self.report(year) },
            })
            .collect()
    }

    fn report_with(&self, strategy: &dyn CelebrationStrategy, year: i32) -> CelebrationResult<CelebrationReport> {
        check_year(&self.config, year)?;
        // The base year starts with the traveler still at home.
        if year == self.config.base_year {
            return Ok(CelebrationReport::new(
                year,
                Celebration {
                    instant: Hour(0),
                    zone: ZoneIndex::MOSCOW,
                    phase: Phase::Rest,
                },
            ));
        }
        let celebration = strategy.find(&self.config, year)?;
        debug!(year, strategy = strategy.name(), instant = %celebration.instant, "celebration found");
        Ok(CelebrationReport::new(year, celebration))
    }
}
