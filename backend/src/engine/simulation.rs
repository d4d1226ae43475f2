//! Simulation Engine - the daily state-update loop
//!
//! Advances the outbreak one day at a time, enforcing the hospital bed
//! capacity constraint and deriving deaths and recoveries from bed occupancy.
//!
//! # Daily step order
//!
//! ```text
//! For each day d:
//! 1. Discharge recoveries (10% of occupied beds, applied at day start,
//!    freeing capacity before that day's admissions)
//! 2. new_infections      = previous day's new infections * r0
//! 3. new_hospitalizations = min(free_beds, new_infections)
//! 4. new_deaths          = hospitalized * mortality_rate
//!                        + unhospitalized * mortality_rate_no_hospital
//! 5. Accumulate into the cumulative series
//! ```
//!
//! The recovery-before-admission order is fixed and deliberate: beds freed by
//! that morning's discharges are available to the same day's new patients.
//!
//! # Example
//!
//! ```rust
//! use pandemic_simulator_core_rs::{Parameters, SimulationEngine};
//!
//! let params = Parameters::new(2.0, 0.1, 0.2, 100).unwrap();
//! let mut engine = SimulationEngine::new(params, 0.0).unwrap();
//!
//! let series = engine.run(30, 10.0).unwrap();
//! assert_eq!(series.infections.len(), 31); // day 0 seed + 30 days
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::params::Parameters;
use crate::models::state::BedState;

/// Fraction of occupied beds that recover and free up each day
pub const RECOVERY_FRACTION: f64 = 0.10;

/// Errors that can occur during simulation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// A parameter failed validation (negative rate, occupancy over capacity)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The engine was driven into or from an impossible state; signals a
    /// caller or logic bug rather than bad user input
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Instantaneous outcome of a single simulated day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayOutcome {
    /// Infections that occurred this day
    pub new_infections: f64,
    /// Patients admitted this day (capacity limited)
    pub new_hospitalizations: f64,
    /// Deaths this day, across hospitalized and unhospitalized
    pub new_deaths: f64,
    /// Patients discharged this day
    pub new_recoveries: f64,
}

/// Cumulative output series from [`SimulationEngine::run`]
///
/// Each vector has length `days + 1`; index 0 is the day-0 seed row
/// `(initial_infections, 0, 0, 0)` and entry `i` is the running total
/// through day `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSeries {
    /// Cumulative infections per day
    pub infections: Vec<f64>,
    /// Cumulative hospital admissions per day
    pub hospitalizations: Vec<f64>,
    /// Cumulative deaths per day
    pub deaths: Vec<f64>,
    /// Cumulative recoveries per day
    pub recoveries: Vec<f64>,
}

impl SimulationSeries {
    fn with_seed(days: usize, initial_infections: f64) -> Self {
        let mut infections = Vec::with_capacity(days + 1);
        infections.push(initial_infections);
        Self {
            infections,
            hospitalizations: seeded_series(days),
            deaths: seeded_series(days),
            recoveries: seeded_series(days),
        }
    }

    /// Number of simulated days covered (excluding the day-0 seed)
    pub fn days(&self) -> usize {
        self.infections.len().saturating_sub(1)
    }
}

fn seeded_series(days: usize) -> Vec<f64> {
    let mut series = Vec::with_capacity(days + 1);
    series.push(0.0);
    series
}

/// Deterministic day-stepper for the outbreak model
///
/// Owns the fixed [`Parameters`] and the mutable [`BedState`]. The only
/// mutation paths are [`advance_day`](Self::advance_day) (one step) and
/// [`run`](Self::run) (full horizon); `run` always resets bed occupancy to
/// the construction-time value first, so repeated calls on the same engine
/// return identical series.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    params: Parameters,
    initial_occupied_beds: f64,
    state: BedState,
}

impl SimulationEngine {
    /// Create a new engine from validated parameters and starting occupancy
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if
    /// `initial_occupied_beds` is negative, non-finite, or exceeds the
    /// parameter's total bed count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pandemic_simulator_core_rs::{Parameters, SimulationEngine};
    ///
    /// let params = Parameters::new(2.0, 0.1, 0.2, 100).unwrap();
    /// let engine = SimulationEngine::new(params, 20.0).unwrap();
    /// assert_eq!(engine.state().occupied(), 20.0);
    /// ```
    pub fn new(params: Parameters, initial_occupied_beds: f64) -> Result<Self, SimulationError> {
        let state = BedState::new(params.total_beds(), initial_occupied_beds)?;
        Ok(Self {
            params,
            initial_occupied_beds,
            state,
        })
    }

    /// The engine's fixed parameters
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Current mutable state (occupancy and cumulative totals)
    pub fn state(&self) -> &BedState {
        &self.state
    }

    /// Advance the outbreak by one day
    ///
    /// `current_infections` is the previous day's instantaneous new-infection
    /// count (the day-0 seed on the first call). Recoveries are applied at
    /// day start, before admissions.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidState`] if `current_infections` is
    /// negative or non-finite. Unreachable from `run` with valid parameters,
    /// but checked defensively since it signals a caller bug.
    pub fn advance_day(&mut self, current_infections: f64) -> Result<DayOutcome, SimulationError> {
        if !current_infections.is_finite() || current_infections < 0.0 {
            return Err(SimulationError::InvalidState(format!(
                "current_infections must be non-negative and finite, got {}",
                current_infections
            )));
        }

        // 1. Morning discharges free capacity for today's admissions
        let new_recoveries = self.state.discharge(RECOVERY_FRACTION);

        // 2. Transmission: simple deterministic multiplier, fractional
        //    "people" accepted
        let new_infections = current_infections * self.params.r0();

        // 3. Capacity-limited admission
        let new_hospitalizations = self.state.free_beds().min(new_infections).max(0.0);
        self.state.admit(new_hospitalizations)?;

        // 4. Deaths split by care setting; both terms non-negative because
        //    admissions are capped at new_infections
        let new_deaths = new_hospitalizations * self.params.mortality_rate()
            + (new_infections - new_hospitalizations) * self.params.mortality_rate_no_hospital();

        self.state.record_casualties(new_infections, new_deaths);

        Ok(DayOutcome {
            new_infections,
            new_hospitalizations,
            new_deaths,
            new_recoveries,
        })
    }

    /// Run the full horizon and collect cumulative series
    ///
    /// Resets bed occupancy to the construction-time value before the first
    /// day, so calling `run` twice yields the same result. The returned
    /// series each have length `days + 1`, with the day-0 seed row
    /// `(initial_infections, 0, 0, 0)` at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidState`] if `initial_infections` is
    /// negative or non-finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pandemic_simulator_core_rs::{Parameters, SimulationEngine};
    ///
    /// let params = Parameters::new(2.0, 0.1, 0.2, 100).unwrap();
    /// let mut engine = SimulationEngine::new(params, 0.0).unwrap();
    ///
    /// let series = engine.run(1, 10.0).unwrap();
    /// assert_eq!(series.infections, vec![10.0, 30.0]);
    /// assert_eq!(series.hospitalizations, vec![0.0, 20.0]);
    /// assert_eq!(series.deaths, vec![0.0, 2.0]);
    /// assert_eq!(series.recoveries, vec![0.0, 0.0]);
    /// ```
    pub fn run(
        &mut self,
        days: usize,
        initial_infections: f64,
    ) -> Result<SimulationSeries, SimulationError> {
        // Full reset: leftover occupancy from a prior run never leaks in
        self.state = BedState::new(self.params.total_beds(), self.initial_occupied_beds)?;

        let mut series = SimulationSeries::with_seed(days, initial_infections);
        let mut current_infections = initial_infections;

        for _ in 0..days {
            let outcome = self.advance_day(current_infections)?;

            // cumulative infections sit on top of the day-0 seed
            series
                .infections
                .push(initial_infections + self.state.cumulative_infections());
            series
                .hospitalizations
                .push(self.state.cumulative_hospitalizations());
            series.deaths.push(self.state.cumulative_deaths());
            series.recoveries.push(self.state.cumulative_recoveries());

            current_infections = outcome.new_infections;
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(r0: f64, beds: u64, occupied: f64) -> SimulationEngine {
        let params = Parameters::new(r0, 0.1, 0.2, beds).unwrap();
        SimulationEngine::new(params, occupied).unwrap()
    }

    #[test]
    fn test_advance_day_rejects_negative_infections() {
        let mut e = engine(2.0, 100, 0.0);
        let err = e.advance_day(-5.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidState(_)));
    }

    #[test]
    fn test_advance_day_rejects_nan_infections() {
        let mut e = engine(2.0, 100, 0.0);
        assert!(e.advance_day(f64::NAN).is_err());
    }

    #[test]
    fn test_recovery_runs_before_admission() {
        // Full hospital, 10 beds: morning discharge frees exactly 1 bed,
        // which the same day's patients may then occupy.
        let mut e = engine(2.0, 10, 10.0);
        let outcome = e.advance_day(10.0).unwrap();
        assert_eq!(outcome.new_recoveries, 1.0);
        assert_eq!(outcome.new_hospitalizations, 1.0);
        assert_eq!(e.state().occupied(), 10.0);
    }
}
