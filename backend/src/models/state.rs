//! Bed occupancy and cumulative outbreak state
//!
//! Holds the one piece of mutable state the simulation owns: hospital bed
//! occupancy, plus the running totals accumulated across days. Counts are
//! `f64` because the model produces fractional "people" by design; callers
//! needing integral counts round downstream.
//!
//! # Critical Invariants
//!
//! 1. `0 <= occupied <= total_beds` after every mutation
//! 2. Cumulative counters only ever increase
//!
//! Both are enforced here: all mutation goes through [`BedState::discharge`]
//! and [`BedState::admit`], and there is no public setter.

use serde::{Deserialize, Serialize};

use crate::engine::SimulationError;

/// Mutable simulation state: bed occupancy plus cumulative totals
///
/// # Example
/// ```
/// use pandemic_simulator_core_rs::BedState;
///
/// let mut state = BedState::new(100, 40.0).unwrap();
/// assert_eq!(state.free_beds(), 60.0);
///
/// let freed = state.discharge(0.10); // 10% of occupied beds recover
/// assert_eq!(freed, 4.0);
/// assert_eq!(state.occupied(), 36.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedState {
    /// Total bed capacity (fixed for the run)
    total_beds: u64,

    /// Beds currently in use; fractional occupancy is allowed
    occupied: f64,

    /// Running total of infections through the current day
    cumulative_infections: f64,

    /// Running total of hospital admissions
    cumulative_hospitalizations: f64,

    /// Running total of deaths
    cumulative_deaths: f64,

    /// Running total of recoveries (bed discharges)
    cumulative_recoveries: f64,
}

impl BedState {
    /// Create a fresh state with the given starting occupancy
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if `initial_occupied` is
    /// negative, non-finite, or exceeds `total_beds`.
    pub fn new(total_beds: u64, initial_occupied: f64) -> Result<Self, SimulationError> {
        if !initial_occupied.is_finite() || initial_occupied < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "occupied_beds must be a non-negative finite number, got {}",
                initial_occupied
            )));
        }
        if initial_occupied > total_beds as f64 {
            return Err(SimulationError::InvalidParameter(format!(
                "occupied_beds ({}) exceeds total_beds ({})",
                initial_occupied, total_beds
            )));
        }

        Ok(Self {
            total_beds,
            occupied: initial_occupied,
            cumulative_infections: 0.0,
            cumulative_hospitalizations: 0.0,
            cumulative_deaths: 0.0,
            cumulative_recoveries: 0.0,
        })
    }

    /// Beds currently occupied
    pub fn occupied(&self) -> f64 {
        self.occupied
    }

    /// Total bed capacity
    pub fn total_beds(&self) -> u64 {
        self.total_beds
    }

    /// Beds currently free
    pub fn free_beds(&self) -> f64 {
        self.total_beds as f64 - self.occupied
    }

    /// Discharge the given fraction of occupied beds as recoveries
    ///
    /// Returns the number of beds freed. Occupancy is floored at zero and the
    /// recovery total is bumped by the freed amount.
    pub fn discharge(&mut self, fraction: f64) -> f64 {
        let freed = self.occupied * fraction;
        self.occupied = (self.occupied - freed).max(0.0);
        self.cumulative_recoveries += freed;
        freed
    }

    /// Admit patients into free beds
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidState`] if `patients` is negative or
    /// exceeds the free capacity; capacity limiting is the engine's job and a
    /// violation here signals a logic bug upstream.
    pub fn admit(&mut self, patients: f64) -> Result<(), SimulationError> {
        if patients < 0.0 || patients > self.free_beds() {
            return Err(SimulationError::InvalidState(format!(
                "cannot admit {} patients with {} free beds",
                patients,
                self.free_beds()
            )));
        }
        // The min() guards against a one-ulp overshoot when admissions fill
        // the hospital exactly.
        self.occupied = (self.occupied + patients).min(self.total_beds as f64);
        self.cumulative_hospitalizations += patients;
        Ok(())
    }

    /// Record a day's infections and deaths in the running totals
    pub fn record_casualties(&mut self, new_infections: f64, new_deaths: f64) {
        self.cumulative_infections += new_infections;
        self.cumulative_deaths += new_deaths;
    }

    /// Running total of infections
    pub fn cumulative_infections(&self) -> f64 {
        self.cumulative_infections
    }

    /// Running total of hospital admissions
    pub fn cumulative_hospitalizations(&self) -> f64 {
        self.cumulative_hospitalizations
    }

    /// Running total of deaths
    pub fn cumulative_deaths(&self) -> f64 {
        self.cumulative_deaths
    }

    /// Running total of recoveries
    pub fn cumulative_recoveries(&self) -> f64 {
        self.cumulative_recoveries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = BedState::new(100, 25.0).unwrap();
        assert_eq!(state.occupied(), 25.0);
        assert_eq!(state.free_beds(), 75.0);
        assert_eq!(state.cumulative_infections(), 0.0);
    }

    #[test]
    fn test_initial_occupancy_over_capacity_rejected() {
        let err = BedState::new(10, 20.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
    }

    #[test]
    fn test_negative_initial_occupancy_rejected() {
        assert!(BedState::new(10, -1.0).is_err());
    }

    #[test]
    fn test_discharge_frees_beds_and_counts_recoveries() {
        let mut state = BedState::new(100, 50.0).unwrap();
        let freed = state.discharge(0.10);
        assert_eq!(freed, 5.0);
        assert_eq!(state.occupied(), 45.0);
        assert_eq!(state.cumulative_recoveries(), 5.0);
    }

    #[test]
    fn test_discharge_empty_hospital_is_noop() {
        let mut state = BedState::new(100, 0.0).unwrap();
        assert_eq!(state.discharge(0.10), 0.0);
        assert_eq!(state.occupied(), 0.0);
    }

    #[test]
    fn test_admit_within_capacity() {
        let mut state = BedState::new(100, 90.0).unwrap();
        state.admit(10.0).unwrap();
        assert_eq!(state.occupied(), 100.0);
        assert_eq!(state.cumulative_hospitalizations(), 10.0);
    }

    #[test]
    fn test_admit_over_capacity_rejected() {
        let mut state = BedState::new(100, 90.0).unwrap();
        let err = state.admit(11.0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidState(_)));
        // state untouched on failure
        assert_eq!(state.occupied(), 90.0);
    }

    #[test]
    fn test_admit_negative_rejected() {
        let mut state = BedState::new(100, 0.0).unwrap();
        assert!(state.admit(-1.0).is_err());
    }
}
