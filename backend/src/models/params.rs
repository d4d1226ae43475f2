//! Epidemiological and resource parameters
//!
//! Parameters are fixed for the lifetime of a run: they are validated once at
//! construction and never mutated by the engine. There is no public unchecked
//! setter; every path into a `Parameters` goes through [`Parameters::new`].

use serde::{Deserialize, Serialize};

use crate::engine::SimulationError;

/// Immutable per-run simulation parameters
///
/// # Example
/// ```
/// use pandemic_simulator_core_rs::Parameters;
///
/// let params = Parameters::new(2.0, 0.1, 0.2, 100).unwrap();
/// assert_eq!(params.r0(), 2.0);
/// assert_eq!(params.total_beds(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Expected new infections per existing infection per day
    r0: f64,

    /// Daily death fraction among hospitalized patients
    mortality_rate: f64,

    /// Daily death fraction among unhospitalized patients
    mortality_rate_no_hospital: f64,

    /// Total hospital beds available to the simulation
    total_beds: u64,
}

impl Parameters {
    /// Create validated parameters
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if any rate is negative
    /// or non-finite. Rates above 1.0 are accepted: the model treats them as
    /// a caller's modeling choice, not an input error.
    pub fn new(
        r0: f64,
        mortality_rate: f64,
        mortality_rate_no_hospital: f64,
        total_beds: u64,
    ) -> Result<Self, SimulationError> {
        check_rate("r0", r0)?;
        check_rate("mortality_rate", mortality_rate)?;
        check_rate("mortality_rate_no_hospital", mortality_rate_no_hospital)?;

        Ok(Self {
            r0,
            mortality_rate,
            mortality_rate_no_hospital,
            total_beds,
        })
    }

    /// Basic reproduction number
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Daily mortality rate for hospitalized patients
    pub fn mortality_rate(&self) -> f64 {
        self.mortality_rate
    }

    /// Daily mortality rate for unhospitalized patients
    pub fn mortality_rate_no_hospital(&self) -> f64 {
        self.mortality_rate_no_hospital
    }

    /// Total hospital bed capacity
    pub fn total_beds(&self) -> u64 {
        self.total_beds
    }
}

/// Reject negative or non-finite rates, never clamp them
fn check_rate(name: &str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimulationError::InvalidParameter(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(())
}
