//! Scenario file loading
//!
//! Parameters can be supplied as direct scalars or as a JSON key-value
//! document with the recognized keys `r0`, `mortality_rate`,
//! `mortality_rate_no_hospital`, `hospital_beds`, `occupied_beds`. Both
//! sources funnel through the same [`Parameters`] and [`SimulationEngine`]
//! validation, so a scenario file cannot smuggle in values a direct
//! constructor call would reject.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{SimulationEngine, SimulationError};
use crate::models::params::Parameters;

/// Parameter record as read from a scenario file
///
/// # Example
///
/// ```rust
/// use pandemic_simulator_core_rs::ScenarioConfig;
///
/// let config = ScenarioConfig::from_json(
///     r#"{
///         "r0": 2.0,
///         "mortality_rate": 0.1,
///         "mortality_rate_no_hospital": 0.2,
///         "hospital_beds": 100,
///         "occupied_beds": 0
///     }"#,
/// ).unwrap();
///
/// let engine = config.into_engine().unwrap();
/// assert_eq!(engine.params().total_beds(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Basic reproduction number
    pub r0: f64,

    /// Daily death fraction among hospitalized patients
    pub mortality_rate: f64,

    /// Daily death fraction among unhospitalized patients
    pub mortality_rate_no_hospital: f64,

    /// Total hospital bed capacity
    pub hospital_beds: u64,

    /// Beds already occupied at simulation start
    pub occupied_beds: f64,
}

impl ScenarioConfig {
    /// Parse a scenario from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] on malformed JSON or
    /// unrecognized keys. Value validation happens later, in
    /// [`into_engine`](Self::into_engine).
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| {
            SimulationError::InvalidParameter(format!("malformed scenario document: {}", e))
        })
    }

    /// Load a scenario from a JSON file on disk
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if the file cannot be
    /// read or parsed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SimulationError::InvalidParameter(format!(
                "cannot read scenario file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Build a validated engine from this scenario
    ///
    /// Runs the exact same validation as constructing [`Parameters`] and
    /// [`SimulationEngine`] from scalars.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] for any value the
    /// direct constructors would reject.
    pub fn into_engine(self) -> Result<SimulationEngine, SimulationError> {
        let params = Parameters::new(
            self.r0,
            self.mortality_rate,
            self.mortality_rate_no_hospital,
            self.hospital_beds,
        )?;
        SimulationEngine::new(params, self.occupied_beds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "r0": 1.5,
        "mortality_rate": 0.02,
        "mortality_rate_no_hospital": 0.08,
        "hospital_beds": 250,
        "occupied_beds": 40
    }"#;

    #[test]
    fn test_parse_valid_scenario() {
        let config = ScenarioConfig::from_json(VALID).unwrap();
        assert_eq!(config.r0, 1.5);
        assert_eq!(config.hospital_beds, 250);
        assert_eq!(config.occupied_beds, 40.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ScenarioConfig::from_json(r#"{"r0": 1.0, "beds": 5}"#).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidParameter(_)));
    }

    #[test]
    fn test_missing_key_rejected() {
        assert!(ScenarioConfig::from_json(r#"{"r0": 1.0}"#).is_err());
    }

    #[test]
    fn test_into_engine_validates_values() {
        let mut config = ScenarioConfig::from_json(VALID).unwrap();
        config.mortality_rate = -0.5;
        assert!(config.into_engine().is_err());
    }
}
