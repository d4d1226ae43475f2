//! Tests for Parameters construction and validation

use pandemic_simulator_core_rs::{Parameters, SimulationEngine, SimulationError};

#[test]
fn test_valid_construction() {
    let params = Parameters::new(2.0, 0.1, 0.2, 100).unwrap();
    assert_eq!(params.r0(), 2.0);
    assert_eq!(params.mortality_rate(), 0.1);
    assert_eq!(params.mortality_rate_no_hospital(), 0.2);
    assert_eq!(params.total_beds(), 100);
}

#[test]
fn test_negative_r0_rejected() {
    let err = Parameters::new(-1.0, 0.1, 0.2, 100).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter(_)));
}

#[test]
fn test_negative_rates_rejected() {
    assert!(Parameters::new(2.0, -0.01, 0.2, 100).is_err());
    assert!(Parameters::new(2.0, 0.1, -0.01, 100).is_err());
}

#[test]
fn test_initial_occupancy_exceeding_capacity_rejected() {
    let params = Parameters::new(2.0, 0.1, 0.2, 10).unwrap();
    let err = SimulationEngine::new(params, 20.0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidParameter(_)));
}

#[test]
fn test_negative_initial_occupancy_rejected() {
    let params = Parameters::new(2.0, 0.1, 0.2, 10).unwrap();
    assert!(SimulationEngine::new(params, -1.0).is_err());
}

#[test]
fn test_occupancy_at_exact_capacity_accepted() {
    let params = Parameters::new(2.0, 0.1, 0.2, 10).unwrap();
    let engine = SimulationEngine::new(params, 10.0).unwrap();
    assert_eq!(engine.state().free_beds(), 0.0);
}

#[test]
fn test_zero_r0_accepted() {
    // r0 = 0 is a valid degenerate scenario: the outbreak dies out in a day
    assert!(Parameters::new(0.0, 0.1, 0.2, 100).is_ok());
}

#[test]
fn test_error_messages_name_the_offending_parameter() {
    let err = Parameters::new(2.0, 0.1, -0.2, 100).unwrap_err();
    assert!(err.to_string().contains("mortality_rate_no_hospital"));
}
