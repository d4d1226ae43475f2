//! Pandemic Simulator Core - Rust Engine
//!
//! Deterministic day-by-day outbreak simulator with hospital-capacity
//! constraints.
//!
//! # Architecture
//!
//! - **models**: Domain types (Parameters, BedState)
//! - **engine**: The daily state-update loop (SimulationEngine)
//! - **config**: Scenario file loading (JSON parameter records)
//!
//! # Critical Invariants
//!
//! 1. `0 <= occupied_beds <= total_beds` after every mutation
//! 2. All cumulative series are monotonically non-decreasing
//! 3. The engine is deterministic: same inputs, same series
//! 4. The core never logs or prints; failures propagate as `Result`

// Module declarations
pub mod config;
pub mod engine;
pub mod models;

// Re-exports for convenience
pub use config::ScenarioConfig;
pub use engine::{DayOutcome, SimulationEngine, SimulationError, SimulationSeries};
pub use models::{
    params::Parameters,
    state::BedState,
};
