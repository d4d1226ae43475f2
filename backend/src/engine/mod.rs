//! Engine - the daily simulation loop
//!
//! See `simulation.rs` for the day-advance step and the run loop.

pub mod simulation;

// Re-export main types for convenience
pub use simulation::{
    DayOutcome, SimulationEngine, SimulationError, SimulationSeries, RECOVERY_FRACTION,
};
