//! Domain models for the pandemic simulator

pub mod params;
pub mod state;

// Re-exports
pub use params::Parameters;
pub use state::BedState;
