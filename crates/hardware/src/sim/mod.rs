//! Simulation utilities and program loading.
//!
//! Provides utilities for loading flat binaries into memory and the run loop
//! that clocks the core until an exit condition.

/// Flat binary loading.
pub mod loader;

/// Run loop and exit conditions.
pub mod simulator;

pub use simulator::{ExitReason, RunOutcome, Simulator};
