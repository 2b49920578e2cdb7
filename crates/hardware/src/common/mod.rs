//! Common types used throughout the pipeline model.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Error Handling:** Architectural traps and host-side simulator errors.
//! 2. **Constants:** Instruction width and reset values.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types and trap definitions.
pub mod error;

pub use error::{SimError, Trap};
