//! Pipeline stage implementations.
//!
//! This module contains the four stages of the pipeline and the register
//! write-port arbiter. It includes:
//! 1. **Fetch:** Sequential instruction fetch with serialization around redirects.
//! 2. **Decode:** The two-state Decode Sequencer (ID1/ID2).
//! 3. **Execute:** Single-cycle ALU stage.
//! 4. **Retire:** The seven-state Retire Sequencer.
//! 5. **Writeback:** The CSR > load > direct write-port priority chain.

/// Decode Sequencer.
pub mod decode;

/// Execute stage.
pub mod execute;

/// Instruction fetch stage.
pub mod fetch;

/// Retire Sequencer.
pub mod retire;

/// Write-Back Arbiter.
pub mod writeback;

pub use decode::{DecodeStage, DecodeState};
pub use execute::ExecuteStage;
pub use fetch::FetchStage;
pub use retire::{RetireInputs, RetireOutputs, RetireStage, RetireState};
