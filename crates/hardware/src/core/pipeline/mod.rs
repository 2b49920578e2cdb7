//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the four-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** Entries passed between stages and to the register write port.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Fetch, Decode, Execute, and Retire, plus write-back arbitration.
//!
//! Every stage boundary is a valid/ready handshake; a stall propagates
//! upstream and no entry is ever dropped.

/// Inter-stage pipeline latches.
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;
