//! System-on-Chip (SoC) Components.
//!
//! This module organizes the memory side of the simulated system: the data
//! bus and instruction port interfaces, and the RAM implementing both.

/// Flat RAM.
pub mod memory;

/// Data bus and instruction port interfaces.
pub mod traits;

pub use memory::Ram;
pub use traits::{BusRequest, BusResponse, DataBus, InstructionPort};
