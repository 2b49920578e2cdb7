//! Privileged Architecture Definitions.
//!
//! Defines constants for the machine-mode subset of the RISC-V Privileged
//! Specification used by this core: trap cause codes and system opcodes.
//!
//! # Modules
//!
//! - `cause`: Exception and interrupt cause codes.
//! - `opcodes`: System instruction encodings (ECALL, EBREAK, MRET, WFI, CSR ops).

/// Exception and interrupt cause code definitions.
pub mod cause;

/// System instruction opcodes (ECALL, EBREAK, MRET, WFI, CSR funct3).
pub mod opcodes;
