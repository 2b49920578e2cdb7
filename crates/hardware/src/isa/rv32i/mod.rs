//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Opcode-type and function-code constants for the base integer ISA.

/// funct3 encodings.
pub mod funct3;

/// funct7 encodings.
pub mod funct7;

/// Opcode-type dispatch keys.
pub mod opcodes;
