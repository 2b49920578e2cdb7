//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains field extraction, opcode and function codes, and the
//! combinational decoders of the decode stage.
//!
//! # Modules
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit) constants.
//! * `privileged`: Machine-mode trap causes and system instruction encodings.
//! * `immediate`: Immediate Decoder.
//! * `alu_control`: ALU-Control Decoder.
//! * `decode`: Operand routing, retire classification, and legality.

/// ALU-Control Decoder (9-bit key to control bundle).
pub mod alu_control;

/// Instruction classification for the decode stage.
pub mod decode;

/// Immediate Decoder for the I, S, B, U, and J formats.
pub mod immediate;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Privileged architecture definitions (trap causes, system instructions).
pub mod privileged;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
