//! Trap and simulator error definitions.
//!
//! This module defines the two error families of the simulator. It provides:
//! 1. **Trap Representation:** The architectural exceptions the retire stage can raise.
//! 2. **Cause Encoding:** Mapping of each trap onto its `mcause` code and `mtval` value.
//! 3. **Host Errors:** Failures outside the modelled hardware (file I/O, image loading,
//!    configuration).

use thiserror::Error;

use crate::isa::privileged::cause::exception;

/// RISC-V synchronous exceptions raised by the retire stage.
///
/// Every trap transfers control to the external trap unit; none are recovered
/// inside the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Illegal instruction exception.
    ///
    /// Raised when the decoder flags an encoding outside RV32I.
    /// The associated value is the raw instruction word.
    #[error("IllegalInstruction({0:#010x})")]
    IllegalInstruction(u32),

    /// Instruction address misaligned exception.
    ///
    /// Raised when a taken branch or jump targets an address that is not
    /// 4-byte aligned. Carries no trap value.
    #[error("InstructionAddressMisaligned")]
    InstructionAddressMisaligned,

    /// Environment call (`ECALL`) from machine mode.
    #[error("EnvironmentCall")]
    EnvironmentCall,

    /// Breakpoint (`EBREAK`).
    ///
    /// The associated value is the program counter of the `EBREAK`.
    #[error("Breakpoint({0:#010x})")]
    Breakpoint(u32),
}

impl Trap {
    /// Returns the exception code written to `mcause`.
    pub const fn cause(self) -> u32 {
        match self {
            Self::IllegalInstruction(_) => exception::ILLEGAL_INSTRUCTION,
            Self::InstructionAddressMisaligned => exception::INSTRUCTION_ADDRESS_MISALIGNED,
            Self::EnvironmentCall => exception::ENVIRONMENT_CALL_FROM_M_MODE,
            Self::Breakpoint(_) => exception::BREAKPOINT,
        }
    }

    /// Returns the trap value written to `mtval`.
    pub const fn value(self) -> u32 {
        match self {
            Self::IllegalInstruction(inst) => inst,
            Self::Breakpoint(pc) => pc,
            Self::InstructionAddressMisaligned | Self::EnvironmentCall => 0,
        }
    }
}

/// Host-side failures of the simulator.
///
/// These never originate from simulated instructions; they describe problems
/// setting up or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A program image could not be read from disk.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A program image does not fit in memory at the requested address.
    #[error("image of {len} bytes at {addr:#010x} overflows memory [{base:#010x}, +{size:#x})")]
    ImageOutOfRange {
        /// Load address of the image.
        addr: u32,
        /// Image length in bytes.
        len: usize,
        /// Memory base address.
        base: u32,
        /// Memory size in bytes.
        size: usize,
    },

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
