//! Immediate Decoder.
//!
//! Extracts the immediate of a 32-bit instruction and sign-extends it to a
//! full word. The immediate is assembled from six fixed segments, each of
//! which takes either a slice of the instruction, zero, or the sign fill
//! depending on the instruction format:
//!
//! | Segment | Bits   | I         | S         | B         | U          | J          |
//! |---------|--------|-----------|-----------|-----------|------------|------------|
//! | A       | 0      | `[20]`    | `[7]`     | 0         | 0          | 0          |
//! | B       | 4:1    | `[24:21]` | `[11:8]`  | `[11:8]`  | 0          | `[24:21]`  |
//! | C       | 10:5   | `[30:25]` | `[30:25]` | `[30:25]` | 0          | `[30:25]`  |
//! | D       | 11     | sign      | sign      | `[7]`     | 0          | `[20]`     |
//! | E       | 19:12  | sign      | sign      | sign      | `[19:12]`  | `[19:12]`  |
//! | F       | 31:20  | sign      | sign      | sign      | `[31:20]`  | sign       |

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Immediate encoding format of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmFormat {
    /// Register-immediate, loads, JALR, SYSTEM; also the fallback for R-type.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// LUI and AUIPC.
    U,
    /// JAL.
    J,
}

impl ImmFormat {
    /// Classifies an opcode type into its immediate format.
    ///
    /// Opcode types without an immediate (R-type, unknown encodings) use the
    /// I layout; their immediate is never consumed.
    pub const fn of(opcode_type: u32) -> Self {
        match opcode_type {
            opcodes::OP_STORE => Self::S,
            opcodes::OP_BRANCH => Self::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Self::U,
            opcodes::OP_JAL => Self::J,
            _ => Self::I,
        }
    }
}

/// Extracts `len` bits of `inst` starting at bit `lo`.
#[inline(always)]
const fn bits(inst: u32, lo: u32, len: u32) -> u32 {
    (inst >> lo) & ((1 << len) - 1)
}

/// Decodes the sign-extended immediate of `inst`.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The immediate as a 32-bit two's-complement value.
pub fn decode_immediate(inst: u32) -> u32 {
    decode_immediate_as(inst, ImmFormat::of(inst.opcode_type()))
}

/// Decodes the immediate of `inst` using an explicit format.
pub fn decode_immediate_as(inst: u32, format: ImmFormat) -> u32 {
    let sign = inst >> 31;
    let fill = |len: u32| -> u32 { if sign == 1 { (1 << len) - 1 } else { 0 } };

    let (a, b, c, d, e, f) = match format {
        ImmFormat::I => (
            bits(inst, 20, 1),
            bits(inst, 21, 4),
            bits(inst, 25, 6),
            sign,
            fill(8),
            fill(12),
        ),
        ImmFormat::S => (
            bits(inst, 7, 1),
            bits(inst, 8, 4),
            bits(inst, 25, 6),
            sign,
            fill(8),
            fill(12),
        ),
        ImmFormat::B => (
            0,
            bits(inst, 8, 4),
            bits(inst, 25, 6),
            bits(inst, 7, 1),
            fill(8),
            fill(12),
        ),
        ImmFormat::U => (0, 0, 0, 0, bits(inst, 12, 8), bits(inst, 20, 12)),
        ImmFormat::J => (
            0,
            bits(inst, 21, 4),
            bits(inst, 25, 6),
            bits(inst, 20, 1),
            bits(inst, 12, 8),
            fill(12),
        ),
    };

    (f << 20) | (e << 12) | (d << 11) | (c << 5) | (b << 1) | a
}
