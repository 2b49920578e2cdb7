//! Pipeline control signals.
//!
//! This module defines the signals that steer an instruction through the pipeline. It provides:
//! 1. **ALU Control:** The `{neg, rev, cin, uns, gte, sel}` bundle driving the shared
//!    arithmetic/logic/shift/compare unit.
//! 2. **Operand Selection:** Sources for the two execute operands.
//! 3. **Retire Control:** Flags that classify an instruction for the retire stage.

/// Result source of the shared execute unit (3-bit selector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResultSel {
    /// Adder output (also the address path for loads and stores).
    #[default]
    Adder = 0,

    /// Bitwise AND.
    And = 1,

    /// Bitwise OR.
    Or = 2,

    /// Bitwise XOR.
    Xor = 3,

    /// Comparator output (0 or 1).
    Compare = 4,

    /// Shifter output.
    Shift = 5,
}

impl ResultSel {
    /// Returns the 3-bit hardware encoding of the selector.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// ALU control bundle.
///
/// The default value is a plain addition with no modifiers, which is the
/// decode of ADD/ADDI and of every instruction that only needs the adder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AluControl {
    /// Invert operand 2 before the adder (subtraction, magnitude compare).
    pub neg: bool,
    /// Bit-reverse operand 1 and the shifter result (left shift via right shift).
    pub rev: bool,
    /// Carry into the adder; for the shifter, fill with the sign bit.
    pub cin: bool,
    /// Unsigned magnitude comparison.
    pub uns: bool,
    /// Invert the comparator result (LT becomes GE, EQ becomes NE).
    pub gte: bool,
    /// Result source.
    pub sel: ResultSel,
}

/// Source of execute operand 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op1Src {
    /// Constant zero (LUI).
    Zero,
    /// Program counter.
    #[default]
    Pc,
    /// Register `rs1`.
    Reg,
}

/// Source of execute operand 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op2Src {
    /// Decoded immediate.
    #[default]
    Imm,
    /// Register `rs2`.
    Reg,
}

/// Retire-stage classification flags.
///
/// The flags are produced by the decoder and travel with the instruction
/// unchanged until the retire stage consumes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetireControl {
    /// Write the primary result to `rd` on retirement.
    pub rd_write: bool,
    /// Unconditional jump (JAL, JALR).
    pub branch: bool,
    /// Conditional branch; taken when the primary result's low bit is set.
    pub branch_cond: bool,
    /// Load.
    pub ld: bool,
    /// Store.
    pub st: bool,
    /// CSR access.
    pub csr: bool,
    /// Environment call.
    pub ecall: bool,
    /// Breakpoint.
    pub ebreak: bool,
    /// Trap return (MRET).
    pub ret: bool,
    /// Wait for interrupt.
    pub wfi: bool,
}
