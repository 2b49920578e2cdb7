//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the shared execute unit steered by the ALU control
//! bundle. A single adder, shifter, and comparator cover every RV32I
//! arithmetic, logic, shift, compare, and branch-condition operation.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: the adder (`op1 + (neg ? !op2 : op2) + cin`)
//! - [`compare`]:    the less-than and equality comparator
//! - [`shifts`]:     right shifter with bit-reversal for left shifts
//!
//! AND, OR and XOR are single expressions in [`Alu::execute`].

/// The adder.
pub mod arithmetic;

/// The comparator.
pub mod compare;

/// The shifter.
pub mod shifts;

use crate::core::pipeline::signals::{AluControl, ResultSel};

/// Arithmetic Logic Unit (ALU) for integer operations.
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - The control bundle produced by the ALU-Control Decoder.
    /// * `op1`  - First operand.
    /// * `op2`  - Second operand (also the shift amount).
    ///
    /// # Returns
    ///
    /// The selected result. Comparator results are 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::pipeline::signals::{AluControl, ResultSel};
    /// use rvpipe_core::core::units::alu::Alu;
    ///
    /// // Plain addition.
    /// assert_eq!(Alu::execute(AluControl::default(), 42, 8), 50);
    ///
    /// // Subtraction: invert operand 2 and carry in.
    /// let sub = AluControl { neg: true, cin: true, ..AluControl::default() };
    /// assert_eq!(Alu::execute(sub, 5, 7), (-2_i32) as u32);
    ///
    /// // Signed less-than.
    /// let slt = AluControl {
    ///     neg: true,
    ///     cin: true,
    ///     sel: ResultSel::Compare,
    ///     ..AluControl::default()
    /// };
    /// assert_eq!(Alu::execute(slt, (-5_i32) as u32, 10), 1);
    /// ```
    pub fn execute(ctrl: AluControl, op1: u32, op2: u32) -> u32 {
        match ctrl.sel {
            ResultSel::Adder => arithmetic::add(op1, op2, ctrl.neg, ctrl.cin).0,
            ResultSel::And => op1 & op2,
            ResultSel::Or => op1 | op2,
            ResultSel::Xor => op1 ^ op2,
            ResultSel::Compare => u32::from(compare::evaluate(ctrl, op1, op2)),
            ResultSel::Shift => shifts::shift(op1, op2, ctrl.rev, ctrl.cin),
        }
    }
}
