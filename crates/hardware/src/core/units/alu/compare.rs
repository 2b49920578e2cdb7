//! Comparator.
//!
//! With `neg` set the comparator evaluates `op1 < op2` from the subtraction
//! `op1 + !op2 + 1`: unsigned from the missing carry, signed from the sign of
//! the difference corrected by overflow. Without `neg` it tests equality.
//! `gte` inverts the outcome (LT becomes GE, EQ becomes NE).

use super::arithmetic;
use crate::core::pipeline::signals::AluControl;

/// Sign bit of a 32-bit word.
const SIGN_BIT: u32 = 31;

/// Evaluates the comparator.
///
/// # Arguments
///
/// * `ctrl` - Control bundle (`neg`, `cin`, `uns`, `gte` are used).
/// * `op1`  - First operand.
/// * `op2`  - Second operand.
///
/// # Returns
///
/// The comparison outcome.
pub fn evaluate(ctrl: AluControl, op1: u32, op2: u32) -> bool {
    let outcome = if ctrl.neg {
        let (diff, carry) = arithmetic::add(op1, op2, true, ctrl.cin);
        if ctrl.uns {
            !carry
        } else {
            let overflow = ((op1 ^ op2) & (op1 ^ diff)) >> SIGN_BIT == 1;
            (diff >> SIGN_BIT == 1) ^ overflow
        }
    } else {
        op1 == op2
    };
    outcome ^ ctrl.gte
}
