//! The adder.
//!
//! Computes `op1 + (neg ? !op2 : op2) + cin` in 33 bits so the comparator
//! can derive magnitude comparisons from the carry and overflow.

/// Adds two operands with optional operand-2 inversion and carry-in.
///
/// # Arguments
///
/// * `op1` - First operand.
/// * `op2` - Second operand.
/// * `neg` - Invert `op2` before adding.
/// * `cin` - Carry into bit 0.
///
/// # Returns
///
/// `(sum, carry_out)`.
pub fn add(op1: u32, op2: u32, neg: bool, cin: bool) -> (u32, bool) {
    let b = if neg { !op2 } else { op2 };
    let wide = u64::from(op1) + u64::from(b) + u64::from(cin);
    (wide as u32, wide >> 32 != 0)
}
