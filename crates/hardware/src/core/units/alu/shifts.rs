//! The shifter.
//!
//! A single right shifter serves all three shifts. Left shifts bit-reverse
//! the input and the output around a logical right shift; arithmetic shifts
//! fill vacated bits with the sign bit. Only `op2[4:0]` is consumed, so the
//! full I-type immediate of SLLI/SRLI/SRAI can be passed unchanged.

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1F;

/// Shifts `value` right by `amount[4:0]`.
///
/// # Arguments
///
/// * `value`  - The value to be shifted.
/// * `amount` - The shift amount (upper bits ignored).
/// * `rev`    - Bit-reverse input and output (shift left).
/// * `fill`   - Fill with the sign bit (arithmetic shift).
///
/// # Returns
///
/// The shifted value.
pub fn shift(value: u32, amount: u32, rev: bool, fill: bool) -> u32 {
    let shamt = amount & SHAMT_MASK;
    let input = if rev { value.reverse_bits() } else { value };
    let out = if fill {
        ((input as i32) >> shamt) as u32
    } else {
        input >> shamt
    };
    if rev { out.reverse_bits() } else { out }
}
