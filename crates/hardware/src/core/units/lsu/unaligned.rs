//! Unaligned memory access handling.
//!
//! This module splits a byte/half/word access into aligned word beats on the
//! data bus and reassembles load data. An access that crosses a word boundary
//! takes two beats; every other access takes one. No access ever faults.

use crate::isa::rv32i::funct3;

/// Width of one bus word in bytes.
const WORD_BYTES: u32 = 4;

/// Word-alignment mask.
const WORD_MASK: u32 = WORD_BYTES - 1;

/// One aligned bus transaction of a split access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Beat {
    /// Word-aligned address.
    pub addr: u32,
    /// Byte lanes touched in this word.
    pub mask: u8,
    /// Store data shifted into its lanes.
    pub wdata: u32,
}

/// Returns the access width in bytes for a load/store funct3.
pub const fn access_size(f3: u32) -> u32 {
    match f3 & funct3::SIZE_MASK {
        0b00 => 1,
        0b01 => 2,
        _ => 4,
    }
}

/// Splits an access into one or two aligned beats.
///
/// # Arguments
///
/// * `addr` - The byte address of the access.
/// * `size` - The access width in bytes (1, 2, or 4).
/// * `data` - Store data (ignored for loads).
///
/// # Returns
///
/// The beats in address order and how many of them are used.
pub fn split(addr: u32, size: u32, data: u32) -> ([Beat; 2], usize) {
    let offset = addr & WORD_MASK;
    let span: u64 = ((1u64 << size) - 1) << offset;
    let shifted = u64::from(data) << (8 * offset);
    let word = addr & !WORD_MASK;

    let first = Beat {
        addr: word,
        mask: (span & 0xF) as u8,
        wdata: shifted as u32,
    };
    let second = Beat {
        addr: word.wrapping_add(WORD_BYTES),
        mask: (span >> WORD_BYTES) as u8,
        wdata: (shifted >> 32) as u32,
    };
    let beats = if second.mask == 0 { 1 } else { 2 };
    ([first, second], beats)
}

/// Extracts and extends load data from the concatenated beat data.
///
/// # Arguments
///
/// * `raw` - Read data of the first beat in bits 31:0 and the second in 63:32.
/// * `addr` - The byte address of the access.
/// * `f3` - The load funct3 (size and signedness).
///
/// # Returns
///
/// The value to write to `rd`.
pub fn extract_load(raw: u64, addr: u32, f3: u32) -> u32 {
    let value = (raw >> (8 * (addr & WORD_MASK))) as u32;
    let unsigned = f3 & funct3::UNSIGNED_BIT != 0;
    match access_size(f3) {
        1 if unsigned => value & 0xFF,
        1 => value as u8 as i8 as i32 as u32,
        2 if unsigned => value & 0xFFFF,
        2 => value as u16 as i16 as i32 as u32,
        _ => value,
    }
}
