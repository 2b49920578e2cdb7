//! # General-Purpose Register Tests
//!
//! Tests for the register file: `x0` hard-wiring, the write port, and the
//! one-cycle synchronous read ports.

use proptest::prelude::*;
use rvpipe_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_x0_always_reads_zero() {
    let mut gpr = Gpr::new();
    for value in [1u32, 0xFFFF_FFFF, 0x8000_0000, 0xDEAD_BEEF] {
        gpr.write(0, value);
        assert_eq!(gpr.read(0), 0);
    }
}

#[test]
fn test_gpr_read_write_x1_and_x31() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x1234_5678);
    gpr.write(31, 0x9999_AAAA);
    assert_eq!(gpr.read(1), 0x1234_5678);
    assert_eq!(gpr.read(31), 0x9999_AAAA);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = (i as u32) << 16 | (i as u32);
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_last_write_wins() {
    let mut gpr = Gpr::new();
    gpr.write(5, 100);
    gpr.write(5, 200);
    assert_eq!(gpr.read(5), 200);
}

// ─── Read ports ────────────────────────────────────────────────────────────

#[test]
fn test_read_ports_hold_until_next_issue() {
    let mut gpr = Gpr::new();
    gpr.write(3, 33);
    gpr.write(4, 44);
    gpr.issue_read(3, 4);
    gpr.write(3, 0);
    assert_eq!(gpr.read_ports(), (33, 44));

    gpr.issue_read(4, 3);
    assert_eq!(gpr.read_ports(), (44, 0));
}

#[test]
fn test_read_port_of_x0_is_zero_even_after_write() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xFFFF_FFFF);
    gpr.issue_read(0, 0);
    assert_eq!(gpr.read_ports(), (0, 0));
}

#[test]
fn test_snapshot_hides_x0() {
    let mut gpr = Gpr::new();
    gpr.write(0, 7);
    gpr.write(2, 9);
    let regs = gpr.snapshot();
    assert_eq!(regs[0], 0);
    assert_eq!(regs[2], 9);
}

proptest! {
    #[test]
    fn prop_matches_shadow_file(
        writes in proptest::collection::vec((0usize..32, any::<u32>()), 0..64)
    ) {
        let mut gpr = Gpr::new();
        let mut shadow = [0u32; 32];
        for (idx, val) in writes {
            gpr.write(idx, val);
            if idx != 0 {
                shadow[idx] = val;
            }
        }
        for (idx, expected) in shadow.iter().enumerate() {
            prop_assert_eq!(gpr.read(idx), *expected);
        }
    }
}
