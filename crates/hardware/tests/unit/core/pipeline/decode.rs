//! # Decode Sequencer Tests
//!
//! Covers the ID1/ID2 sequence, operand merging against a shadow register
//! file, the accept handshake, and snooping of register writes.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::builder::pipeline_state::FetchPacketBuilder;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rvpipe_core::core::arch::gpr::Gpr;
use rvpipe_core::core::pipeline::latches::{DecodedOp, FetchPacket, WriteBack};
use rvpipe_core::core::pipeline::signals::ResultSel;
use rvpipe_core::core::pipeline::stages::{DecodeStage, DecodeState};

const PC: u32 = 0x8000_0000;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

fn packet(pc: u32, inst: u32) -> FetchPacket {
    FetchPacketBuilder::new().pc(pc).inst(inst).build()
}

/// Runs one instruction through ID1 and ID2 with no downstream consumer.
fn decode_once(inst: u32, regs: &mut Gpr) -> DecodedOp {
    let mut stage = DecodeStage::new();
    let pkt = packet(PC, inst);
    assert!(stage.tick(Some(pkt), false, regs, None));
    assert!(!stage.tick(None, false, regs, None));
    *stage.output().expect("decode produced no micro-op")
}

// ─── Sequencing ────────────────────────────────────────────────────────────

#[test]
fn addi_x5_x1_minus_one_with_x1_0x10() {
    let mut regs = Gpr::new();
    regs.write(1, 0x0000_0010);
    let op = decode_once(b().addi(5, 1, -1).build(), &mut regs);
    assert_eq!(op.op1, 0x0000_0010);
    assert_eq!(op.op2, 0xFFFF_FFFF);
    assert_eq!(op.alu.sel, ResultSel::Adder);
    assert_eq!(op.rd, 5);
    assert_eq!(op.pc, PC);
}

#[test]
fn two_cycles_per_instruction() {
    let mut regs = Gpr::new();
    let mut stage = DecodeStage::new();
    let pkt = packet(PC, b().nop().build());

    assert_eq!(stage.state(), DecodeState::Id1);
    assert!(stage.tick(Some(pkt), true, &mut regs, None));
    assert_eq!(stage.state(), DecodeState::Id2);
    assert!(stage.output().is_none());

    // ID2 never accepts.
    assert!(!stage.in_ready(true));
    assert!(!stage.tick(Some(pkt), true, &mut regs, None));
    assert_eq!(stage.state(), DecodeState::Id1);
    assert!(stage.output().is_some());
}

#[test]
fn auipc_and_lui_route_pc_and_zero() {
    let mut regs = Gpr::new();
    let auipc = decode_once(b().auipc(1, 1).build(), &mut regs);
    assert_eq!((auipc.op1, auipc.op2), (PC, 0x1000));

    let lui = decode_once(b().lui(1, 1).build(), &mut regs);
    assert_eq!((lui.op1, lui.op2), (0, 0x1000));
}

#[test]
fn register_register_reads_both_ports() {
    let mut regs = Gpr::new();
    regs.write(2, 20);
    regs.write(3, 30);
    let op = decode_once(b().sub(1, 2, 3).build(), &mut regs);
    assert_eq!((op.op1, op.op2), (20, 30));
    assert!(op.rs1_read && op.rs2_read);
    assert_eq!((op.rs1, op.rs2), (2, 3));
    assert!(op.alu.neg);
}

#[test]
fn store_captures_second_port_as_data() {
    let mut regs = Gpr::new();
    regs.write(1, 0x100);
    regs.write(2, 0xAB);
    let op = decode_once(b().sw(1, 2, 8).build(), &mut regs);
    assert_eq!((op.op1, op.op2), (0x100, 8));
    assert_eq!(op.store_data, 0xAB);
    assert!(op.ctrl.st);
}

#[test]
fn x0_sources_read_zero_and_are_not_tracked() {
    let mut regs = Gpr::new();
    regs.write(0, 0xFFFF_FFFF);
    let op = decode_once(b().add(1, 0, 0).build(), &mut regs);
    assert_eq!((op.op1, op.op2), (0, 0));
    assert!(!op.rs1_read && !op.rs2_read);
}

// ─── Snooping ──────────────────────────────────────────────────────────────

#[test]
fn write_between_id1_and_id2_replaces_stale_port_data() {
    let mut regs = Gpr::new();
    let mut stage = DecodeStage::new();
    let pkt = packet(PC, b().add(3, 1, 2).build());
    assert!(stage.tick(Some(pkt), false, &mut regs, None));

    let wb = WriteBack { rd: 1, data: 7 };
    regs.write(wb.rd, wb.data);
    let _ = stage.tick(None, false, &mut regs, Some(wb));
    assert_eq!(stage.output().map(|op| op.op1), Some(7));
}

#[test]
fn waiting_output_snoops_writes() {
    let mut regs = Gpr::new();
    let mut op = decode_once(b().sw(1, 2, 0).build(), &mut regs);
    op.snoop(&WriteBack { rd: 1, data: 0x200 });
    op.snoop(&WriteBack { rd: 2, data: 0x55 });
    op.snoop(&WriteBack { rd: 0, data: 0x99 });
    assert_eq!(op.op1, 0x200);
    assert_eq!(op.op2, 0);
    assert_eq!(op.store_data, 0x55);
}

#[test]
fn held_output_register_is_updated_in_place() {
    let mut regs = Gpr::new();
    let mut stage = DecodeStage::new();
    let pkt = packet(PC, b().addi(4, 9, 1).build());
    assert!(stage.tick(Some(pkt), false, &mut regs, None));
    let _ = stage.tick(None, false, &mut regs, None);
    assert_eq!(stage.output().map(|op| op.op1), Some(0));

    let wb = WriteBack { rd: 9, data: 41 };
    let _ = stage.tick(None, false, &mut regs, Some(wb));
    assert_eq!(stage.output().map(|op| op.op1), Some(41));
}

// ─── Handshake ─────────────────────────────────────────────────────────────

#[test]
fn full_output_blocks_accept_until_drained() {
    let mut regs = Gpr::new();
    let mut stage = DecodeStage::new();
    let first = packet(PC, b().addi(1, 0, 1).build());
    let second = packet(PC + 4, b().addi(2, 0, 2).build());

    assert!(stage.tick(Some(first), false, &mut regs, None));
    let _ = stage.tick(None, false, &mut regs, None);

    assert!(!stage.in_ready(false));
    assert!(!stage.tick(Some(second), false, &mut regs, None));
    assert_eq!(stage.output().map(|op| op.pc), Some(PC));

    assert!(stage.in_ready(true));
    assert!(stage.tick(Some(second), true, &mut regs, None));
    assert!(stage.output().is_none());
}

proptest! {
    #[test]
    fn in_ready_iff_id1_and_output_empty_or_draining(
        steps in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..200)
    ) {
        let mut regs = Gpr::new();
        let mut stage = DecodeStage::new();
        let nop = packet(PC, b().nop().build());
        let (mut accepted, mut drained) = (0u32, 0u32);

        for (offer, out_ready) in steps {
            let id1 = stage.state() == DecodeState::Id1;
            let expected = id1 && (stage.output().is_none() || out_ready);
            prop_assert_eq!(stage.in_ready(out_ready), expected);

            if out_ready && stage.output().is_some() {
                drained += 1;
            }
            let took = stage.tick(offer.then_some(nop), out_ready, &mut regs, None);
            prop_assert_eq!(took, expected && offer);
            if took {
                accepted += 1;
            }

            let in_id2 = u32::from(stage.state() == DecodeState::Id2);
            let inside = in_id2 + u32::from(stage.output().is_some());
            prop_assert_eq!(accepted, drained + inside);
        }
    }

    #[test]
    fn register_immediate_operands_match_shadow_file(
        values in proptest::collection::vec(any::<u32>(), 31),
        rs1 in 0u32..32,
        rd in 0u32..32,
        imm in -2048i32..2048,
        shamt in 0u32..32,
        kind in 0usize..9,
    ) {
        let mut regs = Gpr::new();
        let mut shadow = [0u32; 32];
        for (i, v) in values.iter().enumerate() {
            regs.write(i + 1, *v);
            shadow[i + 1] = *v;
        }

        let asm = b();
        let (inst, expected_op2) = match kind {
            0 => (asm.addi(rd, rs1, imm).build(), imm as u32),
            1 => (asm.slti(rd, rs1, imm).build(), imm as u32),
            2 => (asm.sltiu(rd, rs1, imm).build(), imm as u32),
            3 => (asm.xori(rd, rs1, imm).build(), imm as u32),
            4 => (asm.ori(rd, rs1, imm).build(), imm as u32),
            5 => (asm.andi(rd, rs1, imm).build(), imm as u32),
            6 => (asm.slli(rd, rs1, shamt).build(), shamt),
            7 => (asm.srli(rd, rs1, shamt).build(), shamt),
            _ => (asm.srai(rd, rs1, shamt).build(), 0x400 | shamt),
        };

        let op = decode_once(inst, &mut regs);
        prop_assert_eq!(op.op1, shadow[rs1 as usize]);
        prop_assert_eq!(op.op2, expected_op2);
        prop_assert_eq!(op.op2 & 0x1F, expected_op2 & 0x1F);
        prop_assert_eq!(op.rd, rd as usize);
    }
}
