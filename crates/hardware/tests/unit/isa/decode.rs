//! # Decoder Tests
//!
//! Tests that every supported encoding maps to its operation, reserved
//! encodings are rejected, and operand classification matches the formats.

use mipsim_core::isa::abi::{REG_SP, REG_T0, REG_T1, REG_T2};
use mipsim_core::isa::{Op, decode};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

fn ib() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[rstest]
#[case(ib().add(REG_T0, REG_T1, REG_T2).build(), Op::Add)]
#[case(ib().sub(REG_T0, REG_T1, REG_T2).build(), Op::Sub)]
#[case(ib().slt(REG_T0, REG_T1, REG_T2).build(), Op::Slt)]
#[case(ib().sll(REG_T0, REG_T1, 4).build(), Op::Sll)]
#[case(ib().jr(REG_T0).build(), Op::Jr)]
#[case(ib().jalr(REG_T0, REG_T1).build(), Op::Jalr)]
#[case(ib().syscall().build(), Op::Syscall)]
#[case(ib().brk().build(), Op::Break)]
#[case(ib().mult(REG_T0, REG_T1).build(), Op::Mult)]
#[case(ib().divu(REG_T0, REG_T1).build(), Op::Divu)]
#[case(ib().mfhi(REG_T0).build(), Op::Mfhi)]
#[case(ib().mtlo(REG_T0).build(), Op::Mtlo)]
#[case(ib().addi(REG_T0, REG_T1, -1).build(), Op::Addi)]
#[case(ib().ori(REG_T0, REG_T1, 0xFF).build(), Op::Ori)]
#[case(ib().lui(REG_T0, 0x1001).build(), Op::Lui)]
#[case(ib().lw(REG_T0, 4, REG_SP).build(), Op::Lw)]
#[case(ib().lbu(REG_T0, 4, REG_SP).build(), Op::Lbu)]
#[case(ib().sb(REG_T0, 4, REG_SP).build(), Op::Sb)]
#[case(ib().beq(REG_T0, REG_T1, 2).build(), Op::Beq)]
#[case(ib().bne(REG_T0, REG_T1, -2).build(), Op::Bne)]
#[case(ib().j(0x0040_0000).build(), Op::J)]
#[case(ib().jal(0x0040_0000).build(), Op::Jal)]
#[case(ib().mfc0(REG_T0, 12).build(), Op::Mfc0)]
#[case(ib().mtc0(REG_T0, 14).build(), Op::Mtc0)]
#[case(ib().rfe().build(), Op::Rfe)]
#[case(ib().cop1().build(), Op::Cop(1))]
fn decodes_supported_encodings(#[case] inst: u32, #[case] op: Op) {
    assert_eq!(decode(inst), Some(op));
}

#[test]
fn known_encodings() {
    assert_eq!(decode(0x0108_4820), Some(Op::Add));
    assert_eq!(decode(0x2008_0005), Some(Op::Addi));
    assert_eq!(decode(0x8FA8_0004), Some(Op::Lw));
}

#[rstest]
#[case(0x0000_0001)] // SPECIAL funct 0x01
#[case(0x0000_0028)] // SPECIAL funct 0x28
#[case(0xFC00_0000)] // opcode 0x3F
#[case(0x1C00_0000)] // opcode 0x07 (bgtz, unsupported)
fn reserved_encodings_decode_to_none(#[case] inst: u32) {
    assert_eq!(decode(inst), None);
}

#[test]
fn unimplemented_cop0_operation_is_a_noop_op() {
    // CO bit set with a TLB function code.
    let tlbr = ib().opcode(0x10).rs(0x10).funct(0x01).build();
    assert_eq!(decode(tlbr), Some(Op::Cop0));
}

#[test]
fn operand_classification() {
    assert!(Op::Add.reads_rs() && Op::Add.reads_rt());
    assert!(Op::Addi.reads_rs() && !Op::Addi.reads_rt());
    assert!(Op::Lw.reads_rs() && !Op::Lw.reads_rt());
    assert!(Op::Sw.reads_rs() && Op::Sw.reads_rt());
    assert!(!Op::Sll.reads_rs() && Op::Sll.reads_rt());
    assert!(!Op::Lui.reads_rs() && !Op::Lui.reads_rt());
    assert!(Op::Jr.reads_rs() && !Op::Jr.reads_rt());
    assert!(!Op::Mfc0.reads_rs() && Op::Mtc0.reads_rt());
}

#[test]
fn control_flow_classification() {
    assert!(Op::Beq.is_branch() && Op::Bne.is_branch());
    assert!(!Op::J.is_branch() && Op::J.is_jump());
    assert!(Op::Jalr.is_jump());
    assert!(Op::Lhu.is_load() && !Op::Lhu.is_store());
    assert!(Op::Sh.is_store());
}

proptest! {
    #[test]
    fn prop_decode_is_total(inst in any::<u32>()) {
        if let Some(op) = decode(inst) {
            prop_assert!(!op.mnemonic().is_empty());
        }
    }
}
