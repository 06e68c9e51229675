//! # Disassembler Tests

use mipsim_core::isa::abi::{
    REG_A2, REG_A3, REG_S1, REG_SP, REG_T0, REG_T1, REG_T5, REG_T6, REG_T7, REG_T8, REG_T9,
    REG_ZERO, reg_name,
};
use mipsim_core::isa::disasm::{disassemble, mnemonic};
use rstest::rstest;

use crate::common::builder::instruction::InstructionBuilder;

fn ib() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[rstest]
#[case(0x0108_4820, "add $t1, $t0, $t0")]
#[case(ib().addi(REG_T0, REG_ZERO, 5).build(), "addi $t0, $zero, 5")]
#[case(ib().addi(REG_T0, REG_T0, -1).build(), "addi $t0, $t0, -1")]
#[case(ib().lw(REG_T0, 4, REG_SP).build(), "lw $t0, 4($sp)")]
#[case(ib().sb(REG_T1, -8, REG_SP).build(), "sb $t1, -8($sp)")]
#[case(ib().ori(REG_T0, REG_T0, 0xFF).build(), "ori $t0, $t0, 0xff")]
#[case(ib().lui(REG_T0, 0x1001).build(), "lui $t0, 0x1001")]
#[case(ib().sll(REG_T1, REG_T0, 4).build(), "sll $t1, $t0, 4")]
#[case(ib().beq(REG_T0, REG_T1, -3).build(), "beq $t0, $t1, -3")]
#[case(ib().jr(REG_T0).build(), "jr $t0")]
#[case(ib().jalr(REG_T1, REG_T0).build(), "jalr $t1, $t0")]
#[case(ib().mult(REG_T0, REG_T1).build(), "mult $t0, $t1")]
#[case(ib().mflo(REG_T1).build(), "mflo $t1")]
#[case(ib().mfc0(REG_T0, 12).build(), "mfc0 $t0, $12")]
#[case(ib().j(0x0040_000C).build(), "j 0x040000c")]
#[case(ib().syscall().build(), "syscall")]
#[case(ib().rfe().build(), "rfe")]
fn disassembly(#[case] inst: u32, #[case] expected: &str) {
    assert_eq!(disassemble(inst), expected);
}

#[test]
fn zero_word_is_nop() {
    assert_eq!(disassemble(0), "nop");
    assert_eq!(mnemonic(0), "nop");
}

#[test]
fn unknown_encoding() {
    assert_eq!(disassemble(0xFC00_0000), "???");
    assert_eq!(mnemonic(0xFC00_0000), "???");
}

#[test]
fn mnemonic_only() {
    assert_eq!(mnemonic(0x0108_4820), "add");
    assert_eq!(mnemonic(ib().cop1().build()), "cop1");
}

#[rstest]
#[case(REG_A2, "$a2")]
#[case(REG_A3, "$a3")]
#[case(REG_T5, "$t5")]
#[case(REG_T6, "$t6")]
#[case(REG_T7, "$t7")]
#[case(REG_S1, "$s1")]
#[case(REG_T8, "$t8")]
#[case(REG_T9, "$t9")]
fn register_constants_match_names(#[case] reg: usize, #[case] name: &str) {
    assert_eq!(reg_name(reg), name);
}

#[test]
fn out_of_range_register_name() {
    assert_eq!(reg_name(32), "$??");
}
