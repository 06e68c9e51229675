//! Instruction Disassembler for the MIPS I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable string for the
//! pipeline view, debug tracing, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::{disassemble, mnemonic};
//!
//! // add $t1, $t0, $t0
//! assert_eq!(disassemble(0x0108_4820), "add $t1, $t0, $t0");
//! assert_eq!(mnemonic(0x0108_4820), "add");
//! assert_eq!(mnemonic(0), "nop");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::{Op, decode};
use crate::isa::instruction::InstructionBits;

/// Text shown for encodings outside the supported subset.
const UNKNOWN: &str = "???";

/// Returns the mnemonic of an instruction.
///
/// The all-zero word is reported as `nop`; unsupported encodings as `???`.
pub fn mnemonic(inst: u32) -> &'static str {
    if inst == 0 {
        return "nop";
    }
    decode(inst).map_or(UNKNOWN, Op::mnemonic)
}

/// Disassembles a 32-bit MIPS instruction into assembly syntax.
///
/// Returns text like `"lw $t0, 4($sp)"`, `"nop"` for the zero word, or
/// `"???"` for unrecognised encodings. Jump targets are shown as the byte
/// offset within the current 256 MiB region.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    let Some(op) = decode(inst) else {
        return UNKNOWN.to_string();
    };

    let m = op.mnemonic();
    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());

    match op {
        Op::Sll | Op::Srl | Op::Sra => format!("{m} {rd}, {rt}, {}", inst.shamt()),
        Op::Sllv | Op::Srlv | Op::Srav => format!("{m} {rd}, {rt}, {rs}"),
        Op::Jr | Op::Mthi | Op::Mtlo => format!("{m} {rs}"),
        Op::Jalr => format!("{m} {rd}, {rs}"),
        Op::Mfhi | Op::Mflo => format!("{m} {rd}"),
        Op::Mult | Op::Multu | Op::Div | Op::Divu => format!("{m} {rs}, {rt}"),
        Op::Add
        | Op::Addu
        | Op::Sub
        | Op::Subu
        | Op::And
        | Op::Or
        | Op::Xor
        | Op::Nor
        | Op::Slt
        | Op::Sltu => format!("{m} {rd}, {rs}, {rt}"),
        Op::J | Op::Jal => format!("{m} {:#09x}", inst.target() << 2),
        Op::Beq | Op::Bne => format!("{m} {rs}, {rt}, {}", inst.simm()),
        Op::Addi | Op::Addiu | Op::Slti | Op::Sltiu => {
            format!("{m} {rt}, {rs}, {}", inst.simm())
        }
        Op::Andi | Op::Ori | Op::Xori => format!("{m} {rt}, {rs}, {:#x}", inst.imm()),
        Op::Lui => format!("{m} {rt}, {:#x}", inst.imm()),
        Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu | Op::Sb | Op::Sh | Op::Sw => {
            format!("{m} {rt}, {}({rs})", inst.simm())
        }
        Op::Mfc0 | Op::Mtc0 => format!("{m} {rt}, ${}", inst.rd()),
        Op::Syscall | Op::Break | Op::Rfe | Op::Cop0 | Op::Cop(_) => m.to_string(),
    }
}
