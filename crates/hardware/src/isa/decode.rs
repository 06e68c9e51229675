//! MIPS Instruction Decoder.
//!
//! This module maps 32-bit instruction encodings to the [`Op`] they perform.
//! Decoding is a pure function of the encoding backed by `const` tables, so it
//! carries no state between simulator instances.

use crate::isa::instruction::InstructionBits;
use crate::isa::mips1::{cop0, funct, opcodes};

/// A decoded operation of the supported MIPS I subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// Shift left logical by `shamt`.
    Sll,
    /// Shift right logical by `shamt`.
    Srl,
    /// Shift right arithmetic by `shamt`.
    Sra,
    /// Shift left logical by `rs`.
    Sllv,
    /// Shift right logical by `rs`.
    Srlv,
    /// Shift right arithmetic by `rs`.
    Srav,
    /// Jump to `rs`.
    Jr,
    /// Jump to `rs`, link into `rd`.
    Jalr,
    /// System call exception.
    Syscall,
    /// Breakpoint exception.
    Break,
    /// Move from HI.
    Mfhi,
    /// Move to HI.
    Mthi,
    /// Move from LO.
    Mflo,
    /// Move to LO.
    Mtlo,
    /// Signed multiply into HI/LO.
    Mult,
    /// Unsigned multiply into HI/LO.
    Multu,
    /// Signed divide into HI/LO.
    Div,
    /// Unsigned divide into HI/LO.
    Divu,
    /// Add with overflow trap.
    Add,
    /// Add without overflow trap.
    Addu,
    /// Subtract with overflow trap.
    Sub,
    /// Subtract without overflow trap.
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set on less than, signed.
    Slt,
    /// Set on less than, unsigned.
    Sltu,
    /// Jump within the current 256 MiB region.
    J,
    /// Jump and link into `$ra`.
    Jal,
    /// Branch on equal.
    Beq,
    /// Branch on not equal.
    Bne,
    /// Add immediate with overflow trap.
    Addi,
    /// Add immediate without overflow trap.
    Addiu,
    /// Set on less than immediate, signed.
    Slti,
    /// Set on less than immediate, unsigned compare.
    Sltiu,
    /// AND with zero-extended immediate.
    Andi,
    /// OR with zero-extended immediate.
    Ori,
    /// XOR with zero-extended immediate.
    Xori,
    /// Load upper immediate.
    Lui,
    /// Load byte, sign-extended.
    Lb,
    /// Load halfword, sign-extended.
    Lh,
    /// Load word.
    Lw,
    /// Load byte, zero-extended.
    Lbu,
    /// Load halfword, zero-extended.
    Lhu,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Store word.
    Sw,
    /// Move from a coprocessor 0 register into `rt`.
    Mfc0,
    /// Move `rt` into a coprocessor 0 register.
    Mtc0,
    /// Restore the previous KU/IE state from the STATUS stack.
    Rfe,
    /// A coprocessor 0 operation this machine does not implement (TLB ops); executes as a no-op.
    Cop0,
    /// Any instruction addressed to coprocessor 1, 2 or 3.
    Cop(u8),
}

impl Op {
    /// Returns the assembly mnemonic of the operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Sllv => "sllv",
            Self::Srlv => "srlv",
            Self::Srav => "srav",
            Self::Jr => "jr",
            Self::Jalr => "jalr",
            Self::Syscall => "syscall",
            Self::Break => "break",
            Self::Mfhi => "mfhi",
            Self::Mthi => "mthi",
            Self::Mflo => "mflo",
            Self::Mtlo => "mtlo",
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
            Self::Add => "add",
            Self::Addu => "addu",
            Self::Sub => "sub",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Addi => "addi",
            Self::Addiu => "addiu",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Mfc0 => "mfc0",
            Self::Mtc0 => "mtc0",
            Self::Rfe => "rfe",
            Self::Cop0 => "cop0",
            Self::Cop(1) => "cop1",
            Self::Cop(2) => "cop2",
            Self::Cop(_) => "cop3",
        }
    }

    /// Returns `true` for conditional branches resolved in Decode.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne)
    }

    /// Returns `true` for unconditional jumps resolved in Decode.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J | Self::Jal | Self::Jr | Self::Jalr)
    }

    /// Returns `true` if the operation reads the register named by the rs field.
    pub const fn reads_rs(self) -> bool {
        !matches!(
            self,
            Self::Sll
                | Self::Srl
                | Self::Sra
                | Self::J
                | Self::Jal
                | Self::Lui
                | Self::Syscall
                | Self::Break
                | Self::Mfhi
                | Self::Mflo
                | Self::Mfc0
                | Self::Mtc0
                | Self::Rfe
                | Self::Cop0
                | Self::Cop(_)
        )
    }

    /// Returns `true` if the operation reads the register named by the rt field.
    pub const fn reads_rt(self) -> bool {
        matches!(
            self,
            Self::Sll
                | Self::Srl
                | Self::Sra
                | Self::Sllv
                | Self::Srlv
                | Self::Srav
                | Self::Mult
                | Self::Multu
                | Self::Div
                | Self::Divu
                | Self::Add
                | Self::Addu
                | Self::Sub
                | Self::Subu
                | Self::And
                | Self::Or
                | Self::Xor
                | Self::Nor
                | Self::Slt
                | Self::Sltu
                | Self::Beq
                | Self::Bne
                | Self::Sb
                | Self::Sh
                | Self::Sw
                | Self::Mtc0
        )
    }

    /// Returns `true` for load instructions.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu)
    }

    /// Returns `true` for store instructions.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Sb | Self::Sh | Self::Sw)
    }
}

/// SPECIAL funct table, indexed by the 6-bit funct field.
const SPECIAL_TABLE: [Option<Op>; 64] = {
    let mut t = [None; 64];
    t[funct::SLL as usize] = Some(Op::Sll);
    t[funct::SRL as usize] = Some(Op::Srl);
    t[funct::SRA as usize] = Some(Op::Sra);
    t[funct::SLLV as usize] = Some(Op::Sllv);
    t[funct::SRLV as usize] = Some(Op::Srlv);
    t[funct::SRAV as usize] = Some(Op::Srav);
    t[funct::JR as usize] = Some(Op::Jr);
    t[funct::JALR as usize] = Some(Op::Jalr);
    t[funct::SYSCALL as usize] = Some(Op::Syscall);
    t[funct::BREAK as usize] = Some(Op::Break);
    t[funct::MFHI as usize] = Some(Op::Mfhi);
    t[funct::MTHI as usize] = Some(Op::Mthi);
    t[funct::MFLO as usize] = Some(Op::Mflo);
    t[funct::MTLO as usize] = Some(Op::Mtlo);
    t[funct::MULT as usize] = Some(Op::Mult);
    t[funct::MULTU as usize] = Some(Op::Multu);
    t[funct::DIV as usize] = Some(Op::Div);
    t[funct::DIVU as usize] = Some(Op::Divu);
    t[funct::ADD as usize] = Some(Op::Add);
    t[funct::ADDU as usize] = Some(Op::Addu);
    t[funct::SUB as usize] = Some(Op::Sub);
    t[funct::SUBU as usize] = Some(Op::Subu);
    t[funct::AND as usize] = Some(Op::And);
    t[funct::OR as usize] = Some(Op::Or);
    t[funct::XOR as usize] = Some(Op::Xor);
    t[funct::NOR as usize] = Some(Op::Nor);
    t[funct::SLT as usize] = Some(Op::Slt);
    t[funct::SLTU as usize] = Some(Op::Sltu);
    t
};

/// Major opcode table for everything except SPECIAL and COP0.
const OPCODE_TABLE: [Option<Op>; 64] = {
    let mut t = [None; 64];
    t[opcodes::OP_J as usize] = Some(Op::J);
    t[opcodes::OP_JAL as usize] = Some(Op::Jal);
    t[opcodes::OP_BEQ as usize] = Some(Op::Beq);
    t[opcodes::OP_BNE as usize] = Some(Op::Bne);
    t[opcodes::OP_ADDI as usize] = Some(Op::Addi);
    t[opcodes::OP_ADDIU as usize] = Some(Op::Addiu);
    t[opcodes::OP_SLTI as usize] = Some(Op::Slti);
    t[opcodes::OP_SLTIU as usize] = Some(Op::Sltiu);
    t[opcodes::OP_ANDI as usize] = Some(Op::Andi);
    t[opcodes::OP_ORI as usize] = Some(Op::Ori);
    t[opcodes::OP_XORI as usize] = Some(Op::Xori);
    t[opcodes::OP_LUI as usize] = Some(Op::Lui);
    t[opcodes::OP_COP1 as usize] = Some(Op::Cop(1));
    t[opcodes::OP_COP2 as usize] = Some(Op::Cop(2));
    t[opcodes::OP_COP3 as usize] = Some(Op::Cop(3));
    t[opcodes::OP_LB as usize] = Some(Op::Lb);
    t[opcodes::OP_LH as usize] = Some(Op::Lh);
    t[opcodes::OP_LW as usize] = Some(Op::Lw);
    t[opcodes::OP_LBU as usize] = Some(Op::Lbu);
    t[opcodes::OP_LHU as usize] = Some(Op::Lhu);
    t[opcodes::OP_SB as usize] = Some(Op::Sb);
    t[opcodes::OP_SH as usize] = Some(Op::Sh);
    t[opcodes::OP_SW as usize] = Some(Op::Sw);
    t
};

/// Decodes a 32-bit instruction.
///
/// # Arguments
///
/// * `inst` - The raw instruction encoding.
///
/// # Returns
///
/// The decoded operation, or `None` for reserved encodings, which the
/// Execute stage reports as `IllegalInstruction`.
pub fn decode(inst: u32) -> Option<Op> {
    match inst.opcode() {
        opcodes::OP_SPECIAL => SPECIAL_TABLE[inst.funct() as usize],
        opcodes::OP_COP0 => Some(decode_cop0(inst)),
        op => OPCODE_TABLE[op as usize],
    }
}

/// Decodes a COP0 instruction by its rs sub-operation field.
fn decode_cop0(inst: u32) -> Op {
    match inst.rs() {
        cop0::MF => Op::Mfc0,
        cop0::MT => Op::Mtc0,
        rs if rs & cop0::CO != 0 && inst.funct() == cop0::RFE => Op::Rfe,
        _ => Op::Cop0,
    }
}
