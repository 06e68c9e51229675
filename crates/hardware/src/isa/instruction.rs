//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the three MIPS instruction formats:
//!
//! ```text
//! R-type: | opcode:6 | rs:5 | rt:5 | rd:5 | shamt:5 | funct:6 |
//! I-type: | opcode:6 | rs:5 | rt:5 |        immediate:16      |
//! J-type: | opcode:6 |             instr_index:26              |
//! ```

/// Bit shift of the opcode field (bits 26-31).
const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the rs field (bits 21-25).
const RS_SHIFT: u32 = 21;
/// Bit shift of the rt field (bits 16-20).
const RT_SHIFT: u32 = 16;
/// Bit shift of the rd field (bits 11-15).
const RD_SHIFT: u32 = 11;
/// Bit shift of the shamt field (bits 6-10).
const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump instruction index.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented for the raw `u32` encoding so call sites read as
/// `inst.rs()`, `inst.simm()` and so on.
pub trait InstructionBits {
    /// Extracts the major opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register index (bits 21-25).
    ///
    /// For coprocessor instructions this field selects the sub-operation.
    fn rs(&self) -> usize;

    /// Extracts the second source or I-type destination register index (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register index (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the R-type function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate, zero-extended.
    fn imm(&self) -> u32;

    /// Extracts the 16-bit immediate, sign-extended.
    fn simm(&self) -> i32;

    /// Extracts the 26-bit jump instruction index.
    fn target(&self) -> u32;

    /// Returns `true` for R-type (SPECIAL opcode) encodings.
    fn is_r_type(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn simm(&self) -> i32 {
        i32::from(*self as u16 as i16)
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }

    #[inline(always)]
    fn is_r_type(&self) -> bool {
        self.opcode() == 0
    }
}
