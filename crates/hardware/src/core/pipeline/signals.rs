//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** ALU operations and their display symbols.
//! 2. **Memory Control:** Access widths and sign-extension requirements.
//! 3. **Write-back Control:** Register write and mem-to-reg selection.

/// ALU operation types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Addition, trapping on signed overflow.
    Add,

    /// Addition without overflow trap.
    Addu,

    /// Subtraction, trapping on signed overflow.
    Sub,

    /// Subtraction without overflow trap.
    Subu,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Load upper immediate (second operand shifted into the high half).
    Lui,
}

impl AluOp {
    /// Returns the operator symbol shown in the Execute stage of the pipeline view.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add | Self::Addu => "+",
            Self::Sub | Self::Subu => "-",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "\u{2295}",
            Self::Nor => "\u{2193}",
            Self::Slt | Self::Sltu => "slt",
            Self::Sll => "<<",
            Self::Srl => ">>>",
            Self::Sra => ">>",
            Self::Lui => "lui",
        }
    }
}

/// Width of a memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,

    /// 16-bit access; the address must be 2-byte aligned.
    Half,

    /// 32-bit access; the address must be 4-byte aligned.
    #[default]
    Word,
}

impl MemWidth {
    /// Returns the number of bytes accessed.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Returns the mask of address bits that must be zero.
    pub const fn align_mask(self) -> u32 {
        self.bytes() - 1
    }
}

/// Control signals carried by the EX/MEM and MEM/WB latches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the result to the destination register in Writeback.
    pub reg_write: bool,

    /// Read memory in the Memory stage; the loaded value is written back (mem-to-reg).
    pub mem_read: bool,

    /// Write memory in the Memory stage.
    pub mem_write: bool,

    /// Width of the memory access.
    pub width: MemWidth,

    /// Sign-extend the loaded value (`lb`, `lh`).
    pub signed_load: bool,

    /// The instruction occupies a branch delay slot.
    pub in_delay_slot: bool,
}
