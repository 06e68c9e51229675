//! Coprocessor 0 Instruction Codes.
//!
//! For COP0 instructions the rs field selects the sub-operation. When the CO
//! bit (rs bit 4) is set, the funct field selects the operation instead.

/// Move From Coprocessor 0 (MFC0) sub-operation.
pub const MF: usize = 0x00;

/// Move To Coprocessor 0 (MTC0) sub-operation.
pub const MT: usize = 0x04;

/// CO bit in the rs field; marks a coprocessor operation.
pub const CO: usize = 0x10;

/// Restore From Exception (RFE) function code, valid with the CO bit set.
pub const RFE: u32 = 0x10;
