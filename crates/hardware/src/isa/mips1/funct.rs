//! SPECIAL Function Codes.
//!
//! Function field values (bits 5-0) selecting the operation of R-type instructions.

/// Shift Left Logical (SLL). The all-zero encoding `sll $zero, $zero, 0` is `nop`.
pub const SLL: u32 = 0x00;
/// Shift Right Logical (SRL).
pub const SRL: u32 = 0x02;
/// Shift Right Arithmetic (SRA).
pub const SRA: u32 = 0x03;
/// Shift Left Logical Variable (SLLV).
pub const SLLV: u32 = 0x04;
/// Shift Right Logical Variable (SRLV).
pub const SRLV: u32 = 0x06;
/// Shift Right Arithmetic Variable (SRAV).
pub const SRAV: u32 = 0x07;
/// Jump Register (JR).
pub const JR: u32 = 0x08;
/// Jump and Link Register (JALR).
pub const JALR: u32 = 0x09;
/// System Call (SYSCALL).
pub const SYSCALL: u32 = 0x0C;
/// Breakpoint (BREAK).
pub const BREAK: u32 = 0x0D;
/// Move From HI (MFHI).
pub const MFHI: u32 = 0x10;
/// Move To HI (MTHI).
pub const MTHI: u32 = 0x11;
/// Move From LO (MFLO).
pub const MFLO: u32 = 0x12;
/// Move To LO (MTLO).
pub const MTLO: u32 = 0x13;
/// Multiply (MULT).
pub const MULT: u32 = 0x18;
/// Multiply Unsigned (MULTU).
pub const MULTU: u32 = 0x19;
/// Divide (DIV).
pub const DIV: u32 = 0x1A;
/// Divide Unsigned (DIVU).
pub const DIVU: u32 = 0x1B;
/// Add, trapping on overflow (ADD).
pub const ADD: u32 = 0x20;
/// Add Unsigned (ADDU).
pub const ADDU: u32 = 0x21;
/// Subtract, trapping on overflow (SUB).
pub const SUB: u32 = 0x22;
/// Subtract Unsigned (SUBU).
pub const SUBU: u32 = 0x23;
/// Bitwise AND (AND).
pub const AND: u32 = 0x24;
/// Bitwise OR (OR).
pub const OR: u32 = 0x25;
/// Bitwise XOR (XOR).
pub const XOR: u32 = 0x26;
/// Bitwise NOR (NOR).
pub const NOR: u32 = 0x27;
/// Set on Less Than (SLT).
pub const SLT: u32 = 0x2A;
/// Set on Less Than Unsigned (SLTU).
pub const SLTU: u32 = 0x2B;
