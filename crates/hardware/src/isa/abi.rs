//! MIPS Application Binary Interface (ABI) register names.
//!
//! Defines the o32 register names and the indices of registers that the
//! pipeline and its tests refer to by role.

/// Register `$zero` (hardwired to zero).
pub const REG_ZERO: usize = 0;
/// Register `$at` (assembler temporary).
pub const REG_AT: usize = 1;
/// Register `$v0` (first return value, syscall number).
pub const REG_V0: usize = 2;
/// Register `$v1` (second return value).
pub const REG_V1: usize = 3;
/// Register `$a0` (first argument).
pub const REG_A0: usize = 4;
/// Register `$a1` (second argument).
pub const REG_A1: usize = 5;
/// Register `$a2` (third argument).
pub const REG_A2: usize = 6;
/// Register `$a3` (fourth argument).
pub const REG_A3: usize = 7;
/// Register `$t0` (temporary).
pub const REG_T0: usize = 8;
/// Register `$t1` (temporary).
pub const REG_T1: usize = 9;
/// Register `$t2` (temporary).
pub const REG_T2: usize = 10;
/// Register `$t3` (temporary).
pub const REG_T3: usize = 11;
/// Register `$t4` (temporary).
pub const REG_T4: usize = 12;
/// Register `$t5` (temporary).
pub const REG_T5: usize = 13;
/// Register `$t6` (temporary).
pub const REG_T6: usize = 14;
/// Register `$t7` (temporary).
pub const REG_T7: usize = 15;
/// Register `$s0` (callee-saved).
pub const REG_S0: usize = 16;
/// Register `$s1` (callee-saved).
pub const REG_S1: usize = 17;
/// Register `$t8` (temporary).
pub const REG_T8: usize = 24;
/// Register `$t9` (temporary).
pub const REG_T9: usize = 25;
/// Register `$k0` (reserved for the exception handler).
pub const REG_K0: usize = 26;
/// Register `$k1` (reserved for the exception handler).
pub const REG_K1: usize = 27;
/// Register `$gp` (global pointer).
pub const REG_GP: usize = 28;
/// Register `$sp` (stack pointer).
pub const REG_SP: usize = 29;
/// Register `$fp` (frame pointer).
pub const REG_FP: usize = 30;
/// Register `$ra` (return address, written by `jal`).
pub const REG_RA: usize = 31;

/// ABI register names for `$0`-`$31`.
pub const REG_NAMES: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the ABI name of a general-purpose register.
///
/// Out-of-range indices render as `"$??"`.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}
