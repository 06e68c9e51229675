//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction. The trapping forms (`Add`,
//! `Sub`) detect signed overflow; the unsigned forms wrap silently, as MIPS
//! `addu`/`subu` do despite the name.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand; the 16-bit immediate for `Lui`.
///
/// # Returns
///
/// The result, or `None` on signed overflow of `Add` or `Sub`. Returns
/// `Some(0)` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
    match op {
        AluOp::Add => (a as i32).checked_add(b as i32).map(|v| v as u32),
        AluOp::Addu => Some(a.wrapping_add(b)),
        AluOp::Sub => (a as i32).checked_sub(b as i32).map(|v| v as u32),
        AluOp::Subu => Some(a.wrapping_sub(b)),
        AluOp::Lui => Some(b << 16),
        _ => Some(0),
    }
}
