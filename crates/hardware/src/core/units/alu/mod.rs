//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles 32-bit arithmetic with and without overflow detection,
//! logical operations, comparisons, and shifts.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Addu, Sub, Subu, Lui
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, load upper).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand; the value being shifted for shift operations
    /// * `b`  - Second operand; the shift amount for shift operations
    ///
    /// # Returns
    ///
    /// The 32-bit result, or `None` if a trapping operation (`Add`, `Sub`)
    /// overflowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), Some(50));
    ///
    /// // Trapping add overflows, the unsigned form wraps.
    /// assert_eq!(Alu::execute(AluOp::Add, 0x7FFF_FFFF, 1), None);
    /// assert_eq!(Alu::execute(AluOp::Addu, 0x7FFF_FFFF, 1), Some(0x8000_0000));
    ///
    /// // Signed comparison
    /// assert_eq!(Alu::execute(AluOp::Slt, -5_i32 as u32, 10), Some(1));
    ///
    /// // Arithmetic shift keeps the sign
    /// assert_eq!(Alu::execute(AluOp::Sra, 0x8000_0000, 4), Some(0xF800_0000));
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> Option<u32> {
        match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu | AluOp::Lui => {
                arithmetic::execute(op, a, b)
            }
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Slt | AluOp::Sltu => {
                Some(logic::execute(op, a, b))
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => Some(shifts::execute(op, a, b)),
        }
    }
}
