//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.
//! 3. **Debugging:** Provides a formatted dump of the complete register state.

use std::fmt;

use crate::common::constants::GPR_COUNT;
use crate::isa::abi::reg_name;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers. Register `$zero` is hardwired to
/// zero: writes are discarded and reads always return 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; GPR_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register. Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx & 0x1F] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register `$zero` are silently discarded.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx & 0x1F] = val;
        }
    }
}

impl fmt::Display for Gpr {
    /// Formats the registers four per line with their ABI names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..GPR_COUNT).step_by(4) {
            for i in row..row + 4 {
                write!(f, "{:>5}={:#010x} ", reg_name(i), self.read(i))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
