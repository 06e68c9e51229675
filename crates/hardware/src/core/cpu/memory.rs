//! Memory Access Checks and Data Movement.
//!
//! This module implements the access rules shared by the fetch and memory
//! stages. It provides:
//! 1. **Protection:** Kernel addresses (>= `0x8000_0000`) are inaccessible in user mode.
//! 2. **Alignment:** Halfword and word accesses must be naturally aligned.
//! 3. **Width Handling:** Loads with sign or zero extension, and width-sized stores.

use super::Cpu;
use crate::common::constants::KERNEL_TEXT_BASE;
use crate::common::data::AccessType;
use crate::common::error::ExceptionCode;
use crate::core::pipeline::signals::MemWidth;

impl Cpu {
    /// Validates an access before it is performed.
    ///
    /// # Arguments
    ///
    /// * `kind` - Fetch, read or write; selects the load or store address-error code.
    /// * `addr` - The virtual address.
    /// * `width` - The access width.
    ///
    /// # Returns
    ///
    /// `Err` with the address-error cause when the access must fault.
    pub fn check_access(
        &self,
        kind: AccessType,
        addr: u32,
        width: MemWidth,
    ) -> Result<(), ExceptionCode> {
        if self.cop0.in_user_mode() && addr >= KERNEL_TEXT_BASE {
            return Err(kind.address_error());
        }
        if addr & width.align_mask() != 0 {
            return Err(kind.address_error());
        }
        Ok(())
    }

    /// Loads `width` bytes at `addr`, sign-extending when `signed` is set.
    pub fn load(&self, addr: u32, width: MemWidth, signed: bool) -> u32 {
        match (width, signed) {
            (MemWidth::Byte, false) => self.memory.load_byte(addr),
            (MemWidth::Byte, true) => self.memory.load_byte(addr) as u8 as i8 as i32 as u32,
            (MemWidth::Half, false) => self.memory.load_halfword(addr),
            (MemWidth::Half, true) => self.memory.load_halfword(addr) as u16 as i16 as i32 as u32,
            (MemWidth::Word, _) => self.memory.load_word(addr),
        }
    }

    /// Stores the low `width` bytes of `val` at `addr`.
    pub fn store(&mut self, addr: u32, width: MemWidth, val: u32) {
        match width {
            MemWidth::Byte => self.memory.store_byte(addr, val),
            MemWidth::Half => self.memory.store_halfword(addr, val),
            MemWidth::Word => self.memory.store_word(addr, val),
        }
    }
}
