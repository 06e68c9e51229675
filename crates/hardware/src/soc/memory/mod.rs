//! System Memory and Register File.
//!
//! This module implements the storage the pipeline reads and writes. It provides:
//! 1. **Buffer:** Sparse, lazily-allocated backing storage for the 32-bit address space.
//! 2. **Memory:** Byte, halfword and word loads and stores (little endian, no alignment
//!    enforcement; the pipeline checks alignment and privilege).
//! 3. **Registers:** The general-purpose register file.
//! 4. **Program Image:** Placing instruction words and recording the last instruction address.

/// Sparse block buffer for raw byte storage.
pub mod buffer;

use self::buffer::SparseBuffer;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::LoadError;
use crate::core::arch::gpr::Gpr;

/// Byte-addressable memory plus the general-purpose registers.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    buffer: SparseBuffer,
    regs: Gpr,
    max_inst_addr: u32,
}

impl Memory {
    /// Creates an empty memory with all registers zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a 32-bit word.
    pub fn load_word(&self, addr: u32) -> u32 {
        self.buffer.load::<4>(addr)
    }

    /// Loads a 16-bit halfword, zero-extended.
    pub fn load_halfword(&self, addr: u32) -> u32 {
        self.buffer.load::<2>(addr)
    }

    /// Loads a byte, zero-extended.
    pub fn load_byte(&self, addr: u32) -> u32 {
        self.buffer.load::<1>(addr)
    }

    /// Stores a 32-bit word.
    pub fn store_word(&mut self, addr: u32, val: u32) {
        self.buffer.store::<4>(addr, val);
    }

    /// Stores the low 16 bits of `val`.
    pub fn store_halfword(&mut self, addr: u32, val: u32) {
        self.buffer.store::<2>(addr, val);
    }

    /// Stores the low 8 bits of `val`.
    pub fn store_byte(&mut self, addr: u32, val: u32) {
        self.buffer.store::<1>(addr, val);
    }

    /// Reads a general-purpose register; `$zero` always reads 0.
    pub fn read_register(&self, n: usize) -> u32 {
        self.regs.read(n)
    }

    /// Writes a general-purpose register; writes to `$zero` are discarded.
    pub fn write_register(&mut self, n: usize, val: u32) {
        self.regs.write(n, val);
    }

    /// Returns the register file.
    pub const fn registers(&self) -> &Gpr {
        &self.regs
    }

    /// Sets the address past which no program instruction was loaded.
    pub fn set_max_inst_addr(&mut self, addr: u32) {
        self.max_inst_addr = addr;
    }

    /// Returns the address past which no program instruction was loaded.
    pub const fn max_inst_addr(&self) -> u32 {
        self.max_inst_addr
    }

    /// Returns how many 4 KiB blocks have been allocated.
    pub fn allocated_blocks(&self) -> usize {
        self.buffer.allocated_blocks()
    }

    /// Stores a program image of instruction words.
    ///
    /// Words land at consecutive 4-byte offsets from `base` and the maximum
    /// instruction address becomes `base + 4 * words.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Misaligned`] if `base` is not word aligned and
    /// [`LoadError::AddressOverflow`] if the image would wrap past the top of
    /// the address space. Memory is left untouched on error.
    pub fn load_program(&mut self, base: u32, words: &[u32]) -> Result<(), LoadError> {
        if base % INSTRUCTION_SIZE != 0 {
            return Err(LoadError::Misaligned { base });
        }
        let end = u32::try_from(words.len())
            .ok()
            .and_then(|n| n.checked_mul(INSTRUCTION_SIZE))
            .and_then(|len| base.checked_add(len))
            .ok_or(LoadError::AddressOverflow {
                base,
                words: words.len(),
            })?;

        for (i, &word) in words.iter().enumerate() {
            self.store_word(base + (i as u32) * INSTRUCTION_SIZE, word);
        }
        self.max_inst_addr = end;
        tracing::debug!("loaded {} program words at {:#010x}", words.len(), base);
        Ok(())
    }
}
