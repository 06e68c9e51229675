//! Sparse Memory Buffer Implementation.
//!
//! This module provides the backing storage for the 32-bit address space. The
//! space is split into 4 KiB blocks that are only allocated when first written,
//! so a program touching the text, data and kernel segments costs a handful of
//! blocks rather than 4 GiB of host memory. Unallocated blocks read as zero.

use std::collections::HashMap;

use crate::common::constants::{BLOCK_OFFSET_MASK, BLOCK_SIZE};

/// One lazily-allocated block of memory.
type Block = Box<[u8; BLOCK_SIZE]>;

/// Sparse byte-addressable buffer covering the whole 32-bit address space.
#[derive(Clone, Debug, Default)]
pub struct SparseBuffer {
    blocks: HashMap<u32, Block>,
}

impl SparseBuffer {
    /// Creates an empty buffer with no blocks allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of blocks allocated so far.
    pub fn allocated_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Reads one byte.
    #[inline]
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.blocks
            .get(&(addr & !BLOCK_OFFSET_MASK))
            .map_or(0, |block| block[(addr & BLOCK_OFFSET_MASK) as usize])
    }

    /// Writes one byte, allocating its block on first touch.
    #[inline]
    pub fn write_u8(&mut self, addr: u32, val: u8) {
        let block = self
            .blocks
            .entry(addr & !BLOCK_OFFSET_MASK)
            .or_insert_with(|| Box::new([0; BLOCK_SIZE]));
        block[(addr & BLOCK_OFFSET_MASK) as usize] = val;
    }

    /// Reads an `N`-byte little-endian value (`N` is 1, 2 or 4).
    ///
    /// Addresses wrap at the top of the address space.
    pub fn load<const N: usize>(&self, addr: u32) -> u32 {
        (0..N).fold(0, |acc, i| {
            acc | (u32::from(self.read_u8(addr.wrapping_add(i as u32))) << (8 * i))
        })
    }

    /// Writes the low `N` bytes of `val` little-endian (`N` is 1, 2 or 4).
    pub fn store<const N: usize>(&mut self, addr: u32, val: u32) {
        for i in 0..N {
            self.write_u8(addr.wrapping_add(i as u32), (val >> (8 * i)) as u8);
        }
    }
}
