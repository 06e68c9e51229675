//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Map:** Conventional MIPS segment base addresses.
//! 2. **Memory Constants:** Block size and shift for the sparse backing store.
//! 3. **Instruction Constants:** Fixed instruction width and register count.

/// Base address of the user text segment, where programs are loaded by default.
pub const TEXT_SEGMENT_BASE: u32 = 0x0040_0000;

/// Base address of the user data segment.
pub const DATA_SEGMENT_BASE: u32 = 0x1001_0000;

/// Base address of the kernel text segment.
///
/// Every address at or above this one is a kernel address and faults when
/// touched in user mode.
pub const KERNEL_TEXT_BASE: u32 = 0x8000_0000;

/// Base address of the kernel data segment.
pub const KERNEL_DATA_BASE: u32 = 0x9000_0000;

/// Single exception vector entry point (R3000 general exception vector).
pub const EXCEPTION_VECTOR: u32 = 0x8000_0080;

/// Size of one lazily-allocated memory block in bytes (4 KiB).
pub const BLOCK_SIZE: usize = 4096;

/// Number of bits to shift to convert between addresses and block numbers.
pub const BLOCK_SHIFT: u32 = 12;

/// Mask for extracting the offset of an address within its block.
pub const BLOCK_OFFSET_MASK: u32 = (BLOCK_SIZE as u32) - 1;

/// Size of every MIPS instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;
