//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage the simulated processor is attached to:
//! the sparse main memory and the register file it carries.

/// Main memory and register file.
pub mod memory;

pub use memory::Memory;
