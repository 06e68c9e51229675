//! MIPS architecture-specific components.
//!
//! This module contains the implementation of core architectural elements.
//! It includes the following modules:
//! 1. **CP0:** System control coprocessor registers, exception entry and return.
//! 2. **GPRs:** General-Purpose Register file implementation.
//! 3. **Modes:** Privilege mode definitions.

/// System control coprocessor (CP0) registers and exception state.
pub mod cop0;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Privilege mode definitions.
pub mod mode;
