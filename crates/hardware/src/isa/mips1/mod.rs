//! MIPS I Base Instruction Set.
//!
//! Defines the encodings of the integer instructions supported by the pipeline.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (SPECIAL, J, branches, immediates, loads, stores, COPz).
//! - `funct`: Function codes selecting the operation within the SPECIAL opcode.
//! - `cop0`: Sub-operation and function codes of system control coprocessor instructions.

/// Coprocessor 0 sub-operation and function codes.
pub mod cop0;

/// SPECIAL function codes for R-type instructions.
pub mod funct;

/// Major opcodes.
pub mod opcodes;
