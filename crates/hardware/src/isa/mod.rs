//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, decoding, and
//! disassembly of the supported MIPS I instruction subset.
//!
//! # Modules
//!
//! * `mips1`: Opcode, function-code and coprocessor tables.
//! * `decode`: Encoding to [`Op`](decode::Op) mapping.
//! * `disasm`: Human-readable disassembly for the pipeline view and traces.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into operations.
pub mod decode;

/// Instruction disassembler for the pipeline view and diagnostics.
pub mod disasm;

/// Instruction encoding and bit extraction utilities.
pub mod instruction;

/// MIPS I opcode and function code tables.
pub mod mips1;

pub use decode::{Op, decode};
