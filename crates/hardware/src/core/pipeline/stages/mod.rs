//! The five MIPS pipeline stages.
//!
//! One function per stage, each reading the start-of-cycle latches:
//! 1. **Fetch:** Reads the word at the PC and checks the PC is fetchable.
//! 2. **Decode:** Splits instructions into fields, reads and forwards operands,
//!    and resolves branches and jumps.
//! 3. **Execute:** Performs ALU operations, multiply/divide issue and coprocessor moves.
//! 4. **Memory:** Checks alignment and privilege, then loads or stores.
//! 5. **Writeback:** Commits results to the register file.
//!
//! Each stage computes this cycle's result from the latches as they stood at
//! the start of the cycle; [`crate::core::Cpu::tick`] commits the results.

/// ID: field split, operand read and branch resolution.
pub mod decode;

/// EX: ALU, traps, coprocessor moves and multiply/divide issue.
pub mod execute;

/// IF: instruction word fetch.
pub mod fetch;

/// MEM: data access.
pub mod memory;

/// WB: register file update.
pub mod writeback;

/// Decode stage entry points (ID phase 1 and phase 2).
pub use decode::{decode_stage, read_operands};
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
