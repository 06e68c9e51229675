//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Hazards:** Load-use and branch-use stall detection and operand forwarding.
//! 2. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 3. **Signals:** ALU operations and control signals generated in Execute.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 5. **Trace:** The per-cycle record of what each stage did.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// ALU operations and memory control signals.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Per-cycle pipeline trace (stage, forwarding, stall and branch flags).
pub mod trace;
