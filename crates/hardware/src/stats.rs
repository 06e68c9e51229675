//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Stalls:** Load-use, branch-use and multiply/divide stall counts.
//! 3. **Control flow:** Taken branches and jumps, and exceptions taken.
//! 4. **Forwarding:** Operands supplied by the bypass network instead of the register file.

use std::fmt;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that left the Writeback stage.
    pub instructions_retired: u64,

    /// Cycles lost to a load feeding the next instruction.
    pub stalls_load_use: u64,
    /// Cycles lost to a branch waiting on its comparison operands.
    pub stalls_branch: u64,
    /// Cycles `mfhi`/`mflo` waited for the multiply/divide unit.
    pub stalls_multiplier: u64,

    /// Branches and jumps that redirected the PC.
    pub branches_taken: u64,
    /// Exceptions that redirected the PC to the handler.
    pub exceptions_taken: u64,
    /// Operands supplied by a forwarding path.
    pub forwards: u64,
}

impl SimStats {
    /// Returns cycles per retired instruction, or `0.0` before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Returns retired instructions per cycle, or `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Returns the total number of stall cycles of every kind.
    pub const fn total_stalls(&self) -> u64 {
        self.stalls_load_use + self.stalls_branch + self.stalls_multiplier
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HAZARDS")?;
        writeln!(
            f,
            "  stalls.load_use        {} ({:.2}%)",
            self.stalls_load_use,
            pct(self.stalls_load_use)
        )?;
        writeln!(
            f,
            "  stalls.branch          {} ({:.2}%)",
            self.stalls_branch,
            pct(self.stalls_branch)
        )?;
        writeln!(
            f,
            "  stalls.multiplier      {} ({:.2}%)",
            self.stalls_multiplier,
            pct(self.stalls_multiplier)
        )?;
        writeln!(f, "  forwards               {}", self.forwards)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branches.taken         {}", self.branches_taken)?;
        writeln!(f, "  exceptions.taken       {}", self.exceptions_taken)?;
        write!(f, "==========================================================")
    }
}
