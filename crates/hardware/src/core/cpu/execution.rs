//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Stage Evaluation:** Runs the five stages against the start-of-cycle latches.
//! 2. **Hazard Resolution:** Forwards operands into Decode and detects load-use,
//!    branch-use and multiply/divide stalls.
//! 3. **Commit:** Writes the new latches, PC and deferred Execute effects as one unit,
//!    then services the pending exception.
//! 4. **Observability:** Fills the cycle trace and statistics, and optionally logs a
//!    pipeline diagram.

use super::Cpu;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::ExceptionStage;
use crate::core::pipeline::hazards::{need_stall_branch, need_stall_load_use};
use crate::core::pipeline::latches::IfId;
use crate::core::pipeline::stages::decode::{DecodeOutput, DecodedInst};
use crate::core::pipeline::stages::execute::ExEffect;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, read_operands, wb_stage,
};
use crate::core::pipeline::trace::{CycleTrace, Stage};
use crate::isa::disasm;

/// Why Fetch and Decode are held this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hold {
    None,
    LoadUse,
    Branch,
    Multiplier,
}

impl Cpu {
    /// Advances the pipeline by one clock cycle.
    pub fn tick(&mut self) {
        self.mdu.step();
        self.trace = CycleTrace::default();
        self.pending_exception = None;

        self.trace.mark_stage(Stage::Fetch);
        if self.if_id.is_some() {
            self.trace.mark_stage(Stage::Decode);
        }
        if self.ex_mem.is_some() {
            self.trace.mark_stage(Stage::Memory);
        }
        if self.mem_wb.is_some() {
            self.trace.mark_stage(Stage::Writeback);
        }

        let decoded = decode_stage(self);
        let in_delay_slot = decoded.as_ref().is_some_and(DecodedInst::redirects);
        let fetched = fetch_stage(self, in_delay_slot);

        let ex = execute_stage(self);
        if ex.active {
            self.trace.mark_stage(Stage::Execute);
        }
        self.trace.alu_symbol = ex.symbol;
        if let Some(e) = ex.fault {
            self.raise(e, ExceptionStage::Execute);
        }

        let mem = mem_stage(self);
        self.trace.memory_access = mem.access;
        if let Some(e) = mem.fault {
            self.raise(e, ExceptionStage::Memory);
        }

        self.trace.written_register = wb_stage(self);

        let ex_out = ex.entry.as_ref();
        let mem_out = mem.entry.as_ref();
        let id_out = decoded
            .as_ref()
            .map(|d| (d, read_operands(self, d, ex_out, mem_out)));

        let hold = if ex.multiplier_stall {
            Hold::Multiplier
        } else {
            match &id_out {
                Some((d, _)) if d.is_branch() && need_stall_branch(ex_out, mem_out, d.rs, d.rt) => {
                    Hold::Branch
                }
                Some((d, _)) if need_stall_load_use(ex_out, d.source_rs(), d.source_rt()) => {
                    Hold::LoadUse
                }
                _ => Hold::None,
            }
        };

        if let Some(e) = fetched.fault.filter(|_| hold == Hold::None) {
            self.raise(e, ExceptionStage::Fetch);
        }

        self.mem_wb = mem.entry;
        match hold {
            Hold::Multiplier => {
                self.ex_mem = None;
                self.trace.multiplier_stall = true;
                self.stats.stalls_multiplier += 1;
            }
            Hold::LoadUse | Hold::Branch => {
                self.ex_mem = ex.entry;
                self.id_ex = None;
                self.trace.stall = true;
                if hold == Hold::Branch {
                    self.stats.stalls_branch += 1;
                } else {
                    self.stats.stalls_load_use += 1;
                }
                tracing::debug!("stall ({:?}) at pc={:#010x}", hold, self.pc);
            }
            Hold::None => {
                self.ex_mem = ex.entry;
                self.advance_front_end(id_out.map(|(_, out)| out), fetched.entry);
            }
        }

        let squashes_ex = matches!(self.pending_exception, Some((_, ExceptionStage::Memory)));
        if let Some(effect) = ex.effect.filter(|_| !squashes_ex) {
            self.apply_effect(effect);
        }

        if let Some((e, stage)) = self.pending_exception.take() {
            self.commit_exception(e, stage);
        }

        if self.has_next
            && self.past_program_end()
            && self.id_ex.is_none()
            && self.ex_mem.is_none()
            && self.mem_wb.is_none()
        {
            self.has_next = false;
            tracing::debug!("pipeline drained after {} cycles", self.stats.cycles + 1);
        }

        self.stats.cycles += 1;
        if self.trace.branch_taken {
            self.stats.branches_taken += 1;
        }

        if self.trace_instructions {
            self.log_pipeline_diagram();
        }
    }

    /// Moves Decode into ID/EX and Fetch into IF/ID, and selects the next PC.
    fn advance_front_end(&mut self, decoded: Option<DecodeOutput>, fetched: IfId) {
        let default_pc = self.pc.wrapping_add(INSTRUCTION_SIZE);
        let mut next_pc = default_pc;

        if let Some(out) = decoded {
            self.trace.forwarding = out.forwards;
            self.stats.forwards += out.forwards.count() as u64;
            if out.forwards.count() > 0 {
                tracing::debug!(
                    "forward into pc={:#010x}: {:?}",
                    out.entry.pc,
                    out.forwards.as_array()
                );
            }
            if let Some(target) = out.target {
                next_pc = target;
            }
            self.id_ex = Some(out.entry);
        } else {
            self.id_ex = None;
        }

        self.if_id = fetched;
        self.trace.branch_taken = next_pc != default_pc;
        self.pc = next_pc;
    }

    /// Returns `true` once the PC has run past the last loaded instruction.
    ///
    /// Addresses compare as signed words, so kernel-segment PCs (exception
    /// handlers) never count as past the end of a user program.
    const fn past_program_end(&self) -> bool {
        (self.pc as i32) > (self.memory.max_inst_addr() as i32)
    }

    /// Applies a deferred Execute-stage state change.
    fn apply_effect(&mut self, effect: ExEffect) {
        match effect {
            ExEffect::Cop0Write(idx, val) => self.cop0.write(idx, val),
            ExEffect::Rfe => self.cop0.pop_mode_stack(),
            ExEffect::MduIssue(op, rs, rt) => self.mdu.issue(op, rs, rt),
            ExEffect::MoveToHi(val) => self.mdu.move_to_hi(val),
            ExEffect::MoveToLo(val) => self.mdu.move_to_lo(val),
        }
    }

    /// Logs a one-line view of the committed pipeline state.
    pub fn log_pipeline_diagram(&self) {
        let show = |inst: Option<u32>| inst.map_or("-", disasm::mnemonic);
        tracing::info!(
            "[cycle {:>6}] pc={:#010x} | IF/ID {:<7} | ID/EX {:<7} | EX/MEM {:<7} | MEM/WB {:<7}{}{}",
            self.stats.cycles,
            self.pc,
            show(self.if_id.map(|e| e.inst)),
            show(self.id_ex.map(|e| e.inst)),
            show(self.ex_mem.map(|e| e.inst)),
            show(self.mem_wb.map(|e| e.inst)),
            if self.trace.stall { " stall" } else { "" },
            self.trace.exception.map_or(String::new(), |c| format!(" exception: {c}")),
        );
    }
}
