//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs:
//! 1. **Arithmetic:** ALU operations, with overflow detection for `add`, `sub` and `addi`.
//! 2. **Address Generation:** Effective addresses for loads and stores.
//! 3. **Multiply/Divide:** Issue to the HI/LO unit and `mfhi`/`mflo` reads, stalling
//!    while a result is pending.
//! 4. **Coprocessor 0:** `mfc0`, `mtc0` and `rfe`, with usability checks.
//! 5. **Exceptions:** `syscall`, `break`, reserved encodings and unusable coprocessors.
//!
//! Execute reads CPU state but never mutates it. State changes owned by the
//! instruction (HI/LO, CP0) are returned as an [`ExEffect`] that the cycle
//! commit applies only when the instruction is not squashed.

use crate::common::error::{ExceptionCode, MipsException};
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemWidth};
use crate::core::units::alu::Alu;
use crate::core::units::mdu::MduOp;
use crate::isa::abi::REG_RA;
use crate::isa::instruction::InstructionBits;
use crate::isa::{Op, decode};

/// A state change performed by an Execute-stage instruction at commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExEffect {
    /// `mtc0`: write a coprocessor 0 register.
    Cop0Write(usize, u32),
    /// `rfe`: pop the KU/IE stack.
    Rfe,
    /// `mult`/`multu`/`div`/`divu`: start the HI/LO unit.
    MduIssue(MduOp, u32, u32),
    /// `mthi`: overwrite HI.
    MoveToHi(u32),
    /// `mtlo`: overwrite LO.
    MoveToLo(u32),
}

/// Result of the execute stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Entry for the EX/MEM latch.
    pub entry: ExMem,
    /// Deferred state change.
    pub effect: Option<ExEffect>,
    /// `mfhi`/`mflo` is waiting for the HI/LO unit.
    pub multiplier_stall: bool,
    /// Operator shown in the pipeline view.
    pub symbol: Option<&'static str>,
    /// Exception raised by the instruction.
    pub fault: Option<MipsException>,
    /// The stage did work this cycle.
    pub active: bool,
}

/// What an executed instruction hands to the later stages.
struct Outcome {
    rd: usize,
    value: u32,
    store_data: u32,
    ctrl: ControlSignals,
    effect: Option<ExEffect>,
    symbol: &'static str,
}

impl Outcome {
    const fn none(symbol: &'static str) -> Self {
        Self {
            rd: 0,
            value: 0,
            store_data: 0,
            ctrl: ControlSignals {
                reg_write: false,
                mem_read: false,
                mem_write: false,
                width: MemWidth::Word,
                signed_load: false,
                in_delay_slot: false,
            },
            effect: None,
            symbol,
        }
    }

    const fn write(rd: usize, value: u32, symbol: &'static str) -> Self {
        let mut o = Self::none(symbol);
        o.rd = rd;
        o.value = value;
        o.ctrl.reg_write = true;
        o
    }

    const fn effect(effect: ExEffect, symbol: &'static str) -> Self {
        let mut o = Self::none(symbol);
        o.effect = Some(effect);
        o
    }
}

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - The CPU state; the ID/EX latch, HI/LO and CP0 are read
///
/// # Returns
///
/// The EX/MEM entry and the deferred effect, or the fault or multiplier stall
/// that replaces them.
pub fn execute_stage(cpu: &Cpu) -> ExecuteOutput {
    let Some(id) = cpu.id_ex else {
        return ExecuteOutput::default();
    };

    let op = decode(id.inst);
    if matches!(op, Some(Op::Mfhi | Op::Mflo)) && cpu.mdu.has_steps_remaining() {
        tracing::trace!(
            "EX  pc={:#010x} waiting on HI/LO, {} steps left",
            id.pc,
            cpu.mdu.steps_remaining()
        );
        return ExecuteOutput {
            multiplier_stall: true,
            active: true,
            ..ExecuteOutput::default()
        };
    }

    let outcome = op
        .ok_or(ExceptionCode::IllegalInstruction)
        .map_err(|code| MipsException::new(code, id.pc, id.in_delay_slot))
        .and_then(|op| execute_op(cpu, &id, op));

    match outcome {
        Ok(o) => {
            tracing::trace!(
                "EX  pc={:#010x} {} rd={} value={:#x}",
                id.pc,
                o.symbol,
                o.rd,
                o.value
            );
            let mut ctrl = o.ctrl;
            ctrl.in_delay_slot = id.in_delay_slot;
            ExecuteOutput {
                entry: Some(ExMemEntry {
                    pc: id.pc,
                    inst: id.inst,
                    rd: o.rd,
                    alu: o.value,
                    store_data: o.store_data,
                    ctrl,
                }),
                effect: o.effect,
                multiplier_stall: false,
                symbol: Some(o.symbol),
                fault: None,
                active: op != Some(Op::Jr),
            }
        }
        Err(e) => {
            tracing::debug!("EX  pc={:#010x} fault: {}", id.pc, e.code());
            ExecuteOutput {
                symbol: op.map(Op::mnemonic),
                fault: Some(e),
                active: true,
                ..ExecuteOutput::default()
            }
        }
    }
}

/// Runs one ALU operation, mapping overflow to an exception.
fn alu(op: AluOp, a: u32, b: u32, id: &IdExEntry) -> Result<u32, MipsException> {
    Alu::execute(op, a, b)
        .ok_or_else(|| MipsException::new(ExceptionCode::Overflow, id.pc, id.in_delay_slot))
}

/// Builds an R-type or I-type ALU outcome.
fn alu_write(
    op: AluOp,
    rd: usize,
    a: u32,
    b: u32,
    id: &IdExEntry,
) -> Result<Outcome, MipsException> {
    Ok(Outcome::write(rd, alu(op, a, b, id)?, op.symbol()))
}

/// Builds a load or store outcome with the effective address `rs + simm`.
fn mem_access(op: Op, id: &IdExEntry) -> Outcome {
    let mut o = Outcome::none(AluOp::Add.symbol());
    o.value = id.rs_val.wrapping_add(id.imm as u32);
    o.ctrl.width = match op {
        Op::Lb | Op::Lbu | Op::Sb => MemWidth::Byte,
        Op::Lh | Op::Lhu | Op::Sh => MemWidth::Half,
        _ => MemWidth::Word,
    };
    if op.is_load() {
        o.rd = id.inst.rt();
        o.ctrl.reg_write = true;
        o.ctrl.mem_read = true;
        o.ctrl.signed_load = matches!(op, Op::Lb | Op::Lh);
    } else {
        o.store_data = id.rt_val;
        o.ctrl.mem_write = true;
    }
    o
}

fn execute_op(cpu: &Cpu, id: &IdExEntry, op: Op) -> Result<Outcome, MipsException> {
    let inst = id.inst;
    let (rs, rt) = (id.rs_val, id.rt_val);
    let simm = id.imm as u32;
    let link = id.pc_plus4().wrapping_add(4);
    let raise = |code| MipsException::new(code, id.pc, id.in_delay_slot);

    if matches!(op, Op::Mfc0 | Op::Mtc0 | Op::Rfe | Op::Cop0) && !cpu.cop0.cop0_usable() {
        return Err(raise(ExceptionCode::CoprocessorUnusable).with_coprocessor(0));
    }

    let outcome = match op {
        Op::Sll => alu_write(AluOp::Sll, inst.rd(), rt, inst.shamt(), id)?,
        Op::Srl => alu_write(AluOp::Srl, inst.rd(), rt, inst.shamt(), id)?,
        Op::Sra => alu_write(AluOp::Sra, inst.rd(), rt, inst.shamt(), id)?,
        Op::Sllv => alu_write(AluOp::Sll, inst.rd(), rt, rs, id)?,
        Op::Srlv => alu_write(AluOp::Srl, inst.rd(), rt, rs, id)?,
        Op::Srav => alu_write(AluOp::Sra, inst.rd(), rt, rs, id)?,

        Op::Jr | Op::J | Op::Beq | Op::Bne => Outcome::none(op.mnemonic()),
        Op::Jalr => Outcome::write(inst.rd(), link, AluOp::Add.symbol()),
        Op::Jal => Outcome::write(REG_RA, link, AluOp::Add.symbol()),

        Op::Syscall => return Err(raise(ExceptionCode::Syscall)),
        Op::Break => return Err(raise(ExceptionCode::Break)),

        Op::Mfhi => Outcome::write(inst.rd(), cpu.mdu.hi(), op.mnemonic()),
        Op::Mflo => Outcome::write(inst.rd(), cpu.mdu.lo(), op.mnemonic()),
        Op::Mthi => Outcome::effect(ExEffect::MoveToHi(rs), op.mnemonic()),
        Op::Mtlo => Outcome::effect(ExEffect::MoveToLo(rs), op.mnemonic()),
        Op::Mult | Op::Multu | Op::Div | Op::Divu => {
            let mdu_op = match op {
                Op::Mult => MduOp::Multiply,
                Op::Multu => MduOp::MultiplyUnsigned,
                Op::Div => MduOp::Divide,
                _ => MduOp::DivideUnsigned,
            };
            Outcome::effect(ExEffect::MduIssue(mdu_op, rs, rt), mdu_op.symbol())
        }

        Op::Add => alu_write(AluOp::Add, inst.rd(), rs, rt, id)?,
        Op::Addu => alu_write(AluOp::Addu, inst.rd(), rs, rt, id)?,
        Op::Sub => alu_write(AluOp::Sub, inst.rd(), rs, rt, id)?,
        Op::Subu => alu_write(AluOp::Subu, inst.rd(), rs, rt, id)?,
        Op::And => alu_write(AluOp::And, inst.rd(), rs, rt, id)?,
        Op::Or => alu_write(AluOp::Or, inst.rd(), rs, rt, id)?,
        Op::Xor => alu_write(AluOp::Xor, inst.rd(), rs, rt, id)?,
        Op::Nor => alu_write(AluOp::Nor, inst.rd(), rs, rt, id)?,
        Op::Slt => alu_write(AluOp::Slt, inst.rd(), rs, rt, id)?,
        Op::Sltu => alu_write(AluOp::Sltu, inst.rd(), rs, rt, id)?,

        Op::Addi => alu_write(AluOp::Add, inst.rt(), rs, simm, id)?,
        Op::Addiu => alu_write(AluOp::Addu, inst.rt(), rs, simm, id)?,
        Op::Slti => alu_write(AluOp::Slt, inst.rt(), rs, simm, id)?,
        Op::Sltiu => alu_write(AluOp::Sltu, inst.rt(), rs, simm, id)?,
        // Zero-extended logical immediates show their mnemonic, not the operator.
        Op::Andi | Op::Ori | Op::Xori => {
            let alu_op = match op {
                Op::Andi => AluOp::And,
                Op::Ori => AluOp::Or,
                _ => AluOp::Xor,
            };
            let mut o = alu_write(alu_op, inst.rt(), rs, inst.imm(), id)?;
            o.symbol = op.mnemonic();
            o
        }
        Op::Lui => alu_write(AluOp::Lui, inst.rt(), 0, inst.imm(), id)?,

        Op::Lb | Op::Lh | Op::Lw | Op::Lbu | Op::Lhu | Op::Sb | Op::Sh | Op::Sw => {
            mem_access(op, id)
        }

        Op::Mfc0 => Outcome::write(inst.rt(), cpu.cop0.read(inst.rd()), op.mnemonic()),
        Op::Mtc0 => Outcome::effect(ExEffect::Cop0Write(inst.rd(), rt), op.mnemonic()),
        Op::Rfe => Outcome::effect(ExEffect::Rfe, op.mnemonic()),
        Op::Cop0 => Outcome::none(op.mnemonic()),
        Op::Cop(n) => {
            return Err(raise(ExceptionCode::CoprocessorUnusable).with_coprocessor(n));
        }
    };

    Ok(outcome)
}
