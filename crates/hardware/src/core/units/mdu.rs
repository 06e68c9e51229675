//! Multiply/Divide Unit (MDU).
//!
//! This module implements the multi-cycle, non-pipelined HI/LO unit. It provides:
//! 1. **Issue:** `mult`, `multu`, `div` and `divu` latch their operands and start a
//!    latency countdown.
//! 2. **Timing:** `step` is called once per clock; the result lands in HI/LO on the
//!    cycle the countdown reaches zero.
//! 3. **Direct Access:** `mthi`/`mtlo` overwrite one half, `mfhi`/`mflo` read one half.
//!
//! The Execute stage stalls `mfhi`/`mflo` while [`MultiplyUnit::has_steps_remaining`]
//! is true.

/// Operation pending in the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MduOp {
    /// Signed 32x32 -> 64 multiply.
    Multiply,
    /// Unsigned 32x32 -> 64 multiply.
    MultiplyUnsigned,
    /// Signed divide; LO = quotient, HI = remainder.
    Divide,
    /// Unsigned divide; LO = quotient, HI = remainder.
    DivideUnsigned,
}

impl MduOp {
    /// Returns the operator symbol shown in the pipeline view.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Multiply | Self::MultiplyUnsigned => "*",
            Self::Divide | Self::DivideUnsigned => "/",
        }
    }

    /// Returns `true` for the two divide operations.
    pub const fn is_divide(self) -> bool {
        matches!(self, Self::Divide | Self::DivideUnsigned)
    }
}

/// Counter value of an idle unit.
const IDLE: i32 = -1;

/// The HI/LO multiply/divide unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplyUnit {
    hi: u32,
    lo: u32,
    rs: u32,
    rt: u32,
    steps: i32,
    op: Option<MduOp>,
    multiply_latency: u32,
    divide_latency: u32,
}

impl MultiplyUnit {
    /// Creates an idle unit with HI and LO cleared.
    ///
    /// # Arguments
    ///
    /// * `multiply_latency` - Cycles from issuing a multiply until HI/LO are ready.
    /// * `divide_latency` - Cycles from issuing a divide until HI/LO are ready.
    pub fn new(multiply_latency: u32, divide_latency: u32) -> Self {
        Self {
            hi: 0,
            lo: 0,
            rs: 0,
            rt: 0,
            steps: IDLE,
            op: None,
            multiply_latency,
            divide_latency,
        }
    }

    /// Starts a signed multiply.
    pub fn multiply(&mut self, rs: u32, rt: u32) {
        self.issue(MduOp::Multiply, rs, rt);
    }

    /// Starts an unsigned multiply.
    pub fn multiply_unsigned(&mut self, rs: u32, rt: u32) {
        self.issue(MduOp::MultiplyUnsigned, rs, rt);
    }

    /// Starts a signed divide of `rs` by `rt`.
    pub fn divide(&mut self, rs: u32, rt: u32) {
        self.issue(MduOp::Divide, rs, rt);
    }

    /// Starts an unsigned divide of `rs` by `rt`.
    pub fn divide_unsigned(&mut self, rs: u32, rt: u32) {
        self.issue(MduOp::DivideUnsigned, rs, rt);
    }

    /// Latches operands and starts the countdown for `op`.
    pub fn issue(&mut self, op: MduOp, rs: u32, rt: u32) {
        let latency = if op.is_divide() {
            self.divide_latency
        } else {
            self.multiply_latency
        };
        self.rs = rs;
        self.rt = rt;
        self.op = Some(op);
        self.steps = i32::try_from(latency).unwrap_or(i32::MAX);
        tracing::trace!("MDU issue {:?} rs={:#x} rt={:#x} latency={}", op, rs, rt, latency);
    }

    /// Advances the unit by one clock.
    ///
    /// When the countdown reaches zero the result is written to HI/LO and the
    /// unit goes idle.
    pub fn step(&mut self) {
        if self.steps < 0 {
            return;
        }
        self.steps -= 1;
        if self.steps == 0 {
            self.complete();
            self.steps -= 1;
        }
    }

    /// Returns `true` while an issued operation has not yet produced its result.
    pub const fn has_steps_remaining(&self) -> bool {
        self.steps > 0
    }

    /// Returns the number of clocks until the pending result is ready.
    pub fn steps_remaining(&self) -> u32 {
        u32::try_from(self.steps).unwrap_or(0)
    }

    /// Returns the operation most recently issued.
    pub const fn pending_op(&self) -> Option<MduOp> {
        self.op
    }

    /// Reads HI.
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Reads LO.
    pub const fn lo(&self) -> u32 {
        self.lo
    }

    /// Overwrites HI, leaving LO unchanged.
    pub fn move_to_hi(&mut self, val: u32) {
        self.hi = val;
    }

    /// Overwrites LO, leaving HI unchanged.
    pub fn move_to_lo(&mut self, val: u32) {
        self.lo = val;
    }

    /// Computes the pending operation into HI/LO.
    ///
    /// Division by zero does not trap: LO becomes all ones and HI keeps the
    /// dividend. `i32::MIN / -1` wraps to `i32::MIN` with remainder 0.
    fn complete(&mut self) {
        let (rs, rt) = (self.rs, self.rt);
        let (hi, lo) = match self.op {
            Some(MduOp::Multiply) => {
                let p = i64::from(rs as i32) * i64::from(rt as i32);
                ((p >> 32) as u32, p as u32)
            }
            Some(MduOp::MultiplyUnsigned) => {
                let p = u64::from(rs) * u64::from(rt);
                ((p >> 32) as u32, p as u32)
            }
            Some(MduOp::Divide) if rt == 0 => (rs, u32::MAX),
            Some(MduOp::Divide) => (
                (rs as i32).wrapping_rem(rt as i32) as u32,
                (rs as i32).wrapping_div(rt as i32) as u32,
            ),
            Some(MduOp::DivideUnsigned) if rt == 0 => (rs, u32::MAX),
            Some(MduOp::DivideUnsigned) => (rs % rt, rs / rt),
            None => (self.hi, self.lo),
        };
        self.hi = hi;
        self.lo = lo;
        tracing::trace!("MDU complete {:?} hi={:#x} lo={:#x}", self.op, hi, lo);
    }
}
