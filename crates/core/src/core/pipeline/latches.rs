//! Pipeline latch structures for inter-stage communication.
//!
//! Every APEX latch carries the same scratch-field shape (source operand
//! values, a result buffer, a memory address, a private Z snapshot, and
//! busy/stalled flags) regardless of which stage it sits between — unlike
//! a superscalar pipeline's distinct per-boundary entry types, APEX's
//! single-issue, fixed-shape latches are all the same [`Latch`] struct.

use crate::isa::instruction::Instruction;

/// The contents of one pipeline stage at the start of a cycle.
///
/// A latch with `instruction: None` is a bubble: no real instruction
/// occupies this stage this cycle.
#[derive(Debug, Clone, Default)]
pub struct Latch {
    /// The instruction occupying this stage, or `None` for a bubble.
    pub instruction: Option<Instruction>,
    /// Code-memory address this instruction was fetched from. Meaningless
    /// when `instruction` is `None`.
    pub pc: i64,
    /// First source operand's resolved value.
    pub rs1_value: i64,
    /// Second source operand's resolved value.
    pub rs2_value: i64,
    /// Third source operand's resolved value (`STR` only).
    pub rs3_value: i64,
    /// ALU/MOVC/LOAD result.
    pub buffer: i64,
    /// Effective address for a memory operation.
    pub mem_address: i64,
    /// Private zero-flag snapshot, used by branches in Variant B when the
    /// architectural flag isn't yet valid.
    pub z: bool,
    /// Whether `z` holds a value this latch can trust.
    pub z_valid: bool,
    /// Whether this stage currently holds no work (distinct from a
    /// bubble created by squash: `busy` also covers Fetch freezing for a
    /// cycle after a redirect, and HALT freezing Fetch permanently).
    pub busy: bool,
    /// Whether this stage is frozen this cycle (set by Decode on Fetch
    /// when a hazard blocks the in-flight instruction from advancing).
    pub stalled: bool,
}

impl Latch {
    /// An empty, non-busy latch holding no instruction.
    #[must_use]
    pub fn bubble() -> Self {
        Self::default()
    }

    /// Whether this latch holds no real instruction.
    #[must_use]
    pub fn is_bubble(&self) -> bool {
        self.instruction.is_none()
    }
}

/// The full set of 8 latches (Fetch's own staging slot plus the 7 named
/// pipeline stages); retirement itself is not a latch, it's the effect WB
/// has on architectural state.
#[derive(Debug, Clone, Default)]
pub struct Latches {
    /// Fetch's output for this cycle, about to be copied into DRF.
    pub f: Latch,
    /// Decode / register-read.
    pub drf: Latch,
    /// Execute stage 1 (destination-register invalidation).
    pub ex1: Latch,
    /// Execute stage 2 (ALU / control-transfer resolution).
    pub ex2: Latch,
    /// Memory stage 1 (latency-only).
    pub mem1: Latch,
    /// Memory stage 2 (the actual data-memory access).
    pub mem2: Latch,
    /// Writeback.
    pub wb: Latch,
}
