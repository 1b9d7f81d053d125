//! Operand resolution: the forwarding network (Variant B) and the plain
//! register-file lookup (Variant A), unified behind [`Resolution`] so
//! Decode can ask "do I have this operand yet?" without caring which
//! variant is active.
//!
//! Forwarding priority follows the producer closest to retiring *first*
//! (MEM1, then MEM2, then WB) rather than the literal "oldest-in-flight"
//! wording — see `DESIGN.md` for why.

use crate::common::reg::RegisterFile;
use crate::core::pipeline::latches::Latches;
use crate::isa::instruction::RegIndex;

/// The outcome of trying to resolve an operand this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The value is available now.
    Resolved(T),
    /// No source has the value yet; Decode must stall.
    Pending,
}

/// Resolves a general-purpose register for Variant A (no forwarding): the
/// register file's validity bit is the only source of truth.
#[must_use]
pub fn resolve_register_no_forwarding(reg: RegIndex, rf: &RegisterFile) -> Resolution<i64> {
    if rf.is_valid(reg) {
        Resolution::Resolved(rf.read(reg))
    } else {
        Resolution::Pending
    }
}

/// Resolves a general-purpose register for Variant B: tries ALU
/// forwarding from MEM1, MEM2, WB (first match wins, freshest producer
/// first), then load forwarding from WB only, then falls back to the
/// register file.
#[must_use]
pub fn resolve_register_forwarding(
    reg: RegIndex,
    rf: &RegisterFile,
    latches: &Latches,
) -> Resolution<i64> {
    for latch in [&latches.mem1, &latches.mem2, &latches.wb] {
        if let Some(instr) = latch.instruction {
            if instr.opcode.is_alu_producer() && instr.opcode.writes_rd() && instr.rd == reg {
                return Resolution::Resolved(latch.buffer);
            }
        }
    }

    if let Some(instr) = latches.wb.instruction {
        if instr.opcode.is_load_producer() && instr.rd == reg {
            return Resolution::Resolved(latches.wb.buffer);
        }
    }

    resolve_register_no_forwarding(reg, rf)
}

/// Resolves the zero flag for Variant B: MEM1, then MEM2, are valid
/// Z-forwarding sources. EX2 is never a source — within this cycle's
/// tick order (`writeback, memory2, memory1, execute2, execute1, decode,
/// fetch`), EX1 runs after EX2 and overwrites `latches.ex2` with whatever
/// just arrived from EX1, so by the time Decode runs, EX2 holds an
/// instruction that has not been through EX2's own computation yet — its
/// `buffer` is not a result, just the latch default. If EX2 holds a
/// Z-setting producer at all, its actual result isn't available until
/// next cycle, so Decode must stall rather than forward a stale zero.
/// WB is not a Z-forwarding source either.
#[must_use]
pub fn resolve_zero_flag_forwarding(rf: &RegisterFile, latches: &Latches) -> Resolution<bool> {
    if let Some(instr) = latches.ex2.instruction {
        if instr.opcode.sets_zero_flag() {
            return Resolution::Pending;
        }
    }
    for latch in [&latches.mem1, &latches.mem2] {
        if let Some(instr) = latch.instruction {
            if instr.opcode.sets_zero_flag() {
                return Resolution::Resolved(latch.buffer == 0);
            }
        }
    }
    resolve_zero_flag_no_forwarding(rf)
}

/// Resolves the zero flag for Variant A: the register file's validity bit
/// is the only source of truth.
#[must_use]
pub fn resolve_zero_flag_no_forwarding(rf: &RegisterFile) -> Resolution<bool> {
    if rf.zero_valid() {
        Resolution::Resolved(rf.zero_flag())
    } else {
        Resolution::Pending
    }
}
