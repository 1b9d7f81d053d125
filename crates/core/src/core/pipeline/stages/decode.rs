//! Decode / Register-Read (DRF): the hazard engine.
//!
//! For the instruction currently latched in DRF, determines the set of
//! source registers (and the zero flag) it needs, tries to resolve them
//! through [`crate::core::pipeline::hazards`], and either advances DRF
//! into EX1 or stalls Fetch for another cycle. HALT is a special case: it
//! always advances, but permanently freezes Fetch behind it.

use crate::common::reg::RegisterFile;
use crate::config::Variant;
use crate::core::cpu::Cpu;
use crate::core::pipeline::hazards::{
    Resolution, resolve_register_forwarding, resolve_register_no_forwarding,
    resolve_zero_flag_forwarding, resolve_zero_flag_no_forwarding,
};
use crate::core::pipeline::latches::{Latch, Latches};
use crate::isa::instruction::{Instruction, Opcode};

/// Runs Decode for one cycle.
pub fn tick(cpu: &mut Cpu, latches: &mut Latches, variant: Variant) {
    let Some(instr) = latches.drf.instruction else {
        // Bubble in DRF: nothing to decode, nothing to stall for.
        latches.ex1 = Latch::bubble();
        latches.f.stalled = false;
        return;
    };

    if instr.opcode == Opcode::Halt {
        tracing::trace!(pc = latches.drf.pc, "decode: HALT, freezing fetch");
        latches.ex1 = latches.drf.clone();
        cpu.fetch_frozen = true;
        latches.f.stalled = true;
        latches.f.busy = true;
        return;
    }

    match resolve_operands(instr, &cpu.regs, latches, variant) {
        Some(resolved) => {
            tracing::trace!(pc = latches.drf.pc, opcode = %instr.opcode, "decode: resolved");
            latches.ex1 = Latch {
                instruction: Some(instr),
                pc: latches.drf.pc,
                rs1_value: resolved.rs1_value,
                rs2_value: resolved.rs2_value,
                rs3_value: resolved.rs3_value,
                z: resolved.z,
                z_valid: resolved.z_valid,
                ..Latch::default()
            };
            latches.f.stalled = false;
        }
        None => {
            tracing::trace!(pc = latches.drf.pc, opcode = %instr.opcode, "decode: stalled");
            latches.ex1 = Latch::bubble();
            latches.f.stalled = true;
        }
    }
}

/// The operand values an instruction needs once it's fully resolved.
struct Resolved {
    rs1_value: i64,
    rs2_value: i64,
    rs3_value: i64,
    z: bool,
    z_valid: bool,
}

/// Attempts to resolve every source operand `instr` declares. Returns
/// `None` if any declared source is still pending, in which case Decode
/// must stall.
fn resolve_operands(
    instr: Instruction,
    rf: &RegisterFile,
    latches: &Latches,
    variant: Variant,
) -> Option<Resolved> {
    let op = instr.opcode;

    let rs1_value = if op.needs_rs1() {
        resolve_register(instr.rs1, rf, latches, variant)?
    } else {
        0
    };
    let rs2_value = if op.needs_rs2() {
        resolve_register(instr.rs2, rf, latches, variant)?
    } else {
        0
    };
    let rs3_value = if op.needs_rs3() {
        resolve_register(instr.rs3, rf, latches, variant)?
    } else {
        0
    };
    let (z, z_valid) = if op.needs_zero_flag() {
        (resolve_zero_flag(rf, latches, variant)?, true)
    } else {
        (false, false)
    };

    Some(Resolved {
        rs1_value,
        rs2_value,
        rs3_value,
        z,
        z_valid,
    })
}

fn resolve_register(
    reg: usize,
    rf: &RegisterFile,
    latches: &Latches,
    variant: Variant,
) -> Option<i64> {
    let resolution = match variant {
        Variant::NoForwarding => resolve_register_no_forwarding(reg, rf),
        Variant::Forwarding => resolve_register_forwarding(reg, rf, latches),
    };
    match resolution {
        Resolution::Resolved(value) => Some(value),
        Resolution::Pending => None,
    }
}

fn resolve_zero_flag(rf: &RegisterFile, latches: &Latches, variant: Variant) -> Option<bool> {
    let resolution = match variant {
        Variant::NoForwarding => resolve_zero_flag_no_forwarding(rf),
        Variant::Forwarding => resolve_zero_flag_forwarding(rf, latches),
    };
    match resolution {
        Resolution::Resolved(value) => Some(value),
        Resolution::Pending => None,
    }
}
