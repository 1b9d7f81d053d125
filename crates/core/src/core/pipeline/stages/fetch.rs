//! Fetch (F): reads the next instruction from code memory into latch F,
//! advances the PC, and propagates F into DRF for next cycle's Decode.

use crate::common::constants::CODE_STRIDE;
use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{Latch, Latches};

/// Runs Fetch for one cycle. Ticked last in the per-cycle order so that
/// Decode has already consumed the DRF latch this cycle before Fetch
/// overwrites it via the F->DRF copy below.
pub fn tick(cpu: &mut Cpu, latches: &mut Latches) {
    if cpu.fetch_frozen {
        // A HALT has passed Decode; Fetch never produces real work again,
        // regardless of what this cycle's stalled/busy bits say.
        latches.f = Latch::bubble();
        latches.drf = latches.f.clone();
        return;
    }

    if latches.f.stalled {
        latches.drf = latches.f.clone();
        return;
    }

    if latches.f.busy {
        // One cycle of freeze following a squash redirect.
        latches.f = Latch::bubble();
        latches.drf = latches.f.clone();
        return;
    }

    match cpu.code_index(cpu.pc) {
        Some(index) => {
            let instruction = cpu.code_memory[index];
            latches.f = Latch {
                instruction: Some(instruction),
                pc: cpu.pc,
                ..Latch::default()
            };
            cpu.pc += CODE_STRIDE;
        }
        None => {
            latches.f = Latch::bubble();
        }
    }

    latches.drf = latches.f.clone();
}
