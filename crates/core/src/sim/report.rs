//! Console pretty-printing of pipeline and architectural state.
//!
//! Two distinct outputs, both user-facing features of `display` mode (not
//! to be confused with the `tracing` instrumentation the stages emit for
//! developers — see `SPEC_FULL.md` §10.1):
//!
//! - [`print_cycle_trace`] — the per-cycle stage trace.
//! - [`print_final_state`] — the end-of-run register file and data memory
//!   dump, printed regardless of CLI mode.

use crate::common::constants::{DATA_MEMORY_DUMP_COUNT, REGISTER_DUMP_COUNT};
use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{Latch, Latches};
use crate::isa::disasm::disassemble;

/// Prints the `Clock Cycle #: N` header followed by one line per stage
/// that held a real instruction this cycle (bubbles are silently
/// skipped, matching how the original simulator's debug trace omits
/// empty stages).
pub fn print_cycle_trace(cycle: u64, latches: &Latches) {
    println!("Clock Cycle #: {cycle}");
    print_stage("Fetch", &latches.f);
    print_stage("Decode/RF", &latches.drf);
    print_stage("Execute1", &latches.ex1);
    print_stage("Execute2", &latches.ex2);
    print_stage("Memory1", &latches.mem1);
    print_stage("Memory2", &latches.mem2);
    print_stage("Writeback", &latches.wb);
}

fn print_stage(name: &str, latch: &Latch) {
    if latch.busy || latch.stalled {
        return;
    }
    let Some(instr) = latch.instruction else {
        return;
    };
    println!("{name:<15}: pc({}) {}", latch.pc, disassemble(&instr));
}

/// Prints the end-of-run architectural register file (all 32 registers,
/// per `SPEC_FULL.md` §6/§11) and the first 100 cells of data memory.
pub fn print_final_state(cpu: &Cpu) {
    println!("=============== STATE OF ARCHITECTURAL REGISTER FILE ==========");
    for (i, (value, valid)) in cpu.regs.dump().iter().enumerate().take(REGISTER_DUMP_COUNT) {
        let status = if *valid { "Valid" } else { "Invalid" };
        println!("|     REG[{i:2}]    |      Value={value:6}     |     Status={status:<7}|");
    }

    println!("============== STATE OF DATA MEMORY =============");
    for (i, value) in cpu
        .data_memory
        .iter()
        .enumerate()
        .take(DATA_MEMORY_DUMP_COUNT)
    {
        println!("|     MEM[{i:2}]     |     Data Value = {value:6}     |");
    }
}
