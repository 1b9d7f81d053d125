//! Memory 1 (MEM1): a latch-only stage matching APEX's two-cycle memory
//! latency. No computation happens here; it exists purely so a LOAD/STORE
//! takes the same number of cycles to reach Writeback as every other
//! opcode.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::Latches;

/// Runs MEM1 for one cycle: carries EX2's output forward unchanged.
pub fn tick(_cpu: &mut Cpu, latches: &mut Latches) {
    latches.mem2 = latches.mem1.clone();
}
