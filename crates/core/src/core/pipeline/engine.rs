//! The pipeline engine: owns the 7 latches and ticks the 7 stages in the
//! mandated `writeback -> memory2 -> memory1 -> execute2 -> execute1 ->
//! decode -> fetch` order every cycle, then advances the clock.
//!
//! Running stages consumer-first is what lets a single sequential pass
//! model seven stages that would, in real hardware, all update in the
//! same clock edge: by the time Fetch (the last stage ticked) reads its
//! input, every stage ahead of it has already consumed this cycle's
//! latch contents and none of them have been overwritten yet. Ticking
//! the other way, Fetch-first, would let a freshly fetched instruction
//! fall straight through to Writeback in the same cycle it was fetched.

use crate::config::Variant;
use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{
    decode, execute1, execute2, fetch, memory1, memory2, writeback,
};

/// Owns the pipeline's latch state and the hazard-resolution variant in
/// effect; `tick` advances the whole machine by one clock cycle.
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// The 7 named latches.
    pub latches: Latches,
    /// Which hazard-resolution strategy Decode uses.
    pub variant: Variant,
}

impl Pipeline {
    /// Builds a pipeline with all latches empty, using `variant` for
    /// hazard resolution.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            latches: Latches::default(),
            variant,
        }
    }

    /// Runs one full cycle: all seven stages, consumer to producer, then
    /// `cpu.clock += 1`.
    pub fn tick(&mut self, cpu: &mut Cpu) {
        writeback::tick(cpu, &mut self.latches);
        memory2::tick(cpu, &mut self.latches);
        memory1::tick(cpu, &mut self.latches);
        execute2::tick(cpu, &mut self.latches);
        execute1::tick(cpu, &mut self.latches);
        decode::tick(cpu, &mut self.latches, self.variant);
        fetch::tick(cpu, &mut self.latches);
        cpu.clock += 1;
    }
}
