//! The top-level driver: owns the [`Cpu`] and the [`Pipeline`], and steps
//! them one cycle at a time until the program halts, falls off the end of
//! code memory, or exhausts its cycle budget.

use tracing::info;

use crate::config::Config;
use crate::core::cpu::Cpu;
use crate::core::pipeline::engine::Pipeline;
use crate::isa::instruction::Instruction;
use crate::sim::report;

/// Owns the architectural state and the pipeline engine, and runs the
/// cycle loop described in `SPEC_FULL.md` §4.7.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Architectural state: registers, memories, PC, clock, halted flag.
    pub cpu: Cpu,
    /// The 7-stage engine and its hazard-resolution variant.
    pub pipeline: Pipeline,
    /// Whether to print the per-cycle stage trace as each cycle runs.
    pub trace: bool,
    /// Upper bound on simulated cycles; `None` runs to completion.
    pub cycle_limit: Option<u64>,
}

impl Simulator {
    /// Builds a simulator from a loaded program and a [`Config`].
    #[must_use]
    pub fn new(program: Vec<Instruction>, config: &Config) -> Self {
        let cpu = Cpu::new(
            program,
            config.memory.code_base,
            config.memory.data_memory_size,
        );
        let pipeline = Pipeline::new(config.pipeline.variant);
        Self {
            cpu,
            pipeline,
            trace: config.general.trace,
            cycle_limit: config.general.cycle_limit,
        }
    }

    /// Runs one cycle, optionally printing the stage trace first.
    ///
    /// The `always-trace` feature forces the trace on regardless of
    /// `self.trace`, for debugging a run without touching its config.
    pub fn step(&mut self) {
        if self.trace || cfg!(feature = "always-trace") {
            report::print_cycle_trace(self.cpu.clock, &self.pipeline.latches);
        }
        self.pipeline.tick(&mut self.cpu);
    }

    /// Runs cycles until `cpu.halted` is set or `cycle_limit` (if any) is
    /// reached, then prints the final architectural state.
    pub fn run(&mut self) {
        loop {
            if self.cpu.halted {
                break;
            }
            if let Some(limit) = self.cycle_limit {
                if self.cpu.clock > limit {
                    info!(clock = self.cpu.clock, limit, "cycle budget exhausted");
                    break;
                }
            }
            self.step();
        }
        report::print_final_state(&self.cpu);
    }
}
