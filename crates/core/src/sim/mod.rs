//! Simulation utilities: the assembly-program loader, the top-level
//! driver loop, and console reporting.

/// Loads an assembly-text file into an ordered instruction sequence.
pub mod loader;

/// Console pretty-printing of the per-cycle trace and end-of-run state.
pub mod report;

/// `Simulator`: owns the `Cpu` and the `Pipeline`, drives the cycle loop.
pub mod simulator;
