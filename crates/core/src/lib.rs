//! `apex-core` — an 8-stage in-order pipelined simulator for the APEX
//! teaching ISA.
//!
//! The pipeline runs `Fetch -> Decode/RF -> EX1 -> EX2 -> MEM1 -> MEM2 -> WB`
//! against a 32-register file (each register carrying a validity bit), a
//! single zero flag, and a flat data memory. Two hazard-resolution variants
//! share the same engine:
//!
//! 1. **No forwarding** — Decode stalls until a producing instruction
//!    retires.
//! 2. **Forwarding** — Decode may bypass register operands from
//!    MEM1/MEM2/WB and the zero flag from MEM1/MEM2 (EX2 only ever
//!    forces a stall, never a forwarding source).

/// Shared constants, error types, and the register file.
pub mod common;
/// Simulator configuration (pipeline variant, memory sizes, tracing).
pub mod config;
/// CPU state container and the pipeline engine itself.
pub mod core;
/// Instruction records, the opcode decode table, parser, and disassembler.
pub mod isa;
/// Program loader and the cycle-stepping driver.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU state: register file, data memory, code memory, and control fields.
pub use crate::core::Cpu;
/// Top-level simulator; owns the `Cpu` and the pipeline engine.
pub use crate::sim::simulator::Simulator;
