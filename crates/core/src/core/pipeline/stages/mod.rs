//! The seven pipeline stage implementations, ticked each cycle in
//! `writeback -> memory2 -> memory1 -> execute2 -> execute1 -> decode ->
//! fetch` order by [`crate::core::pipeline::engine::Pipeline::tick`].

/// Fetch (F): reads code memory, advances the PC, latches into DRF.
pub mod fetch;

/// Decode / Register-Read (DRF): the hazard engine. Resolves source
/// operands (stalling or forwarding per [`crate::config::Variant`]),
/// handles HALT's permanent Fetch freeze.
pub mod decode;

/// Execute 1 (EX1): pass-through; the earliest point a destination
/// register's validity bit is cleared.
pub mod execute1;

/// Execute 2 (EX2): the ALU and control-transfer resolution stage; owns
/// branch/jump squash.
pub mod execute2;

/// Memory 1 (MEM1): latch-only, models the first cycle of memory latency.
pub mod memory1;

/// Memory 2 (MEM2): the actual data-memory access.
pub mod memory2;

/// Writeback (WB): the sole committer of register-file and zero-flag
/// state; retires instructions.
pub mod writeback;
