//! Global simulator constants: memory layout, register counts, and the
//! bubble cost of a taken branch.

/// Address of the first code-memory word. Instruction `i` lives at
/// `CODE_BASE_ADDR + i * CODE_STRIDE`.
pub const CODE_BASE_ADDR: i64 = 4000;

/// Byte distance between consecutive code-memory addresses.
pub const CODE_STRIDE: i64 = 4;

/// Number of addressable cells in data memory.
pub const DATA_MEMORY_SIZE: usize = 4000;

/// Number of general-purpose registers in the architectural register file.
pub const GPR_COUNT: usize = 32;

/// Number of bubbles a taken branch or jump injects into the pipeline
/// (the squashed F/DRF/EX1 latches).
pub const BRANCH_SQUASH_BUBBLES: u64 = 3;

/// Number of registers printed in the end-of-run register table. All 32
/// registers are architecturally visible.
pub const REGISTER_DUMP_COUNT: usize = GPR_COUNT;

/// Number of data-memory cells printed in the end-of-run memory table.
pub const DATA_MEMORY_DUMP_COUNT: usize = 100;
