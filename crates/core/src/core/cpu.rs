//! CPU architectural state: the register file, data memory, code memory,
//! and control fields shared by both pipeline variants.

use crate::common::constants::{CODE_BASE_ADDR, CODE_STRIDE, DATA_MEMORY_SIZE};
use crate::common::reg::RegisterFile;
use crate::isa::instruction::Instruction;

/// All architectural state that outlives a single pipeline cycle: the
/// register file, the flat data memory, the immutable code memory, and
/// the control fields (PC, clock, retirement count, halted flag).
#[derive(Debug, Clone)]
pub struct Cpu {
    /// The 32-register file and the zero flag, each with a validity bit.
    pub regs: RegisterFile,
    /// Flat, word-addressed data memory.
    pub data_memory: Vec<i64>,
    /// The program, loaded once and never mutated thereafter (see
    /// `SPEC_FULL.md` §9 on why branches must not resize this).
    pub code_memory: Vec<Instruction>,
    /// Address of the first code-memory word.
    pub code_base: i64,
    /// Current fetch program counter.
    pub pc: i64,
    /// Number of cycles simulated so far.
    pub clock: u64,
    /// Number of instructions that have retired at WB.
    pub instructions_completed: u64,
    /// Set by WB when a HALT retires, or when the last code-memory
    /// instruction retires without an explicit HALT.
    pub halted: bool,
    /// Set by Decode once a HALT has entered EX1; freezes Fetch and holds
    /// DRF at a bubble for every subsequent cycle (instructions already
    /// past DRF still complete normally).
    pub fetch_frozen: bool,
}

impl Cpu {
    /// Builds a CPU with `code_memory` loaded and the PC pointing at the
    /// first instruction. Data memory is `data_memory_size` cells of zero.
    #[must_use]
    pub fn new(code_memory: Vec<Instruction>, code_base: i64, data_memory_size: usize) -> Self {
        Self {
            regs: RegisterFile::new(),
            data_memory: vec![0; data_memory_size],
            code_memory,
            code_base,
            pc: code_base,
            clock: 0,
            instructions_completed: 0,
            halted: false,
            fetch_frozen: false,
        }
    }

    /// Builds a CPU using the default data memory size and code base
    /// address (§2, §6 of `SPEC_FULL.md`).
    #[must_use]
    pub fn with_defaults(code_memory: Vec<Instruction>) -> Self {
        Self::new(code_memory, CODE_BASE_ADDR, DATA_MEMORY_SIZE)
    }

    /// Converts a code-memory address to an instruction index, or `None`
    /// if the address doesn't land on an instruction boundary or is
    /// outside the loaded program.
    #[must_use]
    pub fn code_index(&self, address: i64) -> Option<usize> {
        if address < self.code_base {
            return None;
        }
        let offset = address - self.code_base;
        if offset % CODE_STRIDE != 0 {
            return None;
        }
        let index = (offset / CODE_STRIDE) as usize;
        if index >= self.code_memory.len() {
            return None;
        }
        Some(index)
    }

    /// Whether `address` is the last instruction's address in the loaded
    /// program.
    #[must_use]
    pub fn is_last_instruction_address(&self, address: i64) -> bool {
        match self.code_memory.len() {
            0 => false,
            len => self.code_index(address) == Some(len - 1),
        }
    }
}
