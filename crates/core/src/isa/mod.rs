//! The APEX instruction set: the opcode table, the decoded instruction
//! record, the assembly-text parser, and the disassembler used by
//! `display` mode.

/// The `Opcode` enum, its source-set/writes-rd/sets-Z decode table, and the
/// `Instruction` record carried through every pipeline latch.
pub mod instruction;

/// Parses an APEX assembly-text program into an ordered sequence of
/// `Instruction`s.
pub mod parse;

/// Pretty-prints an `Instruction` back into assembly-like text, for the
/// per-cycle stage trace.
pub mod disasm;

pub use instruction::{Instruction, Opcode, RegIndex};
pub use parse::parse_program;
