//! Memory 2 (MEM2): the only stage that touches data memory. STORE/STR
//! write `rs1_value` to `mem_address`; LOAD/LDR read `mem_address` into
//! `buffer`. Every other opcode passes through untouched.
//!
//! An out-of-range `mem_address` is a program error, not a simulator
//! one (`SPEC_FULL.md` §4.5): debug builds trap via the bounds check
//! built into `Vec` indexing, release builds would need an explicit
//! guard, but APEX test programs never exercise this path intentionally.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::Latches;
use crate::isa::instruction::Opcode;

/// Runs MEM2 for one cycle.
pub fn tick(cpu: &mut Cpu, latches: &mut Latches) {
    let Some(instr) = latches.mem2.instruction else {
        latches.wb = latches.mem2.clone();
        return;
    };

    let mut out = latches.mem2.clone();
    match instr.opcode {
        Opcode::Store | Opcode::Str => {
            let address = latches.mem2.mem_address as usize;
            cpu.data_memory[address] = latches.mem2.rs1_value;
            tracing::trace!(address, value = latches.mem2.rs1_value, "memory2: store");
        }
        Opcode::Load | Opcode::Ldr => {
            let address = latches.mem2.mem_address as usize;
            out.buffer = cpu.data_memory[address];
            tracing::trace!(address, value = out.buffer, "memory2: load");
        }
        _ => {}
    }

    latches.wb = out;
}

#[cfg(test)]
mod tests {
    use super::tick;
    use crate::core::cpu::Cpu;
    use crate::core::pipeline::latches::{Latch, Latches};
    use crate::isa::instruction::{Instruction, Opcode};

    #[test]
    fn store_writes_rs1_value_at_mem_address() {
        let mut cpu = Cpu::with_defaults(vec![]);
        let instr = Instruction::new(Opcode::Store, 0);
        let mut latches = Latches::default();
        latches.mem2 = Latch {
            instruction: Some(instr),
            rs1_value: 42,
            mem_address: 20,
            ..Latch::default()
        };
        tick(&mut cpu, &mut latches);
        assert_eq!(cpu.data_memory[20], 42);
    }

    #[test]
    fn str_also_stores_rs1_value() {
        let mut cpu = Cpu::with_defaults(vec![]);
        let instr = Instruction::new(Opcode::Str, 0);
        let mut latches = Latches::default();
        latches.mem2 = Latch {
            instruction: Some(instr),
            rs1_value: 7,
            mem_address: 5,
            ..Latch::default()
        };
        tick(&mut cpu, &mut latches);
        assert_eq!(cpu.data_memory[5], 7);
    }

    #[test]
    fn load_reads_mem_address_into_buffer() {
        let mut cpu = Cpu::with_defaults(vec![]);
        cpu.data_memory[20] = 99;
        let instr = Instruction::new(Opcode::Load, 0);
        let mut latches = Latches::default();
        latches.mem2 = Latch {
            instruction: Some(instr),
            mem_address: 20,
            ..Latch::default()
        };
        tick(&mut cpu, &mut latches);
        assert_eq!(latches.wb.buffer, 99);
    }

    #[test]
    fn non_memory_op_passes_through_unchanged() {
        let mut cpu = Cpu::with_defaults(vec![]);
        let instr = Instruction::new(Opcode::Movc, 0);
        let mut latches = Latches::default();
        latches.mem2 = Latch {
            instruction: Some(instr),
            buffer: 10,
            ..Latch::default()
        };
        tick(&mut cpu, &mut latches);
        assert_eq!(latches.wb.buffer, 10);
    }
}
