//! Execute 2 (EX2): the ALU and every opcode's only stage. Computes
//! arithmetic/logical results and effective memory addresses, and
//! resolves control-transfer instructions (BZ/BNZ/JUMP), squashing the
//! younger in-flight instructions on a taken branch or jump.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{Latch, Latches};
use crate::isa::instruction::Opcode;

/// Runs EX2 for one cycle.
pub fn tick(cpu: &mut Cpu, latches: &mut Latches) {
    let Some(instr) = latches.ex2.instruction else {
        latches.mem1 = Latch::bubble();
        return;
    };

    let mut out = latches.ex2.clone();
    match instr.opcode {
        Opcode::Movc => out.buffer = instr.imm,
        Opcode::Addl => out.buffer = latches.ex2.rs1_value + instr.imm,
        Opcode::Subl => out.buffer = latches.ex2.rs1_value - instr.imm,
        Opcode::Add => out.buffer = latches.ex2.rs1_value + latches.ex2.rs2_value,
        Opcode::Sub => out.buffer = latches.ex2.rs1_value - latches.ex2.rs2_value,
        Opcode::Mul => out.buffer = latches.ex2.rs1_value * latches.ex2.rs2_value,
        Opcode::And => out.buffer = latches.ex2.rs1_value & latches.ex2.rs2_value,
        Opcode::Or => out.buffer = latches.ex2.rs1_value | latches.ex2.rs2_value,
        Opcode::ExOr => out.buffer = latches.ex2.rs1_value ^ latches.ex2.rs2_value,
        Opcode::Load => out.mem_address = latches.ex2.rs1_value + instr.imm,
        Opcode::Store => out.mem_address = latches.ex2.rs2_value + instr.imm,
        Opcode::Ldr => out.mem_address = latches.ex2.rs1_value + latches.ex2.rs2_value,
        Opcode::Str => out.mem_address = latches.ex2.rs2_value + latches.ex2.rs3_value,
        Opcode::Bz => {
            if latches.ex2.z {
                squash(cpu, latches, latches.ex2.pc + instr.imm);
            }
        }
        Opcode::Bnz => {
            if !latches.ex2.z {
                squash(cpu, latches, latches.ex2.pc + instr.imm);
            }
        }
        Opcode::Jump => {
            let target = latches.ex2.rs1_value + instr.imm;
            squash(cpu, latches, target);
        }
        Opcode::Halt => {}
    }

    tracing::trace!(pc = latches.ex2.pc, opcode = %instr.opcode, "execute2");
    latches.mem1 = out;
}

/// Mis-speculation recovery: bubbles F, DRF, and EX1 (the three
/// instructions younger than the branch/jump), redirects the PC, and
/// freezes Fetch for the one cycle it takes the new PC to take effect.
fn squash(cpu: &mut Cpu, latches: &mut Latches, target: i64) {
    tracing::trace!(target, "execute2: squash");
    latches.f = Latch::bubble();
    latches.f.busy = true;
    latches.drf = Latch::bubble();
    latches.ex1 = Latch::bubble();
    cpu.pc = target;
}
