//! Disassembler: renders an [`Instruction`] back to assembly-like text for
//! the `display`-mode per-cycle stage trace (`<StageName> : pc(<addr>)
//! <pretty-printed instruction>`).

use crate::isa::instruction::{Instruction, Opcode};

/// Renders an instruction the way it appeared (or would have appeared) in
/// source: `MNEMONIC operand,operand,...`.
#[must_use]
pub fn disassemble(instr: &Instruction) -> String {
    let op = instr.opcode;
    match op {
        Opcode::Movc => format!("{op} R{},#{}", instr.rd, instr.imm),
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::And
        | Opcode::Or
        | Opcode::ExOr => {
            format!("{op} R{},R{},R{}", instr.rd, instr.rs1, instr.rs2)
        }
        Opcode::Addl | Opcode::Subl | Opcode::Load => {
            format!("{op} R{},R{},#{}", instr.rd, instr.rs1, instr.imm)
        }
        Opcode::Ldr => format!("{op} R{},R{},R{}", instr.rd, instr.rs1, instr.rs2),
        Opcode::Store => format!("{op} R{},R{},#{}", instr.rs1, instr.rs2, instr.imm),
        Opcode::Str => format!("{op} R{},R{},R{}", instr.rs1, instr.rs2, instr.rs3),
        Opcode::Bz | Opcode::Bnz => format!("{op} #{}", instr.imm),
        Opcode::Jump => format!("{op} R{},#{}", instr.rs1, instr.imm),
        Opcode::Halt => op.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::disassemble;
    use crate::isa::instruction::{Instruction, Opcode};

    #[test]
    fn renders_movc() {
        let mut i = Instruction::new(Opcode::Movc, 0);
        i.rd = 1;
        i.imm = 10;
        assert_eq!(disassemble(&i), "MOVC R1,#10");
    }

    #[test]
    fn renders_str() {
        let mut i = Instruction::new(Opcode::Str, 0);
        i.rs1 = 1;
        i.rs2 = 2;
        i.rs3 = 3;
        assert_eq!(disassemble(&i), "STR R1,R2,R3");
    }

    #[test]
    fn renders_halt() {
        let i = Instruction::new(Opcode::Halt, 0);
        assert_eq!(disassemble(&i), "HALT");
    }
}
