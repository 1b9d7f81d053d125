//! Assembly-text parser.
//!
//! One instruction per line, comma-separated operands, `#`-prefixed
//! immediates, `R`-prefixed registers. Blank lines and bare `#`-comment
//! lines are skipped. The parser builds the whole instruction sequence up
//! front; the simulator never re-parses.

use crate::common::error::ParseError;
use crate::isa::instruction::{Instruction, Opcode};

/// Parses a complete program from assembly-text source.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first malformed line: an unrecognized
/// mnemonic, a register operand not of the form `R<n>`, an immediate not
/// of the form `#<n>`, or the wrong number of operands for the opcode.
pub fn parse_program(source: &str) -> Result<Vec<Instruction>, ParseError> {
    let mut program = Vec::new();
    for (line_no, raw_line) in source.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_number = line_no + 1;
        let instruction = parse_line(line, line_number, program.len())?;
        program.push(instruction);
    }
    Ok(program)
}

fn parse_line(line: &str, line_number: usize, index: usize) -> Result<Instruction, ParseError> {
    let (mnemonic, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(m, r)| (m, r.trim()));

    let opcode = match mnemonic.to_ascii_uppercase().as_str() {
        "MOVC" => Opcode::Movc,
        "ADD" => Opcode::Add,
        "SUB" => Opcode::Sub,
        "MUL" => Opcode::Mul,
        "AND" => Opcode::And,
        "OR" => Opcode::Or,
        "EX-OR" | "EXOR" | "XOR" => Opcode::ExOr,
        "ADDL" => Opcode::Addl,
        "SUBL" => Opcode::Subl,
        "LOAD" => Opcode::Load,
        "LDR" => Opcode::Ldr,
        "STORE" => Opcode::Store,
        "STR" => Opcode::Str,
        "BZ" => Opcode::Bz,
        "BNZ" => Opcode::Bnz,
        "JUMP" => Opcode::Jump,
        "HALT" => Opcode::Halt,
        other => {
            return Err(ParseError::UnknownOpcode {
                line: line_number,
                text: other.to_string(),
            });
        }
    };

    let operands: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').map(str::trim).collect()
    };

    let mut instr = Instruction::new(opcode, index);
    let bad_operands = || ParseError::BadOperands {
        line: line_number,
        opcode: opcode.mnemonic().to_string(),
        text: rest.to_string(),
    };

    match opcode {
        Opcode::Movc => {
            let [rd, imm] = take2(&operands).ok_or_else(bad_operands)?;
            instr.rd = parse_reg(rd, line_number)?;
            instr.imm = parse_imm(imm, line_number)?;
        }
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::And | Opcode::Or | Opcode::ExOr => {
            let [rd, rs1, rs2] = take3(&operands).ok_or_else(bad_operands)?;
            instr.rd = parse_reg(rd, line_number)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.rs2 = parse_reg(rs2, line_number)?;
        }
        Opcode::Addl | Opcode::Subl | Opcode::Load => {
            let [rd, rs1, imm] = take3(&operands).ok_or_else(bad_operands)?;
            instr.rd = parse_reg(rd, line_number)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.imm = parse_imm(imm, line_number)?;
        }
        Opcode::Ldr => {
            let [rd, rs1, rs2] = take3(&operands).ok_or_else(bad_operands)?;
            instr.rd = parse_reg(rd, line_number)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.rs2 = parse_reg(rs2, line_number)?;
        }
        Opcode::Store => {
            let [rs1, rs2, imm] = take3(&operands).ok_or_else(bad_operands)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.rs2 = parse_reg(rs2, line_number)?;
            instr.imm = parse_imm(imm, line_number)?;
        }
        Opcode::Str => {
            let [rs1, rs2, rs3] = take3(&operands).ok_or_else(bad_operands)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.rs2 = parse_reg(rs2, line_number)?;
            instr.rs3 = parse_reg(rs3, line_number)?;
        }
        Opcode::Bz | Opcode::Bnz => {
            let [imm] = take1(&operands).ok_or_else(bad_operands)?;
            instr.imm = parse_imm(imm, line_number)?;
        }
        Opcode::Jump => {
            let [rs1, imm] = take2(&operands).ok_or_else(bad_operands)?;
            instr.rs1 = parse_reg(rs1, line_number)?;
            instr.imm = parse_imm(imm, line_number)?;
        }
        Opcode::Halt => {
            if !operands.is_empty() {
                return Err(bad_operands());
            }
        }
    }

    Ok(instr)
}

fn take1<'a>(operands: &[&'a str]) -> Option<[&'a str; 1]> {
    match operands {
        [a] => Some([a]),
        _ => None,
    }
}

fn take2<'a>(operands: &[&'a str]) -> Option<[&'a str; 2]> {
    match operands {
        [a, b] => Some([a, b]),
        _ => None,
    }
}

fn take3<'a>(operands: &[&'a str]) -> Option<[&'a str; 3]> {
    match operands {
        [a, b, c] => Some([a, b, c]),
        _ => None,
    }
}

fn parse_reg(text: &str, line: usize) -> Result<usize, ParseError> {
    let digits = text.strip_prefix('R').ok_or_else(|| ParseError::BadRegister {
        line,
        text: text.to_string(),
    })?;
    let idx: usize = digits.parse().map_err(|_| ParseError::BadRegister {
        line,
        text: text.to_string(),
    })?;
    if idx >= crate::common::constants::GPR_COUNT {
        return Err(ParseError::BadRegister {
            line,
            text: text.to_string(),
        });
    }
    Ok(idx)
}

fn parse_imm(text: &str, line: usize) -> Result<i64, ParseError> {
    let digits = text.strip_prefix('#').ok_or_else(|| ParseError::BadImmediate {
        line,
        text: text.to_string(),
    })?;
    digits.parse().map_err(|_| ParseError::BadImmediate {
        line,
        text: text.to_string(),
    })
}
