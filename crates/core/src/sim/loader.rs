//! Assembly-program loader: reads an input file and hands it to the
//! [`crate::isa::parse_program`] parser, surfacing both I/O and parse
//! failures as a single [`SimError`] the CLI can `?`-propagate.

use std::path::Path;

use crate::common::error::{ConfigError, SimError};
use crate::isa::instruction::Instruction;
use crate::isa::parse::parse_program;

/// Reads `path` and parses it into an ordered instruction sequence.
///
/// # Errors
///
/// Returns [`SimError::Config`] if `path` cannot be read, or
/// [`SimError::Parse`] on the first malformed assembly line.
pub fn load_program(path: &Path) -> Result<Vec<Instruction>, SimError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    Ok(program)
}
