//! Configuration and assembly-parse error types.
//!
//! These are the two error classes that surface at the driver boundary
//! (the pipeline itself never raises a recoverable error): a bad CLI
//! invocation or unreadable input file is a [`ConfigError`]; a malformed
//! assembly line is a [`ParseError`].

use std::path::PathBuf;

/// Errors raised while resolving CLI arguments or loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input assembly file could not be opened or read.
    #[error("cannot read input file {path}: {source}")]
    InputFile {
        /// The path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The CLI mode argument was neither `simulate` nor `display`.
    #[error("unknown mode {mode:?}: expected \"simulate\" or \"display\"")]
    UnknownMode {
        /// The offending argument text.
        mode: String,
    },

    /// The cycle-count argument could not be parsed as an integer.
    #[error("invalid cycle count {text:?}: {source}")]
    InvalidCycleCount {
        /// The offending argument text.
        text: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Errors raised while parsing an APEX assembly program.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// An opcode mnemonic was not recognized.
    #[error("line {line}: unknown opcode {text:?}")]
    UnknownOpcode {
        /// 1-indexed source line.
        line: usize,
        /// The offending mnemonic.
        text: String,
    },

    /// An instruction had the wrong number or shape of operands for its
    /// opcode.
    #[error("line {line}: wrong operands for {opcode}: {text:?}")]
    BadOperands {
        /// 1-indexed source line.
        line: usize,
        /// The opcode whose operand grammar was violated.
        opcode: String,
        /// The raw operand text.
        text: String,
    },

    /// A register operand wasn't of the form `R<n>`, or `n` was out of
    /// range.
    #[error("line {line}: invalid register {text:?}")]
    BadRegister {
        /// 1-indexed source line.
        line: usize,
        /// The offending operand text.
        text: String,
    },

    /// An immediate operand wasn't of the form `#<n>`.
    #[error("line {line}: invalid immediate {text:?}")]
    BadImmediate {
        /// 1-indexed source line.
        line: usize,
        /// The offending operand text.
        text: String,
    },
}

/// The two error classes that can stop the simulator before it runs a
/// single cycle, unified so the driver boundary (the CLI) can `?`-propagate
/// through loading and parsing with one error type and match on its kind
/// to pick an exit code.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A CLI/configuration problem: bad mode, bad cycle count, unreadable
    /// file.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A malformed assembly program.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
