//! APEX pipelined-CPU simulator CLI.
//!
//! Usage: `apex <input_file> {simulate|display} [cycle_count]`.
//!
//! `simulate` runs silently and prints only the final architectural state;
//! `display` additionally prints the per-cycle stage trace. `cycle_count`,
//! if given, bounds the run; otherwise the simulator runs until HALT
//! retires or the program falls off the end of code memory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use apex_core::common::error::{ConfigError, SimError};
use apex_core::config::Config;
use apex_core::sim::loader;
use apex_core::sim::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "apex",
    author,
    version,
    about = "An 8-stage in-order pipelined simulator for the APEX teaching ISA"
)]
struct Cli {
    /// Assembly source file to load.
    input_file: PathBuf,

    /// `simulate` prints only final state; `display` also prints the
    /// per-cycle stage trace.
    mode: String,

    /// Upper bound on simulated cycles; omit to run to completion.
    cycle_count: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("apex: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), SimError> {
    let trace = match cli.mode.as_str() {
        "simulate" => false,
        "display" => true,
        other => {
            return Err(ConfigError::UnknownMode {
                mode: other.to_string(),
            }
            .into());
        }
    };

    let cycle_limit = cli
        .cycle_count
        .map(|text| {
            text.parse::<u64>()
                .map_err(|source| ConfigError::InvalidCycleCount { text, source })
        })
        .transpose()?;

    let program = loader::load_program(&cli.input_file)?;

    let mut config = Config::default();
    config.general.trace = trace;
    config.general.cycle_limit = cycle_limit;

    let mut simulator = Simulator::new(program, &config);
    simulator.run();

    Ok(())
}
