use apex_core::config::{Config, Variant};
use apex_core::isa::parse_program;
use apex_core::sim::simulator::Simulator;

/// Assembles `source` and wraps the resulting [`Simulator`] for a test.
///
/// # Panics
///
/// Panics if `source` fails to parse; tests that exercise parse failures
/// should call [`apex_core::isa::parse_program`] directly instead.
pub fn assemble(source: &str, variant: Variant) -> Simulator {
    let program = parse_program(source).expect("test program should parse");
    let mut config = Config::default();
    config.pipeline.variant = variant;
    Simulator::new(program, &config)
}

/// Runs `source` to completion under both hazard-resolution variants and
/// returns the two finished simulators, in `(no_forwarding, forwarding)`
/// order.
pub fn run_both_variants(source: &str) -> (Simulator, Simulator) {
    let mut no_fwd = assemble(source, Variant::NoForwarding);
    no_fwd.run();
    let mut fwd = assemble(source, Variant::Forwarding);
    fwd.run();
    (no_fwd, fwd)
}
