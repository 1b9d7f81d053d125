//! Literal end-to-end scenarios (S1-S6) and the cross-cutting testable
//! properties, run against a fully assembled [`apex_core::sim::simulator::Simulator`].

use rstest::rstest;

use crate::common::harness::{assemble, run_both_variants};
use apex_core::config::Variant;

#[test]
fn s1_movc_then_addl_resolves_the_raw_hazard() {
    let (no_fwd, fwd) = run_both_variants("MOVC R1,#10\nADDL R2,R1,#5\nHALT\n");
    assert_eq!(no_fwd.cpu.regs.read(1), 10);
    assert_eq!(no_fwd.cpu.regs.read(2), 15);
    assert_eq!(fwd.cpu.regs.read(1), 10);
    assert_eq!(fwd.cpu.regs.read(2), 15);
    // Forwarding resolves the hazard in fewer cycles than stalling does.
    assert!(fwd.cpu.clock < no_fwd.cpu.clock);
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn s2_taken_bz_squashes_the_instruction_behind_it(#[case] variant: Variant) {
    let mut sim = assemble(
        "MOVC R1,#0\nSUBL R2,R1,#0\nBZ #8\nMOVC R3,#99\nMOVC R4,#7\nHALT\n",
        variant,
    );
    sim.run();
    assert_eq!(sim.cpu.regs.read(3), 0, "squashed MOVC must not retire");
    assert_eq!(sim.cpu.regs.read(4), 7);
    assert!(sim.cpu.regs.zero_flag());
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn s3_store_then_load_round_trips_through_data_memory(#[case] variant: Variant) {
    let mut sim = assemble(
        "MOVC R1,#42\nMOVC R2,#0\nSTORE R1,R2,#20\nLOAD R3,R2,#20\nHALT\n",
        variant,
    );
    sim.run();
    assert_eq!(sim.cpu.regs.read(3), 42);
    assert_eq!(sim.cpu.data_memory[20], 42);
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn s4_jump_squashes_the_instruction_behind_it(#[case] variant: Variant) {
    // R1 targets the address of the *third* instruction (index 3), two
    // past JUMP itself, so the squash must discard the intervening MOVC
    // rather than land back on it.
    let mut sim = assemble(
        "MOVC R1,#4012\nJUMP R1,#0\nMOVC R2,#1\nMOVC R3,#2\nHALT\n",
        variant,
    );
    sim.run();
    assert_eq!(sim.cpu.regs.read(2), 0, "squashed MOVC must not retire");
    assert_eq!(sim.cpu.regs.read(3), 2);
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn s5_mul_clears_the_zero_flag(#[case] variant: Variant) {
    let mut sim = assemble("MOVC R1,#3\nMOVC R2,#4\nMUL R3,R1,R2\nHALT\n", variant);
    sim.run();
    assert_eq!(sim.cpu.regs.read(3), 12);
    assert!(!sim.cpu.regs.zero_flag());
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn s6_halt_stops_commit_of_instructions_behind_it(#[case] variant: Variant) {
    let mut sim = assemble("MOVC R1,#1\nHALT\nMOVC R2,#2\n", variant);
    sim.run();
    assert_eq!(sim.cpu.regs.read(1), 1);
    assert_eq!(sim.cpu.regs.read(2), 0);
    assert_eq!(sim.cpu.instructions_completed, 2);
}

#[test]
fn falls_off_the_end_of_code_memory_without_an_explicit_halt() {
    let mut sim = assemble("MOVC R1,#1\nMOVC R2,#2\n", Variant::NoForwarding);
    sim.run();
    assert!(sim.cpu.halted);
    assert_eq!(sim.cpu.regs.read(1), 1);
    assert_eq!(sim.cpu.regs.read(2), 2);
}

#[rstest]
#[case(Variant::NoForwarding)]
#[case(Variant::Forwarding)]
fn determinism_same_program_same_budget_same_final_state(#[case] variant: Variant) {
    let source = "MOVC R1,#10\nADDL R2,R1,#5\nMUL R3,R1,R2\nSTORE R3,R1,#0\nHALT\n";
    let mut first = assemble(source, variant);
    first.run();
    let mut second = assemble(source, variant);
    second.run();
    assert_eq!(first.cpu.regs.dump(), second.cpu.regs.dump());
    assert_eq!(first.cpu.data_memory, second.cpu.data_memory);
    assert_eq!(first.cpu.clock, second.cpu.clock);
}

#[test]
fn register_is_invalid_strictly_between_producer_dispatch_and_retirement() {
    let mut sim = assemble("MOVC R1,#10\nADDL R2,R1,#5\nHALT\n", Variant::NoForwarding);
    // Before the program runs, every register starts valid.
    assert!(sim.cpu.regs.is_valid(1));
    sim.step(); // Fetch MOVC.
    sim.step(); // Decode MOVC -> EX1; R1 goes invalid.
    assert!(!sim.cpu.regs.is_valid(1));
    sim.run();
    assert!(sim.cpu.regs.is_valid(1));
    assert!(sim.cpu.regs.is_valid(2));
}
