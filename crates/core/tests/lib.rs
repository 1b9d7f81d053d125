//! # APEX integration test suite
//!
//! Entry point for end-to-end tests that drive a [`Simulator`] from
//! assembly source rather than exercising a single pipeline stage in
//! isolation (those live next to their stage as `#[cfg(test)]` modules).

/// Shared test infrastructure: a harness that assembles a program and runs
/// it to completion or for a fixed cycle count.
pub mod common;

/// Literal end-to-end scenarios (S1-S6) and the property-based invariants
/// from the pipeline's testable-properties list.
pub mod scenarios;
