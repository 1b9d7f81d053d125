//! The 8-stage in-order pipeline.
//!
//! - [`latches`] — the shared latch shape and the 7-latch container.
//! - [`hazards`] — operand resolution for both hazard-resolution variants.
//! - [`stages`] — the 7 stage implementations (`fetch` through `writeback`),
//!   each a free `tick(cpu, latches)` function rather than a trait object —
//!   Decode is the one stage whose signature also takes the active
//!   [`crate::config::Variant`], which a uniform trait couldn't express
//!   without every other stage carrying a dead parameter.
//! - [`engine`] — `Pipeline`, which owns the latches and ticks the stages
//!   in the mandated consumer-to-producer order.

/// The pipeline engine (`Pipeline`, `tick`).
pub mod engine;

/// Operand and zero-flag forwarding/resolution.
pub mod hazards;

/// The shared `Latch` shape and the `Latches` container.
pub mod latches;

/// The 7 stage implementations.
pub mod stages;

pub use engine::Pipeline;
pub use latches::{Latch, Latches};
