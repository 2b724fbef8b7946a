//! Domain Policies
//!
//! Business rules with no I/O.

pub mod sweep_policy;

pub use sweep_policy::{decide, SweepDecision};
