//! Command handlers for the binary.

mod sweep;

pub use sweep::cmd_sweep;
