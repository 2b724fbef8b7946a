//! Common test utilities for pingone-sweep integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated process environment for running the binary
//! - `Tenant`: an in-memory environment seeded with bootstrap objects

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
