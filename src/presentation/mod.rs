//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Resolving flags over configuration and wiring the HTTP client
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Builds the [`SweepConfig`] and the target environment (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use pingone_sweep::presentation::{Cli, SweepConfig};
//!
//! let resolved = SweepConfig::resolve(&cli, &config)?;
//! let env = resolved.connect(cancel)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ConnectionArgs};
pub use factory::{resolve_plan, Authentication, SweepConfig};
