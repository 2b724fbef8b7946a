//! Configuration module for pingone-sweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PINGONE_*)
//! 3. Config file (`--config`, `./pingone-sweep.toml`, or
//!    `<config dir>/pingone-sweep/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    discover, discover_in, with_env_overrides_from, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    CategoriesConfig, CategoryConfig, ColorMode, Config, ConnectionConfig, OutputConfig,
    RetryConfig,
};
