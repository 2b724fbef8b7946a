//! pingone-sweep - clears demo and bootstrap configuration out of a PingOne environment
//!
//! Every object category (sign-on policies, keys, directory attributes, ...) is
//! listed from the management API, matched against a list of names to sweep,
//! and deleted or disabled unless the platform marks it as the default.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    Category, CategorySettings, OutcomeLedger, RunSummary, SweepPlan, SweepRunner,
    TargetEnvironment,
};
pub use config::Config;
pub use domain::entities::ConfigItem;
pub use domain::value_objects::{MatchCriteria, OutcomeResult, SweepAction};
pub use error::{SweepError, SweepResult};
