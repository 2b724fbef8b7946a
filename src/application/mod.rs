//! Application Layer
//!
//! Use cases that orchestrate the sweep.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Flow
//!
//! `SweepRunner` → `sweep_category` → `SweepEvaluator` → `remote` → `retry`
//!
//! ## Services
//!
//! - `normalizer` - one error shape out of many provider envelopes
//! - `capability` - bill-of-materials gate

pub mod capability;
pub mod categories;
pub mod environment;
pub mod normalizer;
pub mod remote;
pub mod retry;
pub mod runner;
pub mod sweep;

pub use capability::has_capability;
pub use categories::{sweep_category, Category, CategoryReport, CategorySettings};
pub use environment::{CallContext, CancelFlag, TargetEnvironment};
pub use retry::{RetryOptions, DEFAULT_TIMEOUT};
pub use runner::{RunSummary, SweepPlan, SweepRunner};
pub use sweep::{ActionCall, LedgerTotals, OutcomeLedger, SweepEvaluator};
