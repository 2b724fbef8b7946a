//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod match_criteria;
mod normalized_error;
mod outcome;
mod product_type;
mod sweep_action;

pub use match_criteria::MatchCriteria;
pub use normalized_error::NormalizedError;
pub use outcome::{OutcomeResult, SweepOutcome};
pub use product_type::ProductType;
pub use sweep_action::SweepAction;
