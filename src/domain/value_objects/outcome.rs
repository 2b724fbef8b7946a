//! Sweep outcome value objects

use serde::Serialize;
use std::fmt;

use crate::domain::entities::ConfigItem;

use super::{MatchCriteria, SweepAction};

/// Result code for one matched object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeResult {
    /// The mutating call completed
    Success,
    /// Nothing to do; the object is already in the target state
    NoActionAllowed,
    /// Protected object left in place; worth a human look
    NoActionBlocked,
    /// Dry run: the call that would have been issued
    Simulated,
    /// The mutating call failed and the run is aborting
    Failure,
}

impl OutcomeResult {
    /// Human phrase used by console output
    pub fn phrase(&self) -> &'static str {
        match self {
            OutcomeResult::Success => "Success",
            OutcomeResult::NoActionAllowed => "No action taken",
            OutcomeResult::NoActionBlocked => "No action taken (needs review)",
            OutcomeResult::Simulated => "Simulated",
            OutcomeResult::Failure => "Request Failure",
        }
    }
}

impl fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// One reported line: what was evaluated and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    /// Category label, e.g. "Password Policies"
    pub category: String,
    pub dry_run: bool,
    pub item: ConfigItem,
    pub criteria: MatchCriteria,
    /// The list entry that matched
    pub matched: String,
    pub action: SweepAction,
    pub result: OutcomeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SweepOutcome {
    pub fn is_failure(&self) -> bool {
        self.result == OutcomeResult::Failure
    }
}
