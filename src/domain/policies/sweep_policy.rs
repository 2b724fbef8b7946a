//! Sweep Policy
//!
//! Decides what happens to one fetched object. Pure; performs no I/O.
//!
//! States are checked in order and the first applicable one wins:
//!
//! 1. `NoMatch` - identifier not in the target list
//! 2. `Protected` - environment default, never touched
//! 3. `AlreadyInTargetState` - disable requested on a disabled object
//! 4. `Simulate` - dry run
//! 5. `Execute` - issue the mutating call

use crate::domain::entities::ConfigItem;
use crate::domain::value_objects::{MatchCriteria, SweepAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDecision<'a> {
    NoMatch,
    Protected { matched: &'a str },
    AlreadyInTargetState { matched: &'a str },
    Simulate { matched: &'a str },
    Execute { matched: &'a str },
}

impl<'a> SweepDecision<'a> {
    pub fn matched(&self) -> Option<&'a str> {
        match *self {
            SweepDecision::NoMatch => None,
            SweepDecision::Protected { matched }
            | SweepDecision::AlreadyInTargetState { matched }
            | SweepDecision::Simulate { matched }
            | SweepDecision::Execute { matched } => Some(matched),
        }
    }
}

pub fn decide<'a>(
    item: &ConfigItem,
    criteria: &'a MatchCriteria,
    action: SweepAction,
    dry_run: bool,
) -> SweepDecision<'a> {
    let Some(matched) = criteria.first_match(&item.identifier) else {
        return SweepDecision::NoMatch;
    };

    if item.is_default() {
        return SweepDecision::Protected { matched };
    }

    if action == SweepAction::Disable && item.is_disabled() {
        return SweepDecision::AlreadyInTargetState { matched };
    }

    if dry_run {
        return SweepDecision::Simulate { matched };
    }

    SweepDecision::Execute { matched }
}
