//! Sweep Evaluator
//!
//! Applies the sweep policy to one fetched object, runs the mutating call
//! when the policy says so, and reports the outcome.

use std::fmt;

use crate::application::environment::TargetEnvironment;
use crate::application::remote;
use crate::application::retry::retry_on_permission_propagation;
use crate::domain::entities::ConfigItem;
use crate::domain::policies::{decide, SweepDecision};
use crate::domain::ports::{CallResult, SweepEvent, SweepEventSink};
use crate::domain::value_objects::{MatchCriteria, OutcomeResult, SweepAction, SweepOutcome};
use crate::error::{SweepError, SweepResult};

type BoxedCall<'a> = Box<dyn FnMut() -> CallResult + 'a>;

/// The one mutating call a category supplies for an object.
pub struct ActionCall<'a> {
    action: SweepAction,
    call: BoxedCall<'a>,
}

impl<'a> ActionCall<'a> {
    pub fn delete(call: impl FnMut() -> CallResult + 'a) -> Self {
        Self {
            action: SweepAction::Delete,
            call: Box::new(call),
        }
    }

    pub fn disable(call: impl FnMut() -> CallResult + 'a) -> Self {
        Self {
            action: SweepAction::Disable,
            call: Box::new(call),
        }
    }

    /// Exactly one of `delete` or `disable` must be supplied.
    pub fn from_calls(
        label: &str,
        delete: Option<BoxedCall<'a>>,
        disable: Option<BoxedCall<'a>>,
    ) -> SweepResult<Self> {
        match (delete, disable) {
            (Some(call), None) => Ok(Self {
                action: SweepAction::Delete,
                call,
            }),
            (None, Some(call)) => Ok(Self {
                action: SweepAction::Disable,
                call,
            }),
            (None, None) => Err(SweepError::Configuration(format!(
                "[{label}] No delete or disable call provided"
            ))),
            (Some(_), Some(_)) => Err(SweepError::Configuration(format!(
                "[{label}] Both delete and disable calls provided; exactly one is allowed"
            ))),
        }
    }

    pub fn action(&self) -> SweepAction {
        self.action
    }
}

impl fmt::Debug for ActionCall<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCall")
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Evaluates objects of one category against its match criteria.
pub struct SweepEvaluator<'a> {
    env: &'a TargetEnvironment,
    label: &'a str,
    sink: &'a dyn SweepEventSink,
}

impl<'a> SweepEvaluator<'a> {
    pub fn new(env: &'a TargetEnvironment, label: &'a str, sink: &'a dyn SweepEventSink) -> Self {
        Self { env, label, sink }
    }

    /// Returns the reported result, or `None` when the object did not match.
    ///
    /// A failed or interrupted mutating call is reported as
    /// [`OutcomeResult::Failure`] and then returned as an error so the run
    /// stops.
    pub fn evaluate(
        &self,
        item: &ConfigItem,
        criteria: &MatchCriteria,
        mut action: ActionCall<'_>,
    ) -> SweepResult<Option<OutcomeResult>> {
        let label = self.label;
        let verb = action.action;
        tracing::debug!(
            category = label,
            identifier = %item.identifier,
            action = %verb,
            "Looping configured list of identifiers"
        );

        let decision = decide(item, criteria, verb, self.env.dry_run());
        let Some(matched) = decision.matched() else {
            return Ok(None);
        };
        tracing::debug!(category = label, matched, "Found");

        let (result, message) = match decision {
            SweepDecision::NoMatch => return Ok(None),
            SweepDecision::Protected { .. } => {
                tracing::warn!(
                    category = label,
                    identifier = %item.identifier,
                    "set as the environment default - no action will be taken"
                );
                (
                    OutcomeResult::NoActionBlocked,
                    Some("set as the environment default".to_string()),
                )
            }
            SweepDecision::AlreadyInTargetState { .. } => {
                tracing::info!(
                    category = label,
                    identifier = %item.identifier,
                    "already disabled - no action taken"
                );
                (OutcomeResult::NoActionAllowed, Some("already disabled".to_string()))
            }
            SweepDecision::Simulate { .. } => {
                tracing::warn!(
                    category = label,
                    identifier = %item.identifier,
                    id = %item.id,
                    action = %verb,
                    "Dry run: action not issued"
                );
                (
                    OutcomeResult::Simulated,
                    Some(format!("{verb} would be issued for ID {}", item.id)),
                )
            }
            SweepDecision::Execute { .. } => {
                let call_label = format!("[{label}]-{verb}");
                match remote::execute_discarding(
                    self.env.calls(),
                    &call_label,
                    retry_on_permission_propagation,
                    &mut action.call,
                ) {
                    Ok(()) => {
                        tracing::info!(
                            category = label,
                            identifier = %item.identifier,
                            action = %verb,
                            "action completed"
                        );
                        (OutcomeResult::Success, None)
                    }
                    Err(err) => {
                        self.report(item, criteria, matched, verb, OutcomeResult::Failure, Some(err.to_string()));
                        return Err(err);
                    }
                }
            }
        };

        self.report(item, criteria, matched, verb, result, message);
        Ok(Some(result))
    }

    fn report(
        &self,
        item: &ConfigItem,
        criteria: &MatchCriteria,
        matched: &str,
        action: SweepAction,
        result: OutcomeResult,
        message: Option<String>,
    ) {
        self.sink.on_event(SweepEvent::Outcome(SweepOutcome {
            category: self.label.to_string(),
            dry_run: self.env.dry_run(),
            item: item.clone(),
            criteria: criteria.clone(),
            matched: matched.to_string(),
            action,
            result,
            message,
        }));
    }
}
