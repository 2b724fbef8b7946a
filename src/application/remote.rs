//! Remote Call Façade
//!
//! Executes one API call through the retry wrapper, turns terminal failures
//! into [`SweepError`]s, and deserializes the payload into a known type.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::ports::{ApiResponse, CallResult};
use crate::error::{SweepError, SweepResult};

use super::environment::CallContext;
use super::retry::{retry, RetryError, RetryPredicate};

/// Runs `call` and deserializes its payload into `T`.
///
/// An absent payload is a [`SweepError::NoData`], never an empty value.
pub fn execute<T, F>(
    ctx: &CallContext,
    label: &str,
    predicate: RetryPredicate,
    call: F,
) -> SweepResult<T>
where
    T: DeserializeOwned,
    F: FnMut() -> CallResult,
{
    execute_with_timeout(ctx, label, predicate, ctx.retry.timeout, call)
}

/// Same as [`execute`] with a per-call deadline.
pub fn execute_with_timeout<T, F>(
    ctx: &CallContext,
    label: &str,
    predicate: RetryPredicate,
    timeout: Duration,
    call: F,
) -> SweepResult<T>
where
    T: DeserializeOwned,
    F: FnMut() -> CallResult,
{
    let response = run(ctx, label, predicate, timeout, call)?;
    let Some(body) = response.body else {
        return Err(SweepError::NoData {
            label: label.to_string(),
        });
    };
    serde_json::from_value(body).map_err(|source| SweepError::Payload {
        label: label.to_string(),
        source,
    })
}

/// Runs a call whose payload is not needed (delete, patch).
pub fn execute_discarding<F>(
    ctx: &CallContext,
    label: &str,
    predicate: RetryPredicate,
    call: F,
) -> SweepResult<()>
where
    F: FnMut() -> CallResult,
{
    run(ctx, label, predicate, ctx.retry.timeout, call).map(|_| ())
}

fn run<F>(
    ctx: &CallContext,
    label: &str,
    predicate: RetryPredicate,
    timeout: Duration,
    call: F,
) -> SweepResult<ApiResponse>
where
    F: FnMut() -> CallResult,
{
    tracing::trace!(label, "calling");
    match retry(ctx, timeout, predicate, call) {
        Ok(response) => Ok(response),
        Err(RetryError::Cancelled) => Err(SweepError::Cancelled),
        Err(RetryError::Failed {
            error,
            normalized,
            attempts,
        }) => {
            tracing::debug!(label, attempts, error = %error, "request failed");
            match normalized {
                Some(n) if n.has_id() => Err(SweepError::Provider {
                    label: label.to_string(),
                    status: n.status,
                    id: n.id.unwrap_or_default(),
                    code: n.code,
                    message: n.message,
                    details: n.details,
                }),
                _ => Err(SweepError::Request {
                    label: label.to_string(),
                    message: error.to_string(),
                }),
            }
        }
    }
}
