//! Retry Wrapper
//!
//! Runs one remote call inside a bounded retry loop. A pluggable predicate
//! decides whether a failure is transient; the delay between attempts comes
//! from an explicit [`Backoff`] state machine.

use std::sync::LazyLock;
use std::thread;
use std::time::{Duration, Instant};

use regex::Regex;

use crate::domain::ports::{ApiResponse, CallError, CallResult};
use crate::domain::value_objects::NormalizedError;

use super::environment::CallContext;
use super::normalizer::normalize;

/// Default overall deadline for one call, retries included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(250);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Ceiling for a configured timeout; anything longer is treated as this.
const MAX_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Granularity at which a sleeping retry loop notices cancellation.
const CANCEL_POLL: Duration = Duration::from_millis(50);

/// Decides whether a failed attempt should be retried.
///
/// Receives the HTTP status (if a response arrived) and the normalized error
/// (if one could be derived).
pub type RetryPredicate = fn(Option<u16>, Option<&NormalizedError>) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOptions {
    pub timeout: Duration,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            initial_delay: DEFAULT_INITIAL_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_delays(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_delay = initial;
        self.max_delay = max.max(initial);
        self
    }
}

/// Attempt counter, next delay, and deadline.
#[derive(Debug, Clone)]
pub struct Backoff {
    attempt: u32,
    next_delay: Duration,
    max_delay: Duration,
    deadline: Instant,
}

impl Backoff {
    pub fn new(options: &RetryOptions, started: Instant) -> Self {
        Self {
            attempt: 1,
            next_delay: options.initial_delay,
            max_delay: options.max_delay,
            deadline: started + options.timeout.min(MAX_TIMEOUT),
        }
    }

    /// Number of the attempt about to run (starts at 1).
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Delay before the next attempt, or `None` once the deadline has passed.
    ///
    /// The delay doubles each time up to `max_delay` and never runs past the
    /// deadline, so the final attempt lands at the deadline at the latest.
    pub fn next_delay(&mut self, now: Instant) -> Option<Duration> {
        if now >= self.deadline {
            return None;
        }
        let delay = self.next_delay.min(self.deadline - now);
        self.attempt += 1;
        self.next_delay = self.next_delay.saturating_mul(2).min(self.max_delay);
        Some(delay)
    }
}

/// Terminal outcome of a retried call.
#[derive(Debug)]
pub enum RetryError {
    /// Last observed failure, with its normalized form if one exists
    Failed {
        error: CallError,
        normalized: Option<NormalizedError>,
        attempts: u32,
    },
    Cancelled,
}

/// Never retries. Used when a call site supplies no predicate.
pub fn never_retry(_status: Option<u16>, _error: Option<&NormalizedError>) -> bool {
    false
}

static NOT_AUTHORIZED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^The actor attempting to perform the request is not authorized.")
        .expect("valid regex")
});

/// Standard predicate for read, create, delete, and disable calls.
///
/// Freshly granted permissions take a while to propagate; the platform
/// reports that window with a fixed "actor not authorized" message.
pub fn retry_on_permission_propagation(
    _status: Option<u16>,
    error: Option<&NormalizedError>,
) -> bool {
    let Some(error) = error else {
        return false;
    };
    if NOT_AUTHORIZED_PATTERN.is_match(&error.message) {
        tracing::warn!("Insufficient PingOne privileges detected");
        return true;
    }
    false
}

/// Runs `call` until it succeeds, fails terminally, the deadline passes, or
/// the run is cancelled.
pub fn retry<F>(
    ctx: &CallContext,
    timeout: Duration,
    predicate: RetryPredicate,
    mut call: F,
) -> Result<ApiResponse, RetryError>
where
    F: FnMut() -> CallResult,
{
    let options = RetryOptions { timeout, ..ctx.retry };
    let mut backoff = Backoff::new(&options, Instant::now());

    loop {
        if ctx.cancel.is_cancelled() {
            return Err(RetryError::Cancelled);
        }

        let error = match call() {
            Ok(response) if response.is_success() => return Ok(response),
            Ok(response) => CallError::Unrecognized {
                status: response.status,
                body: response.body.map(|b| b.to_string()).unwrap_or_default(),
            },
            Err(error) => error,
        };

        let status = error.status();
        let normalized = normalize(&error);

        // A transport failure has neither a response nor a provider payload
        // and is never handed to the predicate.
        let consult = status.is_some() || normalized.as_ref().is_some_and(|n| n.has_id());
        if !consult || !predicate(status, normalized.as_ref()) {
            return Err(RetryError::Failed {
                error,
                normalized,
                attempts: backoff.attempt(),
            });
        }

        let Some(delay) = backoff.next_delay(Instant::now()) else {
            tracing::debug!(attempts = backoff.attempt(), "Retry deadline reached");
            return Err(RetryError::Failed {
                error,
                normalized,
                attempts: backoff.attempt(),
            });
        };

        tracing::debug!(
            attempt = backoff.attempt(),
            delay_ms = delay.as_millis() as u64,
            "Retrying ..."
        );
        if !sleep_unless_cancelled(ctx, delay) {
            return Err(RetryError::Cancelled);
        }
    }
}

/// Sleeps in short slices; returns `false` if cancelled meanwhile.
fn sleep_unless_cancelled(ctx: &CallContext, delay: Duration) -> bool {
    let wake_at = Instant::now() + delay;
    loop {
        if ctx.cancel.is_cancelled() {
            return false;
        }
        let now = Instant::now();
        if now >= wake_at {
            return true;
        }
        thread::sleep((wake_at - now).min(CANCEL_POLL));
    }
}
