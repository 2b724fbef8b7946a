//! Target environment and the per-run call context.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::ManagementApi;
use crate::error::{SweepError, SweepResult};

use super::retry::RetryOptions;

/// Cooperative cancellation shared with the Ctrl+C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once the run has been interrupted.
    pub fn check(&self) -> SweepResult<()> {
        if self.is_cancelled() {
            return Err(SweepError::Cancelled);
        }
        Ok(())
    }
}

/// What every remote call needs besides the call itself.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub retry: RetryOptions,
    pub cancel: CancelFlag,
}

impl CallContext {
    pub fn new(retry: RetryOptions, cancel: CancelFlag) -> Self {
        Self { retry, cancel }
    }
}

/// The environment being swept. Immutable for the run.
pub struct TargetEnvironment {
    environment_id: String,
    dry_run: bool,
    api: Arc<dyn ManagementApi>,
    calls: CallContext,
}

impl TargetEnvironment {
    pub fn new(environment_id: impl Into<String>, dry_run: bool, api: Arc<dyn ManagementApi>) -> Self {
        Self {
            environment_id: environment_id.into(),
            dry_run,
            api,
            calls: CallContext::default(),
        }
    }

    pub fn with_calls(mut self, calls: CallContext) -> Self {
        self.calls = calls;
        self
    }

    pub fn environment_id(&self) -> &str {
        &self.environment_id
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn api(&self) -> &dyn ManagementApi {
        self.api.as_ref()
    }

    pub fn calls(&self) -> &CallContext {
        &self.calls
    }

    pub fn cancel(&self) -> &CancelFlag {
        &self.calls.cancel
    }

    /// API path below this environment, e.g. `environments/{id}/keys`.
    pub fn path(&self, suffix: &str) -> String {
        format!("environments/{}/{}", self.environment_id, suffix)
    }
}

impl std::fmt::Debug for TargetEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetEnvironment")
            .field("environment_id", &self.environment_id)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}
