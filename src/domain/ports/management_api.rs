//! Management API Port
//!
//! The remote surface the sweep engine needs: list, delete, and patch.
//! Paths are relative to the API root, e.g. `environments/{id}/keys`.

use thiserror::Error;

use super::provider_error::ProviderError;

/// Raw result of one successful HTTP exchange.
///
/// `status` may still be >= 300 when an adapter chooses not to map it to an
/// error; the retry layer treats that as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn new(status: u16, body: Option<serde_json::Value>) -> Self {
        Self { status, body }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status < 300
    }
}

/// Failure of one remote call, before normalization.
#[derive(Debug, Error)]
pub enum CallError {
    /// A structured provider envelope
    #[error("{}", .0.message())]
    Provider(Box<dyn ProviderError>),

    /// Connection-level failure; no response was received
    #[error("{message}")]
    Transport { message: String },

    /// A response arrived but its body is not a known envelope
    #[error("{status} {body}")]
    Unrecognized { status: u16, body: String },
}

impl CallError {
    pub fn transport(message: impl Into<String>) -> Self {
        CallError::Transport {
            message: message.into(),
        }
    }

    /// HTTP status when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            CallError::Provider(err) => err.status_code(),
            CallError::Transport { .. } => None,
            CallError::Unrecognized { status, .. } => Some(*status),
        }
    }
}

pub type CallResult = Result<ApiResponse, CallError>;

/// Remote management API used by every category driver.
pub trait ManagementApi: Send + Sync {
    fn get(&self, path: &str) -> CallResult;

    fn delete(&self, path: &str) -> CallResult;

    fn patch(&self, path: &str, body: &serde_json::Value) -> CallResult;
}
