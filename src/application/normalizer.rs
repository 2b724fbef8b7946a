//! Error Normalizer
//!
//! Turns whatever a failed call produced into a [`NormalizedError`].

use crate::domain::ports::CallError;
use crate::domain::value_objects::NormalizedError;

/// `None` for transport failures: there is no provider payload to describe.
pub fn normalize(error: &CallError) -> Option<NormalizedError> {
    match error {
        CallError::Provider(provider) => Some(NormalizedError {
            status: provider.status_code(),
            id: provider.error_id().map(str::to_string),
            code: provider.code().to_string(),
            message: provider.message().to_string(),
            details: provider.details(),
        }),
        CallError::Transport { message } => {
            tracing::warn!(error = %message, "Detected HTTP error");
            None
        }
        CallError::Unrecognized { status, body } => {
            tracing::warn!(status, "Detected unknown error shape");
            let message = if body.trim().is_empty() {
                status_text(*status)
            } else {
                body.clone()
            };
            Some(NormalizedError::textual(Some(*status), message))
        }
    }
}

fn status_text(status: u16) -> String {
    let reason = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => return format!("HTTP {status}"),
    };
    format!("HTTP {status} {reason}")
}
