//! Provider error envelopes returned by the platform.
//!
//! Two shapes exist: the platform API envelope (management, MFA, risk,
//! verify) and the OAuth envelope from the token endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{CallError, ProviderError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Platform API error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Vec<ServiceErrorDetail>,
    #[serde(skip)]
    pub status: Option<u16>,
}

impl ServiceError {
    pub fn new(status: u16, id: &str, code: &str, message: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            code: code.to_string(),
            message: message.to_string(),
            details: Vec::new(),
            status: Some(status),
        }
    }

    pub fn with_detail(mut self, message: &str) -> Self {
        self.details.push(ServiceErrorDetail {
            code: None,
            target: None,
            message: message.to_string(),
        });
        self
    }
}

impl ProviderError for ServiceError {
    fn status_code(&self) -> Option<u16> {
        self.status
    }

    fn error_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn details(&self) -> Vec<String> {
        self.details.iter().map(|d| d.message.clone()).collect()
    }
}

/// OAuth token endpoint error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthError {
    #[serde(default)]
    pub id: Option<String>,
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(skip)]
    pub status: Option<u16>,
}

impl ProviderError for AuthError {
    fn status_code(&self) -> Option<u16> {
        self.status
    }

    fn error_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn code(&self) -> &str {
        &self.error
    }

    fn message(&self) -> &str {
        self.error_description.as_deref().unwrap_or(&self.error)
    }

    fn details(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Which envelope a response body is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    Service,
    Auth,
}

/// Maps a non-success response body onto a [`CallError`].
///
/// Bodies that fit neither envelope become [`CallError::Unrecognized`].
pub fn parse_error_body(envelope: Envelope, status: u16, body: &str) -> CallError {
    match envelope {
        Envelope::Service => match serde_json::from_str::<ServiceError>(body) {
            Ok(mut err) => {
                err.status = Some(status);
                CallError::Provider(Box::new(err))
            }
            Err(_) => unrecognized(status, body),
        },
        Envelope::Auth => match serde_json::from_str::<AuthError>(body) {
            Ok(mut err) => {
                err.status = Some(status);
                CallError::Provider(Box::new(err))
            }
            // The token endpoint falls back to the platform envelope on some paths
            Err(_) => parse_error_body(Envelope::Service, status, body),
        },
    }
}

fn unrecognized(status: u16, body: &str) -> CallError {
    CallError::Unrecognized {
        status,
        body: body.to_string(),
    }
}
