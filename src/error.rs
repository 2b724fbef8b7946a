//! Error types for pingone-sweep
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// Main error type for sweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// Structured provider error that carries a stable error ID
    #[error("Error when calling `{label}`: {message} - PingOne Error Details:\nID: {id}\nCode: {code}\nMessage: {message}{}", format_details(.details))]
    Provider {
        label: String,
        status: Option<u16>,
        id: String,
        code: String,
        message: String,
        details: Vec<String>,
    },

    /// Any failure without a provider error ID (transport, unparseable body, ...)
    #[error("Error when calling `{label}`: {message}")]
    Request { label: String, message: String },

    /// The call succeeded but returned no payload where one was expected
    #[error("[{label}] No data returned - the API responded with no data")]
    NoData { label: String },

    /// The payload could not be mapped onto the expected shape
    #[error("Error when calling `{label}`: unexpected response payload: {source}")]
    Payload {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    /// Engine misconfiguration detected before any remote call
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A required connection setting was not provided
    #[error("missing required setting '{name}' (flag --{flag} or env {env})")]
    MissingSetting {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The run was interrupted
    #[error("sweep cancelled")]
    Cancelled,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepError {
    /// Short machine-readable code used by JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            SweepError::Provider { .. } => "provider_error",
            SweepError::Request { .. } => "request_failed",
            SweepError::NoData { .. } => "no_data",
            SweepError::Payload { .. } => "unexpected_payload",
            SweepError::Configuration(_) => "configuration",
            SweepError::MissingSetting { .. } => "missing_setting",
            SweepError::InvalidConfig { .. } => "invalid_config",
            SweepError::Cancelled => "cancelled",
            SweepError::Io(_) => "io",
        }
    }
}

fn format_details(details: &[String]) -> String {
    if details.is_empty() {
        return String::new();
    }
    let rendered = serde_json::to_string(details).unwrap_or_else(|_| details.join(", "));
    format!("\nDetails object: {rendered}")
}
