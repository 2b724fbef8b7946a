//! HTTP access to the platform.
//!
//! - `client` - reqwest-based `ManagementApi` and token request
//! - `errors` - provider error envelopes
//! - `region` - region to hostname mapping

mod client;
mod errors;
mod region;

pub use client::{
    request_token, HttpClientConfig, HttpManagementApi, TokenResponse, WorkerCredentials,
    REQUEST_TIMEOUT,
};
pub use errors::{parse_error_body, AuthError, Envelope, ServiceError, ServiceErrorDetail};
pub use region::Region;
