//! Blocking HTTP adapter for the platform management API.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;

use crate::domain::ports::{ApiResponse, CallError, CallResult, ManagementApi};
use crate::error::{SweepError, SweepResult};

use super::errors::{parse_error_body, Envelope};
use super::region::Region;

/// Per-request HTTP timeout. The retry wrapper enforces the overall deadline.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Where and how to reach the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    pub region: Region,
    pub api_hostname_override: Option<String>,
    pub auth_hostname_override: Option<String>,
    pub proxy_url: Option<String>,
    pub request_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            api_hostname_override: None,
            auth_hostname_override: None,
            proxy_url: None,
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl HttpClientConfig {
    pub fn api_base(&self) -> String {
        let host = self
            .api_hostname_override
            .clone()
            .unwrap_or_else(|| self.region.api_hostname());
        format!("https://{}/v1", host.trim_end_matches('/'))
    }

    pub fn auth_base(&self) -> String {
        let host = self
            .auth_hostname_override
            .clone()
            .unwrap_or_else(|| self.region.auth_hostname());
        format!("https://{}", host.trim_end_matches('/'))
    }

    /// Shared blocking client with timeout, user agent, and optional proxy.
    pub fn build_client(&self) -> SweepResult<Client> {
        let mut builder = Client::builder()
            .timeout(self.request_timeout)
            .user_agent(concat!("pingone-sweep/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &self.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                SweepError::Configuration(format!("invalid proxy URL '{proxy_url}': {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        builder
            .build()
            .map_err(|e| SweepError::Configuration(format!("cannot build HTTP client: {e}")))
    }
}

/// Successful token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Worker application credentials for the client-credentials grant.
#[derive(Clone)]
pub struct WorkerCredentials {
    pub environment_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for WorkerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerCredentials")
            .field("environment_id", &self.environment_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// One client-credentials token request. Meant to be wrapped by the
/// remote call façade so it shares retry and error handling.
pub fn request_token(
    http: &Client,
    config: &HttpClientConfig,
    credentials: &WorkerCredentials,
) -> CallResult {
    let url = format!(
        "{}/{}/as/token",
        config.auth_base(),
        credentials.environment_id
    );
    let request = http
        .post(url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")]);
    send(request, Envelope::Auth)
}

/// Management API client authenticated with a bearer token.
pub struct HttpManagementApi {
    http: Client,
    api_base: String,
    access_token: String,
}

impl HttpManagementApi {
    pub fn new(http: Client, config: &HttpClientConfig, access_token: impl Into<String>) -> Self {
        Self {
            http,
            api_base: config.api_base(),
            access_token: access_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl ManagementApi for HttpManagementApi {
    fn get(&self, path: &str) -> CallResult {
        tracing::trace!(method = "GET", path, "request");
        send(
            self.http.get(self.url(path)).bearer_auth(&self.access_token),
            Envelope::Service,
        )
    }

    fn delete(&self, path: &str) -> CallResult {
        tracing::trace!(method = "DELETE", path, "request");
        send(
            self.http.delete(self.url(path)).bearer_auth(&self.access_token),
            Envelope::Service,
        )
    }

    fn patch(&self, path: &str, body: &serde_json::Value) -> CallResult {
        tracing::trace!(method = "PATCH", path, "request");
        send(
            self.http
                .patch(self.url(path))
                .bearer_auth(&self.access_token)
                .json(body),
            Envelope::Service,
        )
    }
}

fn send(request: RequestBuilder, envelope: Envelope) -> CallResult {
    let response = request
        .send()
        .map_err(|e| CallError::transport(e.to_string()))?;
    let status = response.status().as_u16();
    let text = response
        .text()
        .map_err(|e| CallError::transport(e.to_string()))?;

    if status >= 300 {
        return Err(parse_error_body(envelope, status, &text));
    }

    if text.trim().is_empty() {
        return Ok(ApiResponse::new(status, None));
    }

    match serde_json::from_str(&text) {
        Ok(body) => Ok(ApiResponse::new(status, Some(body))),
        Err(_) => Err(CallError::Unrecognized { status, body: text }),
    }
}
