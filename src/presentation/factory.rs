//! Sweep Factory
//!
//! Resolves CLI flags over the loaded configuration into one [`SweepConfig`]
//! and wires the HTTP client into a [`TargetEnvironment`].
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::remote;
use crate::application::retry::never_retry;
use crate::application::{CallContext, CancelFlag, RetryOptions, SweepPlan, TargetEnvironment};
use crate::config::{Config, ConnectionConfig};
use crate::error::{SweepError, SweepResult};
use crate::infrastructure::http::{request_token, TokenResponse, WorkerCredentials};
use crate::infrastructure::{HttpClientConfig, HttpManagementApi, Region};

use super::cli::Cli;

/// How the run authenticates.
#[derive(Debug, Clone)]
pub enum Authentication {
    AccessToken(String),
    Worker(WorkerCredentials),
}

/// Everything a run needs, resolved once from flags, env vars, and config.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub target_environment_id: String,
    pub dry_run: bool,
    pub http: HttpClientConfig,
    pub authentication: Authentication,
    pub retry: RetryOptions,
    pub plan: SweepPlan,
}

impl SweepConfig {
    /// Merge the command line over `config` (which already carries env overrides).
    pub fn resolve(cli: &Cli, config: &Config) -> SweepResult<Self> {
        let mut connection = config.connection.clone();
        cli.connection.apply(&mut connection);

        Ok(Self {
            target_environment_id: required(
                &connection.target_environment_id,
                "target environment ID",
                "target-environment-id",
                "PINGONE_TARGET_ENVIRONMENT_ID",
            )?,
            dry_run: cli.dry_run,
            http: http_config(&connection)?,
            authentication: authentication(&connection)?,
            retry: config.retry.to_options(),
            plan: resolve_plan(cli, config),
        })
    }

    /// Authenticate and build the environment handle for the run.
    pub fn connect(&self, cancel: CancelFlag) -> SweepResult<TargetEnvironment> {
        let calls = CallContext::new(self.retry, cancel);
        let http = self.http.build_client()?;

        let token = match &self.authentication {
            Authentication::AccessToken(token) => token.clone(),
            Authentication::Worker(credentials) => {
                tracing::debug!(
                    environment_id = %credentials.environment_id,
                    auth_base = %self.http.auth_base(),
                    "Requesting worker access token"
                );
                let response: TokenResponse =
                    remote::execute(&calls, "[Authentication]-TOKEN", never_retry, || {
                        request_token(&http, &self.http, credentials)
                    })?;
                response.access_token
            }
        };

        let api = HttpManagementApi::new(http, &self.http, token);
        Ok(
            TargetEnvironment::new(self.target_environment_id.clone(), self.dry_run, Arc::new(api))
                .with_calls(calls),
        )
    }
}

/// The categories to run: one subcommand, or every enabled category.
pub fn resolve_plan(cli: &Cli, config: &Config) -> SweepPlan {
    match &cli.command {
        Some(command) => {
            let category = command.category();
            let mut settings = config.settings_for(category);
            command.apply(&mut settings);
            SweepPlan::only(category, settings)
        }
        None => config.plan(),
    }
}

fn http_config(connection: &ConnectionConfig) -> SweepResult<HttpClientConfig> {
    let raw = required(&connection.region, "region", "region", "PINGONE_REGION")?;
    let region: Region = raw.parse().map_err(SweepError::Configuration)?;

    Ok(HttpClientConfig {
        region,
        api_hostname_override: connection.api_hostname.clone(),
        auth_hostname_override: connection.auth_hostname.clone(),
        proxy_url: connection.proxy_url.clone(),
        ..HttpClientConfig::default()
    })
}

fn authentication(connection: &ConnectionConfig) -> SweepResult<Authentication> {
    if let Some(token) = &connection.access_token {
        return Ok(Authentication::AccessToken(token.clone()));
    }

    Ok(Authentication::Worker(WorkerCredentials {
        environment_id: required(
            &connection.worker_environment_id,
            "worker environment ID",
            "worker-environment-id",
            "PINGONE_ENVIRONMENT_ID",
        )?,
        client_id: required(
            &connection.client_id,
            "worker client ID",
            "worker-client-id",
            "PINGONE_CLIENT_ID",
        )?,
        client_secret: required(
            &connection.client_secret,
            "worker client secret",
            "worker-client-secret",
            "PINGONE_CLIENT_SECRET",
        )?,
    }))
}

fn required(
    value: &Option<String>,
    name: &'static str,
    flag: &'static str,
    env: &'static str,
) -> SweepResult<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(SweepError::MissingSetting { name, flag, env })
}
