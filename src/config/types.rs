//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{Category, CategorySettings, RetryOptions, SweepPlan};

/// Connection to the platform: where, as whom, and against which environment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Region code (NA, EU, AP, CA)
    #[serde(default)]
    pub region: Option<String>,

    /// Environment holding the worker application used to authenticate
    #[serde(default)]
    pub worker_environment_id: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub client_secret: Option<String>,

    /// Environment to sweep
    #[serde(default)]
    pub target_environment_id: Option<String>,

    /// Pre-issued access token; skips the client-credentials grant
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub api_hostname: Option<String>,

    #[serde(default)]
    pub auth_hostname: Option<String>,

    #[serde(default)]
    pub proxy_url: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Retry tuning for every remote call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetryConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub fn to_options(&self) -> RetryOptions {
        RetryOptions::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_delays(
                Duration::from_millis(self.initial_delay_ms),
                Duration::from_millis(self.max_delay_ms),
            )
    }
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    600
}

fn default_initial_delay_ms() -> u64 {
    250
}

fn default_max_delay_ms() -> u64 {
    10_000
}

/// Per-category settings (`[categories.<command>]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Set to false to leave the category out of a full run
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Names (or issuer DN prefixes) to sweep; built-in list when absent
    #[serde(default)]
    pub names: Option<Vec<String>>,

    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// Directory attributes only
    #[serde(default)]
    pub schema_name: Option<String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            names: None,
            case_sensitive: None,
            schema_name: None,
        }
    }
}

impl CategoryConfig {
    pub fn to_settings(&self) -> CategorySettings {
        CategorySettings {
            identifiers: self.names.clone(),
            case_sensitive: self.case_sensitive,
            schema_name: self.schema_name.clone(),
        }
    }
}

/// One table per category, keyed by its command name.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CategoriesConfig {
    #[serde(default)]
    pub authentication_policies: CategoryConfig,
    #[serde(default)]
    pub branding_themes: CategoryConfig,
    #[serde(default)]
    pub davinci_forms: CategoryConfig,
    #[serde(default)]
    pub directory_attributes: CategoryConfig,
    #[serde(default)]
    pub keys: CategoryConfig,
    #[serde(default)]
    pub mfa_device_policies: CategoryConfig,
    #[serde(default)]
    pub mfa_fido2_policies: CategoryConfig,
    #[serde(default)]
    pub notification_policies: CategoryConfig,
    #[serde(default)]
    pub password_policies: CategoryConfig,
    #[serde(default)]
    pub risk_policies: CategoryConfig,
    #[serde(default)]
    pub verify_policies: CategoryConfig,
}

impl CategoriesConfig {
    pub fn get(&self, category: Category) -> &CategoryConfig {
        match category {
            Category::AuthenticationPolicies => &self.authentication_policies,
            Category::BrandingThemes => &self.branding_themes,
            Category::DaVinciForms => &self.davinci_forms,
            Category::DirectoryAttributes => &self.directory_attributes,
            Category::Keys => &self.keys,
            Category::MfaDevicePolicies => &self.mfa_device_policies,
            Category::MfaFido2Policies => &self.mfa_fido2_policies,
            Category::NotificationPolicies => &self.notification_policies,
            Category::PasswordPolicies => &self.password_policies,
            Category::RiskPolicies => &self.risk_policies,
            Category::VerifyPolicies => &self.verify_policies,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub categories: CategoriesConfig,
}

impl Config {
    /// Every enabled category with its configured settings.
    pub fn plan(&self) -> SweepPlan {
        Category::ALL
            .into_iter()
            .filter(|c| self.categories.get(*c).enabled)
            .fold(SweepPlan::new(), |plan, c| {
                plan.with(c, self.categories.get(c).to_settings())
            })
    }

    /// Settings for one category, whether or not it is enabled for full runs.
    pub fn settings_for(&self, category: Category) -> CategorySettings {
        self.categories.get(category).to_settings()
    }
}
