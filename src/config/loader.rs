//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SweepError, SweepResult};
use crate::infrastructure::http::Region;

use super::env_validator::{closest, EnvVarValidator};
use super::types::Config;

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = "pingone-sweep.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SweepError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Locate and load the configuration file, then apply env overrides.
///
/// An explicit path must exist. Otherwise `./pingone-sweep.toml` is tried,
/// then `<config dir>/pingone-sweep/config.toml`, then built-in defaults.
pub fn discover(explicit: Option<&Path>) -> SweepResult<LoadedConfig> {
    let cwd = std::env::current_dir().ok();
    discover_in(explicit, cwd.as_deref(), dirs::config_dir().as_deref())
}

/// [`discover`] with the search roots supplied (for testing)
pub fn discover_in(
    explicit: Option<&Path>,
    project_dir: Option<&Path>,
    user_config_dir: Option<&Path>,
) -> SweepResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => project_dir
            .map(|dir| dir.join(PROJECT_CONFIG_FILE))
            .filter(|p| p.is_file())
            .or_else(|| {
                user_config_dir
                    .map(|dir| dir.join("pingone-sweep").join("config.toml"))
                    .filter(|p| p.is_file())
            }),
    };

    let Some(path) = candidate else {
        tracing::debug!("No configuration file found, using defaults");
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        });
    };

    tracing::debug!(path = %path.display(), "Loading configuration");
    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(path),
        warnings,
    })
}

/// Apply environment variable overrides (PINGONE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// [`with_env_overrides`] with an injectable environment (for testing)
pub fn with_env_overrides_from<F, W>(mut config: Config, get_env: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let non_empty = |name: &str| get_env(name).filter(|v| !v.trim().is_empty());

    // PINGONE_REGION
    if let Some(region) = non_empty("PINGONE_REGION") {
        let validator = EnvVarValidator::new("PINGONE_REGION", Region::VALID_VALUES);
        let fallback = config.connection.region.clone();
        config.connection.region = validator.resolve(
            &region,
            |s| Region::parse(s).map(|r| Some(r.to_string())),
            fallback,
            writer,
        );
    }

    let connection = &mut config.connection;
    for (var, slot) in [
        ("PINGONE_ENVIRONMENT_ID", &mut connection.worker_environment_id),
        ("PINGONE_CLIENT_ID", &mut connection.client_id),
        ("PINGONE_CLIENT_SECRET", &mut connection.client_secret),
        ("PINGONE_TARGET_ENVIRONMENT_ID", &mut connection.target_environment_id),
        ("PINGONE_ACCESS_TOKEN", &mut connection.access_token),
        ("PINGONE_API_HOSTNAME", &mut connection.api_hostname),
        ("PINGONE_AUTH_HOSTNAME", &mut connection.auth_hostname),
        ("PINGONE_PROXY_URL", &mut connection.proxy_url),
    ] {
        if let Some(value) = non_empty(var) {
            *slot = Some(value);
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "connection",
        "region",
        "worker_environment_id",
        "client_id",
        "client_secret",
        "target_environment_id",
        "access_token",
        "api_hostname",
        "auth_hostname",
        "proxy_url",
        "output",
        "color",
        "unicode",
        "retry",
        "timeout_secs",
        "initial_delay_ms",
        "max_delay_ms",
        "categories",
        "enabled",
        "names",
        "case_sensitive",
        "schema_name",
        "authentication-policies",
        "branding-themes",
        "davinci-forms",
        "directory-attributes",
        "keys",
        "mfa-device-policies",
        "mfa-fido2-policies",
        "notification-policies",
        "password-policies",
        "risk-policies",
        "verify-policies",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
