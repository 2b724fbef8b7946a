//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Connection flags and `--dry-run` are global, so they work before or after the subcommand
//! - Without a subcommand every enabled category is swept in the fixed run order
//! - Each subcommand sweeps one category and may override its name list

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::{Category, CategorySettings};
use crate::config::ConnectionConfig;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// pingone-sweep - remove demo and bootstrap configuration from a PingOne environment
#[derive(Parser, Debug)]
#[command(name = "pingone-sweep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pingone-sweep' without a subcommand to sweep every enabled category.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./pingone-sweep.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report what would be deleted or disabled without changing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to connect and how to authenticate.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Region of the tenant (NA, EU, AP, CA)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Environment holding the worker application
    #[arg(long, global = true, value_name = "ID")]
    pub worker_environment_id: Option<String>,

    #[arg(long, global = true, value_name = "ID")]
    pub worker_client_id: Option<String>,

    #[arg(long, global = true, value_name = "SECRET")]
    pub worker_client_secret: Option<String>,

    /// Environment to sweep
    #[arg(long, global = true, value_name = "ID")]
    pub target_environment_id: Option<String>,

    /// Use this access token instead of the worker client credentials
    #[arg(long, global = true, value_name = "TOKEN")]
    pub access_token: Option<String>,

    /// Override the API hostname derived from the region
    #[arg(long, global = true, value_name = "HOST")]
    pub api_hostname: Option<String>,

    /// Override the auth hostname derived from the region
    #[arg(long, global = true, value_name = "HOST")]
    pub auth_hostname: Option<String>,

    #[arg(long, global = true, value_name = "URL")]
    pub proxy_url: Option<String>,
}

impl ConnectionArgs {
    /// Overlay the flags that were given onto a connection config.
    pub fn apply(&self, connection: &mut ConnectionConfig) {
        for (flag, slot) in [
            (&self.region, &mut connection.region),
            (&self.worker_environment_id, &mut connection.worker_environment_id),
            (&self.worker_client_id, &mut connection.client_id),
            (&self.worker_client_secret, &mut connection.client_secret),
            (&self.target_environment_id, &mut connection.target_environment_id),
            (&self.access_token, &mut connection.access_token),
            (&self.api_hostname, &mut connection.api_hostname),
            (&self.auth_hostname, &mut connection.auth_hostname),
            (&self.proxy_url, &mut connection.proxy_url),
        ] {
            if let Some(value) = flag {
                *slot = Some(value.clone());
            }
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Delete the demo sign-on policies
    #[command(name = "authentication-policies")]
    AuthenticationPolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the demo branding themes
    #[command(name = "branding-themes")]
    BrandingThemes {
        /// Theme name to delete (repeatable)
        #[arg(long = "theme-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the example DaVinci forms
    #[command(name = "davinci-forms")]
    DavinciForms {
        /// Form name to delete (repeatable)
        #[arg(long = "form-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Disable the unused directory schema attributes
    #[command(name = "directory-attributes")]
    DirectoryAttributes {
        /// Attribute name to disable (repeatable)
        #[arg(long = "attribute-name", value_name = "NAME")]
        names: Vec<String>,

        /// Schema holding the attributes
        #[arg(long, value_name = "NAME")]
        schema_name: Option<String>,
    },

    /// Delete the bootstrap signing and encryption keys
    #[command(name = "keys")]
    Keys {
        /// Issuer DN prefix to match (repeatable)
        #[arg(long = "issuer-dn-prefix", value_name = "PREFIX")]
        prefixes: Vec<String>,

        /// Match issuer DN prefixes case-sensitively
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Delete the default MFA device policies
    #[command(name = "mfa-device-policies")]
    MfaDevicePolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the default MFA FIDO2 policies
    #[command(name = "mfa-fido2-policies")]
    MfaFido2Policies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the default notification policies
    #[command(name = "notification-policies")]
    NotificationPolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the demo password policies
    #[command(name = "password-policies")]
    PasswordPolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the default risk policies
    #[command(name = "risk-policies")]
    RiskPolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },

    /// Delete the default identity verification policies
    #[command(name = "verify-policies")]
    VerifyPolicies {
        /// Policy name to delete (repeatable)
        #[arg(long = "policy-name", value_name = "NAME")]
        names: Vec<String>,
    },
}

impl Commands {
    pub fn category(&self) -> Category {
        match self {
            Commands::AuthenticationPolicies { .. } => Category::AuthenticationPolicies,
            Commands::BrandingThemes { .. } => Category::BrandingThemes,
            Commands::DavinciForms { .. } => Category::DaVinciForms,
            Commands::DirectoryAttributes { .. } => Category::DirectoryAttributes,
            Commands::Keys { .. } => Category::Keys,
            Commands::MfaDevicePolicies { .. } => Category::MfaDevicePolicies,
            Commands::MfaFido2Policies { .. } => Category::MfaFido2Policies,
            Commands::NotificationPolicies { .. } => Category::NotificationPolicies,
            Commands::PasswordPolicies { .. } => Category::PasswordPolicies,
            Commands::RiskPolicies { .. } => Category::RiskPolicies,
            Commands::VerifyPolicies { .. } => Category::VerifyPolicies,
        }
    }

    /// Overlay the subcommand's flags onto the configured settings.
    ///
    /// Repeated name flags replace the configured list rather than extend it.
    pub fn apply(&self, settings: &mut CategorySettings) {
        let names = match self {
            Commands::AuthenticationPolicies { names }
            | Commands::BrandingThemes { names }
            | Commands::DavinciForms { names }
            | Commands::MfaDevicePolicies { names }
            | Commands::MfaFido2Policies { names }
            | Commands::NotificationPolicies { names }
            | Commands::PasswordPolicies { names }
            | Commands::RiskPolicies { names }
            | Commands::VerifyPolicies { names } => names,
            Commands::DirectoryAttributes { names, schema_name } => {
                if let Some(schema) = schema_name {
                    settings.schema_name = Some(schema.clone());
                }
                names
            }
            Commands::Keys {
                prefixes,
                case_sensitive,
            } => {
                if *case_sensitive {
                    settings.case_sensitive = Some(true);
                }
                prefixes
            }
        };

        if !names.is_empty() {
            settings.identifiers = Some(names.clone());
        }
    }
}
