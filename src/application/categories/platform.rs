//! Platform objects: branding themes, keys, notification policies and
//! directory attributes.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::{SweepError, SweepResult};

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_THEME_NAMES: &[&str] = &["Ping Default"];

pub(super) const BOOTSTRAP_KEY_ISSUER_DN_PREFIXES: &[&str] =
    &["C=US,O=Ping Identity,OU=Ping Identity"];

pub(super) const BOOTSTRAP_NOTIFICATION_POLICY_NAMES: &[&str] = &["Default Notification Policy"];

pub(super) const BOOTSTRAP_ATTRIBUTE_NAMES: &[&str] = &[
    "accountId",
    "address",
    "email",
    "externalId",
    "locale",
    "mobilePhone",
    "name",
    "nickname",
    "photo",
    "preferredLanguage",
    "primaryPhone",
    "timezone",
    "title",
    "type",
];

const DEFAULT_SCHEMA_NAME: &str = "User";

#[derive(Debug, Deserialize)]
struct Theme {
    id: String,
    configuration: ThemeConfiguration,
    #[serde(default)]
    default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ThemeConfiguration {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Key {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "issuerDN")]
    issuer_dn: String,
    #[serde(default)]
    usage_type: Option<String>,
    #[serde(default)]
    default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct NotificationPolicy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Schema {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SchemaAttribute {
    id: String,
    name: String,
    #[serde(default)]
    enabled: Option<bool>,
}

pub(super) fn sweep_themes(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("themes", "themes", |theme: &Theme| {
        (
            ConfigItem::new(&theme.configuration.name, &theme.id).with_default(theme.default),
            run.delete_call("themes", &theme.id),
        )
    })
}

pub(super) fn sweep_keys(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("keys", "keys", |key: &Key| {
        tracing::trace!(
            category = run.label(),
            name = key.name.as_deref().unwrap_or_default(),
            usage_type = key.usage_type.as_deref().unwrap_or_default(),
            "Looping names"
        );
        (
            ConfigItem::new(&key.issuer_dn, &key.id).with_default(key.default),
            run.delete_call("keys", &key.id),
        )
    })
}

pub(super) fn sweep_notification_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection(
        "notificationsPolicies",
        "notificationsPolicies",
        |policy: &NotificationPolicy| {
            (
                ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
                run.delete_call("notificationsPolicies", &policy.id),
            )
        },
    )
}

/// Attributes live under a schema, so the schema is resolved by name first.
pub(super) fn sweep_directory_attributes(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    let schema_name = run
        .settings
        .schema_name
        .as_deref()
        .unwrap_or(DEFAULT_SCHEMA_NAME);

    tracing::debug!(category = run.label(), schema_name, "Fetching ID for schema");
    let schema = find_schema(run, schema_name)?;
    tracing::debug!(category = run.label(), schema_id = %schema.id, "Schema ID found");

    let suffix = format!("schemas/{}/attributes", schema.id);
    run.sweep_collection(&suffix, "attributes", |attribute: &SchemaAttribute| {
        (
            ConfigItem::new(&attribute.name, &attribute.id).with_enabled(attribute.enabled),
            run.disable_call(&suffix, &attribute.id),
        )
    })
}

fn find_schema(run: &CategoryRun<'_>, schema_name: &str) -> SweepResult<Schema> {
    let schemas: Vec<Schema> = run.read_all("schemas", "schemas")?.unwrap_or_default();

    schemas
        .into_iter()
        .find(|schema| schema.name == schema_name)
        .ok_or_else(|| {
            SweepError::Configuration(format!(
                "Cannot find schema from name - The schema {} for environment {} cannot be found",
                schema_name,
                run.env.environment_id()
            ))
        })
}

