//! Category Sweep Modules
//!
//! One thin driver per object category. Every driver follows the same
//! shape: skip when nothing is configured, check the capability gate, list
//! the objects, then hand each one to the [`SweepEvaluator`].

mod davinci;
mod mfa;
mod platform;
mod protect;
mod sso;
mod verify;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::domain::entities::ConfigItem;
use crate::domain::ports::{CategorySkip, SweepEvent, SweepEventSink};
use crate::domain::value_objects::{MatchCriteria, ProductType};
use crate::error::{SweepError, SweepResult};

use super::capability::has_capability;
use super::environment::TargetEnvironment;
use super::remote;
use super::retry::retry_on_permission_propagation;
use super::sweep::{ActionCall, SweepEvaluator};

/// Object categories in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AuthenticationPolicies,
    BrandingThemes,
    DaVinciForms,
    DirectoryAttributes,
    Keys,
    MfaDevicePolicies,
    MfaFido2Policies,
    NotificationPolicies,
    PasswordPolicies,
    RiskPolicies,
    VerifyPolicies,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::AuthenticationPolicies,
        Category::BrandingThemes,
        Category::DaVinciForms,
        Category::DirectoryAttributes,
        Category::Keys,
        Category::MfaDevicePolicies,
        Category::MfaFido2Policies,
        Category::NotificationPolicies,
        Category::PasswordPolicies,
        Category::RiskPolicies,
        Category::VerifyPolicies,
    ];

    /// Label used in log lines, call labels and console output.
    pub fn label(&self) -> &'static str {
        match self {
            Category::AuthenticationPolicies => "Authentication Policies",
            Category::BrandingThemes => "Branding Themes",
            Category::DaVinciForms => "DaVinci Forms",
            Category::DirectoryAttributes => "Directory Attributes",
            Category::Keys => "Keys",
            Category::MfaDevicePolicies => "MFA Device Policies",
            Category::MfaFido2Policies => "MFA FIDO2 Policies",
            Category::NotificationPolicies => "Notification Policies",
            Category::PasswordPolicies => "Password Policies",
            Category::RiskPolicies => "Risk Policies",
            Category::VerifyPolicies => "Verify Policies",
        }
    }

    /// Subcommand and config section name.
    pub fn command_name(&self) -> &'static str {
        match self {
            Category::AuthenticationPolicies => "authentication-policies",
            Category::BrandingThemes => "branding-themes",
            Category::DaVinciForms => "davinci-forms",
            Category::DirectoryAttributes => "directory-attributes",
            Category::Keys => "keys",
            Category::MfaDevicePolicies => "mfa-device-policies",
            Category::MfaFido2Policies => "mfa-fido2-policies",
            Category::NotificationPolicies => "notification-policies",
            Category::PasswordPolicies => "password-policies",
            Category::RiskPolicies => "risk-policies",
            Category::VerifyPolicies => "verify-policies",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.command_name() == s)
    }

    /// Product the bill of materials must list before the category runs.
    pub fn gate(&self) -> Option<ProductType> {
        match self {
            Category::AuthenticationPolicies | Category::PasswordPolicies => {
                Some(ProductType::Base)
            }
            Category::DaVinciForms => Some(ProductType::DaVinci),
            Category::MfaDevicePolicies | Category::MfaFido2Policies => Some(ProductType::Mfa),
            Category::RiskPolicies => Some(ProductType::Risk),
            Category::VerifyPolicies => Some(ProductType::Verify),
            Category::BrandingThemes
            | Category::DirectoryAttributes
            | Category::Keys
            | Category::NotificationPolicies => None,
        }
    }

    pub fn default_identifiers(&self) -> &'static [&'static str] {
        match self {
            Category::AuthenticationPolicies => sso::BOOTSTRAP_SIGN_ON_POLICY_NAMES,
            Category::BrandingThemes => platform::BOOTSTRAP_THEME_NAMES,
            Category::DaVinciForms => davinci::BOOTSTRAP_FORM_NAMES,
            Category::DirectoryAttributes => platform::BOOTSTRAP_ATTRIBUTE_NAMES,
            Category::Keys => platform::BOOTSTRAP_KEY_ISSUER_DN_PREFIXES,
            Category::MfaDevicePolicies => mfa::BOOTSTRAP_DEVICE_POLICY_NAMES,
            Category::MfaFido2Policies => mfa::BOOTSTRAP_FIDO2_POLICY_NAMES,
            Category::NotificationPolicies => platform::BOOTSTRAP_NOTIFICATION_POLICY_NAMES,
            Category::PasswordPolicies => sso::BOOTSTRAP_PASSWORD_POLICY_NAMES,
            Category::RiskPolicies => protect::BOOTSTRAP_RISK_POLICY_NAMES,
            Category::VerifyPolicies => verify::BOOTSTRAP_VERIFY_POLICY_NAMES,
        }
    }

    /// Issuer DNs are compared by prefix; everything else by equality.
    pub fn starts_with(&self) -> bool {
        matches!(self, Category::Keys)
    }

    /// Case sensitivity when the caller does not choose one.
    pub fn default_case_sensitive(&self) -> Option<bool> {
        match self {
            Category::DirectoryAttributes => Some(true),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied settings for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySettings {
    /// `None` means the built-in bootstrap list
    pub identifiers: Option<Vec<String>>,
    pub case_sensitive: Option<bool>,
    /// Directory attributes only; defaults to `User`
    pub schema_name: Option<String>,
}

impl CategorySettings {
    /// Blank caller entries are dropped; an empty prefix would match everything.
    pub fn criteria(&self, category: Category) -> MatchCriteria {
        let identifiers: Vec<String> = match &self.identifiers {
            Some(list) => list
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect(),
            None => category
                .default_identifiers()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        let criteria = if category.starts_with() {
            MatchCriteria::prefix(identifiers)
        } else {
            MatchCriteria::exact(identifiers)
        };
        criteria.with_case_sensitive(self.case_sensitive.or(category.default_case_sensitive()))
    }
}

/// How a category finished when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryReport {
    Skipped(CategorySkip),
    Swept { matched: usize },
}

/// Everything a driver needs while sweeping one category.
pub(crate) struct CategoryRun<'a> {
    pub category: Category,
    pub env: &'a TargetEnvironment,
    pub criteria: MatchCriteria,
    pub settings: &'a CategorySettings,
    pub sink: &'a dyn SweepEventSink,
}

impl<'a> CategoryRun<'a> {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Lists the collection at `suffix` below the environment.
    ///
    /// `Ok(None)` when the response carries no embedded collection.
    pub fn read_all<T: DeserializeOwned>(
        &self,
        suffix: &str,
        embedded_key: &str,
    ) -> SweepResult<Option<Vec<T>>> {
        let path = self.env.path(suffix);
        let label = format!("[{}]-READALL", self.label());
        let page: EntityArray = remote::execute(
            self.env.calls(),
            &label,
            retry_on_permission_propagation,
            || self.env.api().get(&path),
        )?;

        let Some(items) = page.embedded.and_then(|mut e| e.remove(embedded_key)) else {
            return Ok(None);
        };
        let items: Vec<T> =
            serde_json::from_value(items).map_err(|source| SweepError::Payload { label, source })?;
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items))
    }

    /// Lists `suffix` and evaluates every object it returns.
    pub fn sweep_collection<T, F>(
        &self,
        suffix: &str,
        embedded_key: &str,
        mut action_for: F,
    ) -> SweepResult<CategoryReport>
    where
        T: DeserializeOwned,
        F: FnMut(&T) -> (ConfigItem, ActionCall<'a>),
    {
        let label = self.label();
        let Some(items) = self.read_all::<T>(suffix, embedded_key)? else {
            tracing::debug!(category = label, "No configuration items found in the target environment");
            return Ok(CategoryReport::Skipped(CategorySkip::NoItems));
        };

        tracing::debug!(category = label, count = items.len(), "Configuration items found, looping..");
        let evaluator = SweepEvaluator::new(self.env, label, self.sink);
        let mut matched = 0;
        for object in &items {
            self.env.cancel().check()?;
            let (item, action) = action_for(object);
            if evaluator.evaluate(&item, &self.criteria, action)?.is_some() {
                matched += 1;
            }
        }
        tracing::debug!(category = label, matched, "Done");
        Ok(CategoryReport::Swept { matched })
    }

    /// `DELETE {collection}/{id}`
    pub fn delete_call(&self, suffix: &str, id: &str) -> ActionCall<'a> {
        let env = self.env;
        let path = env.path(&format!("{suffix}/{id}"));
        ActionCall::delete(move || env.api().delete(&path))
    }

    /// `PATCH {collection}/{id}` with `{"enabled": false}`
    pub fn disable_call(&self, suffix: &str, id: &str) -> ActionCall<'a> {
        let env = self.env;
        let path = env.path(&format!("{suffix}/{id}"));
        let body = json!({ "enabled": false });
        ActionCall::disable(move || env.api().patch(&path, &body))
    }
}

#[derive(Debug, Deserialize)]
struct EntityArray {
    #[serde(rename = "_embedded", default)]
    embedded: Option<Map<String, Value>>,
}

/// Sweeps one category end to end.
///
/// Emits `CategoryStarted` and then either `CategorySkipped` or
/// `CategoryCompleted`. The first error stops the category and is returned.
pub fn sweep_category(
    category: Category,
    settings: &CategorySettings,
    env: &TargetEnvironment,
    sink: &dyn SweepEventSink,
) -> SweepResult<CategoryReport> {
    let label = category.label();
    sink.on_event(SweepEvent::CategoryStarted {
        label: label.to_string(),
    });
    tracing::debug!(
        category = label,
        environment_id = env.environment_id(),
        "Cleaning bootstrap config"
    );

    let report = run_category(category, settings, env, sink)?;
    match &report {
        CategoryReport::Skipped(reason) => sink.on_event(SweepEvent::CategorySkipped {
            label: label.to_string(),
            reason: reason.clone(),
        }),
        CategoryReport::Swept { matched } => sink.on_event(SweepEvent::CategoryCompleted {
            label: label.to_string(),
            matched: *matched,
        }),
    }
    Ok(report)
}

fn run_category(
    category: Category,
    settings: &CategorySettings,
    env: &TargetEnvironment,
    sink: &dyn SweepEventSink,
) -> SweepResult<CategoryReport> {
    let label = category.label();
    let criteria = settings.criteria(category);
    if criteria.is_empty() {
        tracing::info!(category = label, "No bootstrap names configured - skipping");
        return Ok(CategoryReport::Skipped(CategorySkip::NothingConfigured));
    }

    if let Some(product) = category.gate() {
        if !has_capability(env, label, &product)? {
            tracing::info!(
                category = label,
                %product,
                "Bill of materials does not contain applicable service - skipping"
            );
            return Ok(CategoryReport::Skipped(CategorySkip::ProductMissing(product)));
        }
    }

    let run = CategoryRun {
        category,
        env,
        criteria,
        settings,
        sink,
    };

    match category {
        Category::AuthenticationPolicies => sso::sweep_sign_on_policies(&run),
        Category::PasswordPolicies => sso::sweep_password_policies(&run),
        Category::BrandingThemes => platform::sweep_themes(&run),
        Category::DirectoryAttributes => platform::sweep_directory_attributes(&run),
        Category::Keys => platform::sweep_keys(&run),
        Category::NotificationPolicies => platform::sweep_notification_policies(&run),
        Category::DaVinciForms => davinci::sweep_forms(&run),
        Category::MfaDevicePolicies => mfa::sweep_device_policies(&run),
        Category::MfaFido2Policies => mfa::sweep_fido2_policies(&run),
        Category::RiskPolicies => protect::sweep_risk_policies(&run),
        Category::VerifyPolicies => verify::sweep_verify_policies(&run),
    }
}

#[cfg(test)]
mod tests;
