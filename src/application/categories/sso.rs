//! Sign-on and password policies.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::SweepResult;

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_SIGN_ON_POLICY_NAMES: &[&str] = &["Single_Factor", "Multi_Factor"];

pub(super) const BOOTSTRAP_PASSWORD_POLICY_NAMES: &[&str] = &["Standard", "Basic", "Passphrase"];

#[derive(Debug, Deserialize)]
struct SignOnPolicy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct PasswordPolicy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

pub(super) fn sweep_sign_on_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("signOnPolicies", "signOnPolicies", |policy: &SignOnPolicy| {
        (
            ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
            run.delete_call("signOnPolicies", &policy.id),
        )
    })
}

pub(super) fn sweep_password_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("passwordPolicies", "passwordPolicies", |policy: &PasswordPolicy| {
        (
            ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
            run.delete_call("passwordPolicies", &policy.id),
        )
    })
}
