//! Identity verification policies.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::SweepResult;

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_VERIFY_POLICY_NAMES: &[&str] = &["Default Verify Policy"];

#[derive(Debug, Deserialize)]
struct VerifyPolicy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

pub(super) fn sweep_verify_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("verifyPolicies", "verifyPolicies", |policy: &VerifyPolicy| {
        (
            ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
            run.delete_call("verifyPolicies", &policy.id),
        )
    })
}
