//! MFA device authentication and FIDO2 policies.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::SweepResult;

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_DEVICE_POLICY_NAMES: &[&str] = &["Default MFA Policy"];

pub(super) const BOOTSTRAP_FIDO2_POLICY_NAMES: &[&str] = &["Passkeys", "Security Keys"];

#[derive(Debug, Deserialize)]
struct DeviceAuthenticationPolicy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Fido2Policy {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

pub(super) fn sweep_device_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection(
        "deviceAuthenticationPolicies",
        "deviceAuthenticationPolicies",
        |policy: &DeviceAuthenticationPolicy| {
            (
                ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
                run.delete_call("deviceAuthenticationPolicies", &policy.id),
            )
        },
    )
}

pub(super) fn sweep_fido2_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("fido2Policies", "fido2Policies", |policy: &Fido2Policy| {
        (
            ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
            run.delete_call("fido2Policies", &policy.id),
        )
    })
}
