//! Risk policy sets.

use serde::Deserialize;

use crate::domain::entities::ConfigItem;
use crate::error::SweepResult;

use super::{CategoryReport, CategoryRun};

pub(super) const BOOTSTRAP_RISK_POLICY_NAMES: &[&str] = &["Default Risk Policy"];

#[derive(Debug, Deserialize)]
struct RiskPolicySet {
    id: String,
    name: String,
    #[serde(default)]
    default: Option<bool>,
}

pub(super) fn sweep_risk_policies(run: &CategoryRun<'_>) -> SweepResult<CategoryReport> {
    run.sweep_collection("riskPolicySets", "riskPolicySets", |policy: &RiskPolicySet| {
        (
            ConfigItem::new(&policy.name, &policy.id).with_default(policy.default),
            run.delete_call("riskPolicySets", &policy.id),
        )
    })
}
