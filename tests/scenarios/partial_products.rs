//! Scenario: Environment Without Every Product
//!
//! Journey: The environment only has the base product, so MFA, Protect,
//! Verify and DaVinci endpoints do not exist.
//!
//! Success Criteria:
//! - Gated categories are skipped after reading the bill of materials
//! - Their collections are never listed
//! - Ungated categories still run

use std::sync::Arc;

use pingone_sweep::application::SweepPlan;
use pingone_sweep::infrastructure::memory::Method;
use pingone_sweep::SweepRunner;

use crate::common::*;

/// SCENARIO: Only the base product is provisioned
#[test]
fn scenario_gated_categories_are_skipped() {
    let api = Arc::new(bootstrapped_api(&["PING_ONE_BASE"]));
    let env = environment(api.clone(), false);
    let sink = CollectingSink::default();

    let summary = SweepRunner::new(&env, &sink).run(&SweepPlan::all()).unwrap();

    assert_eq!(
        sink.skipped(),
        vec![
            "DaVinci Forms",
            "MFA Device Policies",
            "MFA FIDO2 Policies",
            "Risk Policies",
            "Verify Policies",
        ]
    );
    assert_eq!(summary.skipped(), 5);

    let listed: Vec<String> = api
        .calls()
        .into_iter()
        .filter(|c| c.method == Method::Get)
        .map(|c| c.path)
        .collect();
    for suffix in ["forms", "deviceAuthenticationPolicies", "fido2Policies", "riskPolicySets", "verifyPolicies"] {
        assert!(
            !listed.contains(&path(suffix)),
            "{suffix} should not be listed without its product"
        );
    }

    assert_eq!(ids(&api.collection(&path("riskPolicySets"))), vec!["rp-1"]);
    assert_eq!(ids(&api.collection(&path("passwordPolicies"))), vec!["pp-1"]);
}

/// SCENARIO: Every gated category re-reads the bill of materials
#[test]
fn scenario_each_gated_category_checks_its_product() {
    let api = Arc::new(bootstrapped_api(&["PING_ONE_BASE"]));
    let env = environment(api.clone(), false);

    SweepRunner::new(&env, &CollectingSink::default())
        .run(&SweepPlan::all())
        .unwrap();

    let bom_reads = api
        .calls()
        .iter()
        .filter(|c| c.path == path("billOfMaterials"))
        .count();
    assert_eq!(bom_reads, 7);
}
