//! Scenario: Sweeping a Freshly Provisioned Environment
//!
//! Journey: An operator points the tool at a new environment that still
//! carries every demo object the platform created.
//!
//! Success Criteria:
//! - Non-default bootstrap objects are deleted, attributes are disabled
//! - Default objects are left in place and flagged for review
//! - Customer-made objects are never touched
//! - A second run changes nothing

use std::sync::Arc;

use pingone_sweep::application::{CategorySettings, SweepPlan};
use pingone_sweep::domain::ports::NoopEventSink;
use pingone_sweep::infrastructure::memory::Method;
use pingone_sweep::{Category, OutcomeLedger, SweepRunner};

use crate::common::*;

fn line(category: &str, identifier: &str, phrase: &str) -> (String, String, String) {
    (category.to_string(), identifier.to_string(), phrase.to_string())
}

/// SCENARIO: Full sweep over every category
#[test]
fn scenario_full_sweep_cleans_bootstrap_objects() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), false);
    let sink = CollectingSink::default();

    let summary = SweepRunner::new(&env, &sink).run(&SweepPlan::all()).unwrap();

    assert_eq!(
        sink.lines(),
        vec![
            line("Authentication Policies", "Single_Factor", "No action taken (needs review)"),
            line("Authentication Policies", "Multi_Factor", "Success"),
            line("Branding Themes", "Ping Default", "Success"),
            line("DaVinci Forms", "Example - Sign On", "Success"),
            line("Directory Attributes", "accountId", "Success"),
            line("Directory Attributes", "photo", "No action taken"),
            line("Keys", "C=US,O=Ping Identity,OU=Ping Identity", "No action taken (needs review)"),
            line("Keys", "C=US,O=Ping Identity,OU=Ping Identity,CN=signing", "Success"),
            line("MFA Device Policies", "Default MFA Policy", "No action taken (needs review)"),
            line("MFA FIDO2 Policies", "Passkeys", "No action taken (needs review)"),
            line("MFA FIDO2 Policies", "Security Keys", "Success"),
            line("Notification Policies", "Default Notification Policy", "No action taken (needs review)"),
            line("Password Policies", "Standard", "No action taken (needs review)"),
            line("Password Policies", "Basic", "Success"),
            line("Password Policies", "Passphrase", "Success"),
            line("Risk Policies", "Default Risk Policy", "Success"),
            line("Verify Policies", "Default Verify Policy", "No action taken (needs review)"),
        ]
    );
    assert_eq!(summary.matched(), 17);
    assert_eq!(summary.skipped(), 0);

    assert_eq!(ids(&api.collection(&path("signOnPolicies"))), vec!["sop-1", "sop-3"]);
    assert_eq!(ids(&api.collection(&path("keys"))), vec!["k-1", "k-3"]);
    assert_eq!(ids(&api.collection(&path("forms"))), vec!["f-2"]);
    assert!(api.collection(&path("riskPolicySets")).is_empty());

    let attributes = api.collection(&path("schemas/schema-1/attributes"));
    assert_eq!(attributes.len(), 3, "attributes are disabled, never deleted");
    assert_eq!(attributes[0]["enabled"], false);
    assert_eq!(attributes[2]["enabled"], true, "employeeNumber is not a bootstrap attribute");
}

/// SCENARIO: Attributes are disabled with a PATCH, everything else is deleted
#[test]
fn scenario_mutations_use_the_category_action() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), false);

    SweepRunner::new(&env, &NoopEventSink).run(&SweepPlan::all()).unwrap();

    let calls = api.calls();
    let patches: Vec<_> = calls.iter().filter(|c| c.method == Method::Patch).collect();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, path("schemas/schema-1/attributes/a-1"));
    assert_eq!(patches[0].body, Some(serde_json::json!({"enabled": false})));

    let deletes = calls.iter().filter(|c| c.method == Method::Delete).count();
    assert_eq!(deletes, 8);
}

/// SCENARIO: Running twice is safe
#[test]
fn scenario_second_run_changes_nothing() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), false);
    SweepRunner::new(&env, &NoopEventSink).run(&SweepPlan::all()).unwrap();
    let after_first = api.mutation_count();

    let ledger = OutcomeLedger::new();
    SweepRunner::new(&env, &ledger).run(&SweepPlan::all()).unwrap();

    assert_eq!(api.mutation_count(), after_first);
    let totals = ledger.totals();
    assert_eq!(totals.succeeded, 0);
    assert_eq!(totals.failed, 0);
    assert_eq!(totals.no_action_allowed, 2, "both attributes are already disabled");
    assert_eq!(totals.blocked, 7);
}

/// SCENARIO: Operator narrows one category to their own list
#[test]
fn scenario_custom_names_replace_the_bootstrap_list() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), false);
    let sink = CollectingSink::default();
    let plan = SweepPlan::only(
        Category::AuthenticationPolicies,
        CategorySettings {
            identifiers: Some(vec!["partner login".to_string()]),
            ..CategorySettings::default()
        },
    );

    SweepRunner::new(&env, &sink).run(&plan).unwrap();

    assert_eq!(
        sink.lines(),
        vec![line("Authentication Policies", "Partner Login", "Success")]
    );
    assert_eq!(
        ids(&api.collection(&path("signOnPolicies"))),
        vec!["sop-1", "sop-2"]
    );
}
