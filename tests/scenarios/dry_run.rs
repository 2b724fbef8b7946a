//! Scenario: Rehearsing a Sweep
//!
//! Journey: An operator runs with `--dry-run` first to see what would go.
//!
//! Success Criteria:
//! - Matching objects are reported as simulated
//! - Protected and already-disabled objects report the same as a real run
//! - Nothing is mutated

use std::sync::Arc;

use pingone_sweep::application::{CategorySettings, SweepPlan};
use pingone_sweep::domain::value_objects::{OutcomeResult, SweepAction};
use pingone_sweep::{Category, OutcomeLedger, SweepRunner};

use crate::common::*;

/// SCENARIO: The default risk policy would be deleted
#[test]
fn scenario_dry_run_simulates_risk_policy_delete() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), true);
    let sink = CollectingSink::default();

    SweepRunner::new(&env, &sink)
        .run(&SweepPlan::only(Category::RiskPolicies, CategorySettings::default()))
        .unwrap();

    let outcomes = sink.outcomes();
    assert_eq!(outcomes.len(), 1);
    let outcome = &outcomes[0];
    assert_eq!(outcome.category, "Risk Policies");
    assert!(outcome.dry_run);
    assert_eq!(outcome.item.identifier, "Default Risk Policy");
    assert_eq!(outcome.item.id, "rp-1");
    assert_eq!(outcome.action, SweepAction::Delete);
    assert_eq!(outcome.result, OutcomeResult::Simulated);

    assert_eq!(api.mutation_count(), 0);
    assert_eq!(ids(&api.collection(&path("riskPolicySets"))), vec!["rp-1"]);
}

/// SCENARIO: A full rehearsal touches nothing
#[test]
fn scenario_full_dry_run_is_read_only() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    let env = environment(api.clone(), true);
    let ledger = OutcomeLedger::new();

    SweepRunner::new(&env, &ledger).run(&SweepPlan::all()).unwrap();

    let totals = ledger.totals();
    assert_eq!(api.mutation_count(), 0);
    assert_eq!(totals.succeeded, 0);
    assert_eq!(totals.simulated, 9);
    assert_eq!(totals.blocked, 7);
    assert_eq!(totals.no_action_allowed, 1, "photo is already disabled");
    assert_eq!(totals.matched, 17);
}
