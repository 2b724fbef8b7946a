//! Scenario: Failures During a Sweep
//!
//! Journey: The platform rejects a call part way through a run.
//!
//! Success Criteria:
//! - The failing object is reported, then the run stops
//! - Later categories are not touched
//! - Permission propagation errors are retried until they clear

use std::sync::Arc;

use pingone_sweep::application::SweepPlan;
use pingone_sweep::domain::value_objects::OutcomeResult;
use pingone_sweep::infrastructure::http::ServiceError;
use pingone_sweep::infrastructure::memory::{Method, ScriptedFailure};
use pingone_sweep::{OutcomeLedger, SweepError, SweepRunner};

use crate::common::*;

const NOT_AUTHORIZED: &str = "The actor attempting to perform the request is not authorized.";

/// SCENARIO: A rejected delete aborts the run
#[test]
fn scenario_failed_delete_stops_the_run() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    api.fail(
        Method::Delete,
        path("keys/k-2"),
        ScriptedFailure::Provider(ServiceError::new(
            400,
            "e-400",
            "INVALID_REQUEST",
            "Key is in use by an application",
        )),
        1,
    );
    let env = environment(api.clone(), false);
    let sink = CollectingSink::default();

    let err = SweepRunner::new(&env, &sink).run(&SweepPlan::all()).unwrap_err();

    assert!(matches!(err, SweepError::Provider { ref label, .. } if label == "[Keys]-DELETE"));
    let last = sink.outcomes().pop().unwrap();
    assert_eq!(last.item.identifier, "C=US,O=Ping Identity,OU=Ping Identity,CN=signing");
    assert_eq!(last.result, OutcomeResult::Failure);
    assert!(last.message.unwrap().contains("Key is in use"));

    assert_eq!(
        ids(&api.collection(&path("passwordPolicies"))),
        vec!["pp-1", "pp-2", "pp-3"],
        "categories after the failure are never reached"
    );
}

/// SCENARIO: Freshly granted worker roles have not propagated yet
#[test]
fn scenario_permission_propagation_is_retried() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    api.fail(
        Method::Get,
        path("riskPolicySets"),
        ScriptedFailure::Provider(ServiceError::new(403, "e-403", "ACCESS_FAILED", NOT_AUTHORIZED)),
        2,
    );
    let env = environment(api.clone(), false);
    let ledger = OutcomeLedger::new();

    SweepRunner::new(&env, &ledger).run(&SweepPlan::all()).unwrap();

    let reads = api
        .calls()
        .iter()
        .filter(|c| c.method == Method::Get && c.path == path("riskPolicySets"))
        .count();
    assert_eq!(reads, 3);
    assert!(api.collection(&path("riskPolicySets")).is_empty());
    assert!(!ledger.totals().has_failures());
}

/// SCENARIO: Other provider errors are not retried
#[test]
fn scenario_other_read_errors_fail_immediately() {
    let api = Arc::new(bootstrapped_api(ALL_PRODUCTS));
    api.fail(
        Method::Get,
        path("themes"),
        ScriptedFailure::Provider(ServiceError::new(500, "e-500", "UNEXPECTED_ERROR", "boom")),
        1,
    );
    let env = environment(api.clone(), false);

    let err = SweepRunner::new(&env, &CollectingSink::default())
        .run(&SweepPlan::all())
        .unwrap_err();

    assert_eq!(err.code(), "provider_error");
    let theme_reads = api
        .calls()
        .iter()
        .filter(|c| c.path == path("themes"))
        .count();
    assert_eq!(theme_reads, 1);
}
