use super::*;
use crate::application::sweep::OutcomeLedger;
use crate::domain::ports::{ManagementApi, NoopEventSink};
use crate::domain::value_objects::{OutcomeResult, SweepAction};
use crate::infrastructure::memory::{InMemoryManagementApi, Method, RecordedCall, ScriptedFailure};
use serde_json::json;
use std::sync::Arc;

const ENV: &str = "env-1";

fn env_with(api: InMemoryManagementApi, dry_run: bool) -> (Arc<InMemoryManagementApi>, TargetEnvironment) {
    let api = Arc::new(api);
    let env = TargetEnvironment::new(ENV, dry_run, api.clone());
    (api, env)
}

fn path(suffix: &str) -> String {
    format!("environments/{ENV}/{suffix}")
}

fn gets(calls: &[RecordedCall]) -> Vec<&str> {
    calls
        .iter()
        .filter(|c| c.method == Method::Get)
        .map(|c| c.path.as_str())
        .collect()
}

// --- settings ---

#[test]
fn default_criteria_follow_category_rules() {
    let keys = CategorySettings::default().criteria(Category::Keys);
    assert!(keys.starts_with);
    assert_eq!(keys.case_sensitive, None);
    assert_eq!(keys.identifiers, vec!["C=US,O=Ping Identity,OU=Ping Identity"]);

    let attributes = CategorySettings::default().criteria(Category::DirectoryAttributes);
    assert!(!attributes.starts_with);
    assert!(attributes.is_case_sensitive());
    assert_eq!(attributes.identifiers.len(), 14);
}

#[test]
fn caller_list_replaces_defaults() {
    let settings = CategorySettings {
        identifiers: Some(vec!["Custom".to_string()]),
        case_sensitive: Some(true),
        schema_name: None,
    };
    let criteria = settings.criteria(Category::PasswordPolicies);
    assert_eq!(criteria.identifiers, vec!["Custom"]);
    assert!(criteria.is_case_sensitive());
}

#[test]
fn blank_caller_entries_are_dropped() {
    let settings = CategorySettings {
        identifiers: Some(vec![
            String::new(),
            "C=US,O=Example".to_string(),
            "   ".to_string(),
        ]),
        ..CategorySettings::default()
    };
    let criteria = settings.criteria(Category::Keys);
    assert_eq!(criteria.identifiers, vec!["C=US,O=Example"]);
    assert_eq!(criteria.first_match("C=US,O=Other,OU=Other"), None);
}

#[test]
fn run_order_is_alphabetical_by_command() {
    let names: Vec<_> = Category::ALL.iter().map(|c| c.command_name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(Category::parse("mfa-fido2-policies"), Some(Category::MfaFido2Policies));
    assert_eq!(Category::parse("unknown"), None);
}

// --- skips ---

#[test]
fn empty_list_skips_without_calls() {
    let (api, env) = env_with(InMemoryManagementApi::new(), false);
    let settings = CategorySettings {
        identifiers: Some(Vec::new()),
        ..CategorySettings::default()
    };

    let report =
        sweep_category(Category::RiskPolicies, &settings, &env, &NoopEventSink).unwrap();

    assert_eq!(report, CategoryReport::Skipped(CategorySkip::NothingConfigured));
    assert!(api.calls().is_empty());
}

#[test]
fn blank_issuer_prefix_deletes_no_keys() {
    let (api, env) = env_with(
        InMemoryManagementApi::new().with_collection(
            path("keys"),
            vec![json!({"id": "k-1", "issuerDN": "C=US,O=Acme", "default": false})],
        ),
        false,
    );
    let settings = CategorySettings {
        identifiers: Some(vec![String::new()]),
        ..CategorySettings::default()
    };

    let report = sweep_category(Category::Keys, &settings, &env, &NoopEventSink).unwrap();

    assert_eq!(report, CategoryReport::Skipped(CategorySkip::NothingConfigured));
    assert_eq!(api.mutation_count(), 0);
    assert_eq!(api.collection(&path("keys")).len(), 1);
}

#[test]
fn missing_product_skips_after_reading_bill_of_materials() {
    let (api, env) = env_with(
        InMemoryManagementApi::new()
            .with_products(ENV, &["PING_ONE_BASE"])
            .with_collection(path("riskPolicySets"), vec![json!({"id": "r-1", "name": "Default Risk Policy"})]),
        false,
    );

    let report = sweep_category(
        Category::RiskPolicies,
        &CategorySettings::default(),
        &env,
        &NoopEventSink,
    )
    .unwrap();

    assert_eq!(
        report,
        CategoryReport::Skipped(CategorySkip::ProductMissing(ProductType::Risk))
    );
    assert_eq!(gets(&api.calls()), vec![path("billOfMaterials").as_str()]);
    assert_eq!(api.mutation_count(), 0);
}

#[test]
fn missing_embedded_collection_is_not_an_error() {
    let (_, env) = env_with(
        InMemoryManagementApi::new().with_document(path("themes"), json!({"count": 0})),
        false,
    );

    let report = sweep_category(
        Category::BrandingThemes,
        &CategorySettings::default(),
        &env,
        &NoopEventSink,
    )
    .unwrap();
    assert_eq!(report, CategoryReport::Skipped(CategorySkip::NoItems));
}

#[test]
fn absent_list_payload_is_no_data() {
    let api = InMemoryManagementApi::new();
    api.fail(Method::Get, path("keys"), ScriptedFailure::EmptyBody, 1);
    let (_, env) = env_with(api, false);

    let err = sweep_category(Category::Keys, &CategorySettings::default(), &env, &NoopEventSink)
        .unwrap_err();
    assert!(matches!(err, SweepError::NoData { ref label } if label == "[Keys]-READALL"));
}

// --- sweeping ---

#[test]
fn sign_on_policies_are_deleted_and_others_kept() {
    let (api, env) = env_with(
        InMemoryManagementApi::new()
            .with_products(ENV, &["PING_ONE_BASE"])
            .with_collection(
                path("signOnPolicies"),
                vec![
                    json!({"id": "p-1", "name": "Single_Factor", "default": false}),
                    json!({"id": "p-2", "name": "Multi_Factor", "default": false}),
                    json!({"id": "p-3", "name": "Corporate"}),
                ],
            ),
        false,
    );
    let ledger = OutcomeLedger::new();

    let report = sweep_category(
        Category::AuthenticationPolicies,
        &CategorySettings::default(),
        &env,
        &ledger,
    )
    .unwrap();

    assert_eq!(report, CategoryReport::Swept { matched: 2 });
    let remaining = api.collection(&path("signOnPolicies"));
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["name"], "Corporate");
    assert_eq!(ledger.totals().succeeded, 2);
}

#[test]
fn default_key_is_protected_and_prefix_match_deletes_the_rest() {
    let (api, env) = env_with(
        InMemoryManagementApi::new().with_collection(
            path("keys"),
            vec![
                json!({"id": "k-1", "name": "signing", "issuerDN": "C=US,O=Ping Identity,OU=Ping Identity,CN=abc", "default": true, "usageType": "SIGNING"}),
                json!({"id": "k-2", "name": "encryption", "issuerDN": "c=us,o=ping identity,ou=ping identity", "usageType": "ENCRYPTION"}),
                json!({"id": "k-3", "name": "custom", "issuerDN": "CN=corp.example"}),
            ],
        ),
        false,
    );
    let ledger = OutcomeLedger::new();

    sweep_category(Category::Keys, &CategorySettings::default(), &env, &ledger).unwrap();

    let outcomes = ledger.snapshot();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].result, OutcomeResult::NoActionBlocked);
    assert_eq!(outcomes[1].result, OutcomeResult::Success);
    let ids: Vec<_> = api
        .collection(&path("keys"))
        .iter()
        .map(|k| k["id"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["k-1", "k-3"]);
}

#[test]
fn case_sensitive_keys_skip_lowercase_issuer() {
    let (api, env) = env_with(
        InMemoryManagementApi::new().with_collection(
            path("keys"),
            vec![json!({"id": "k-2", "issuerDN": "c=us,o=ping identity,ou=ping identity"})],
        ),
        false,
    );
    let settings = CategorySettings {
        case_sensitive: Some(true),
        ..CategorySettings::default()
    };

    let report = sweep_category(Category::Keys, &settings, &env, &NoopEventSink).unwrap();
    assert_eq!(report, CategoryReport::Swept { matched: 0 });
    assert_eq!(api.mutation_count(), 0);
}

fn attribute_api() -> InMemoryManagementApi {
    InMemoryManagementApi::new()
        .with_collection(
            path("schemas"),
            vec![json!({"id": "s-1", "name": "User"})],
        )
        .with_collection(
            path("schemas/s-1/attributes"),
            vec![
                json!({"id": "a-1", "name": "email", "enabled": true}),
                json!({"id": "a-2", "name": "nickname", "enabled": false}),
                json!({"id": "a-3", "name": "Title", "enabled": true}),
                json!({"id": "a-4", "name": "employeeNumber", "enabled": true}),
            ],
        )
}

#[test]
fn directory_attributes_are_disabled_not_deleted() {
    let (api, env) = env_with(attribute_api(), false);
    let ledger = OutcomeLedger::new();

    let report = sweep_category(
        Category::DirectoryAttributes,
        &CategorySettings::default(),
        &env,
        &ledger,
    )
    .unwrap();

    // "Title" differs in case from "title" and is left alone.
    assert_eq!(report, CategoryReport::Swept { matched: 2 });
    let outcomes = ledger.snapshot();
    assert_eq!(outcomes[0].action, SweepAction::Disable);
    assert_eq!(outcomes[0].result, OutcomeResult::Success);
    assert_eq!(outcomes[1].result, OutcomeResult::NoActionAllowed);

    let patches: Vec<_> = api
        .calls()
        .into_iter()
        .filter(|c| c.method == Method::Patch)
        .collect();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].path, path("schemas/s-1/attributes/a-1"));
    assert_eq!(patches[0].body, Some(json!({"enabled": false})));
    assert_eq!(api.collection(&path("schemas/s-1/attributes")).len(), 4);
}

#[test]
fn unknown_schema_is_an_error() {
    let (_, env) = env_with(attribute_api(), false);
    let settings = CategorySettings {
        schema_name: Some("Device".to_string()),
        ..CategorySettings::default()
    };

    let err = sweep_category(Category::DirectoryAttributes, &settings, &env, &NoopEventSink)
        .unwrap_err();
    assert!(err.to_string().contains("The schema Device for environment env-1 cannot be found"));
}

#[test]
fn dry_run_reads_but_never_mutates() {
    let (api, env) = env_with(
        InMemoryManagementApi::new()
            .with_products(ENV, &["PING_ONE_MFA"])
            .with_collection(
                path("fido2Policies"),
                vec![
                    json!({"id": "f-1", "name": "Passkeys"}),
                    json!({"id": "f-2", "name": "Security Keys"}),
                ],
            ),
        true,
    );
    let ledger = OutcomeLedger::new();

    sweep_category(
        Category::MfaFido2Policies,
        &CategorySettings::default(),
        &env,
        &ledger,
    )
    .unwrap();

    assert_eq!(api.mutation_count(), 0);
    assert_eq!(ledger.totals().simulated, 2);
}

#[test]
fn cancellation_between_objects_stops_the_category() {
    let (api, env) = env_with(
        InMemoryManagementApi::new().with_collection(
            path("themes"),
            vec![json!({"id": "t-1", "configuration": {"name": "Ping Default"}})],
        ),
        false,
    );
    env.cancel().cancel();

    let err = sweep_category(
        Category::BrandingThemes,
        &CategorySettings::default(),
        &env,
        &NoopEventSink,
    )
    .unwrap_err();

    assert!(matches!(err, SweepError::Cancelled));
    assert_eq!(api.mutation_count(), 0);
    assert!(api.get(&path("themes")).is_ok());
}
