//! Seeded in-memory tenants.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};

use pingone_sweep::application::{CallContext, CancelFlag, RetryOptions};
use pingone_sweep::domain::ports::{SweepEvent, SweepEventSink};
use pingone_sweep::domain::value_objects::SweepOutcome;
use pingone_sweep::infrastructure::memory::InMemoryManagementApi;
use pingone_sweep::TargetEnvironment;

pub const ENV_ID: &str = "9c1e4f1a-0000-4000-8000-000000000001";

pub const ALL_PRODUCTS: &[&str] = &[
    "PING_ONE_BASE",
    "PING_ONE_MFA",
    "PING_ONE_RISK",
    "PING_ONE_VERIFY",
    "PING_ONE_DAVINCI",
];

pub fn path(suffix: &str) -> String {
    format!("environments/{ENV_ID}/{suffix}")
}

/// A freshly provisioned environment: every bootstrap object plus one
/// customer-made object per category that must survive the sweep.
pub fn bootstrapped_api(products: &[&str]) -> InMemoryManagementApi {
    InMemoryManagementApi::new()
        .with_products(ENV_ID, products)
        .with_collection(
            path("signOnPolicies"),
            vec![
                json!({"id": "sop-1", "name": "Single_Factor", "default": true}),
                json!({"id": "sop-2", "name": "Multi_Factor", "default": false}),
                json!({"id": "sop-3", "name": "Partner Login"}),
            ],
        )
        .with_collection(
            path("passwordPolicies"),
            vec![
                json!({"id": "pp-1", "name": "Standard", "default": true}),
                json!({"id": "pp-2", "name": "Basic", "default": false}),
                json!({"id": "pp-3", "name": "Passphrase", "default": false}),
            ],
        )
        .with_collection(
            path("themes"),
            vec![
                json!({"id": "th-1", "default": false, "configuration": {"name": "Ping Default"}}),
                json!({"id": "th-2", "default": true, "configuration": {"name": "Corporate"}}),
            ],
        )
        .with_collection(
            path("keys"),
            vec![
                json!({"id": "k-1", "issuerDN": "C=US,O=Ping Identity,OU=Ping Identity", "default": true}),
                json!({"id": "k-2", "issuerDN": "C=US,O=Ping Identity,OU=Ping Identity,CN=signing", "default": false}),
                json!({"id": "k-3", "issuerDN": "CN=corp-signing"}),
            ],
        )
        .with_collection(
            path("notificationsPolicies"),
            vec![json!({"id": "np-1", "name": "Default Notification Policy", "default": true})],
        )
        .with_collection(
            path("schemas"),
            vec![json!({"id": "schema-1", "name": "User"})],
        )
        .with_collection(
            path("schemas/schema-1/attributes"),
            vec![
                json!({"id": "a-1", "name": "accountId", "enabled": true}),
                json!({"id": "a-2", "name": "photo", "enabled": false}),
                json!({"id": "a-3", "name": "employeeNumber", "enabled": true}),
            ],
        )
        .with_collection(
            path("forms"),
            vec![
                json!({"id": "f-1", "name": "Example - Sign On"}),
                json!({"id": "f-2", "name": "Partner Onboarding"}),
            ],
        )
        .with_collection(
            path("deviceAuthenticationPolicies"),
            vec![json!({"id": "dap-1", "name": "Default MFA Policy", "default": true})],
        )
        .with_collection(
            path("fido2Policies"),
            vec![
                json!({"id": "fp-1", "name": "Passkeys", "default": true}),
                json!({"id": "fp-2", "name": "Security Keys", "default": false}),
            ],
        )
        .with_collection(
            path("riskPolicySets"),
            vec![json!({"id": "rp-1", "name": "Default Risk Policy", "default": false})],
        )
        .with_collection(
            path("verifyPolicies"),
            vec![json!({"id": "vp-1", "name": "Default Verify Policy", "default": true})],
        )
}

/// Environment handle with short retry delays.
pub fn environment(api: Arc<InMemoryManagementApi>, dry_run: bool) -> TargetEnvironment {
    let retry = RetryOptions::default()
        .with_timeout(Duration::from_secs(5))
        .with_delays(Duration::from_millis(1), Duration::from_millis(4));
    TargetEnvironment::new(ENV_ID, dry_run, api).with_calls(CallContext::new(retry, CancelFlag::new()))
}

/// Sink that keeps every outcome in arrival order.
#[derive(Default)]
pub struct CollectingSink {
    outcomes: Mutex<Vec<SweepOutcome>>,
    skipped: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn outcomes(&self) -> Vec<SweepOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn skipped(&self) -> Vec<String> {
        self.skipped.lock().unwrap().clone()
    }

    /// `(category, identifier, phrase)` triples, in order
    pub fn lines(&self) -> Vec<(String, String, String)> {
        self.outcomes()
            .into_iter()
            .map(|o| (o.category, o.item.identifier, o.result.phrase().to_string()))
            .collect()
    }
}

impl SweepEventSink for CollectingSink {
    fn on_event(&self, event: SweepEvent) {
        match event {
            SweepEvent::Outcome(outcome) => self.outcomes.lock().unwrap().push(outcome),
            SweepEvent::CategorySkipped { label, .. } => self.skipped.lock().unwrap().push(label),
            _ => {}
        }
    }
}

pub fn ids(items: &[Value]) -> Vec<&str> {
    items.iter().filter_map(|item| item["id"].as_str()).collect()
}
