//! In-memory Management API
//!
//! Serves collections and documents from memory, records every call, and can
//! be scripted to fail. Used to rehearse sweeps without a tenant and by the
//! test suites.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{json, Value};

use crate::domain::ports::{ApiResponse, CallError, CallResult, ManagementApi};

use super::http::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
    Patch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// What a scripted call returns instead of touching the stored data.
#[derive(Debug, Clone)]
pub enum ScriptedFailure {
    Provider(ServiceError),
    Transport(String),
    /// Success status with no payload
    EmptyBody,
}

#[derive(Debug)]
struct Script {
    method: Method,
    path: String,
    failure: ScriptedFailure,
    remaining: usize,
}

#[derive(Debug, Default)]
struct State {
    documents: BTreeMap<String, Value>,
    collections: BTreeMap<String, Vec<Value>>,
    scripts: Vec<Script>,
    calls: Vec<RecordedCall>,
}

#[derive(Debug, Default)]
pub struct InMemoryManagementApi {
    state: Mutex<State>,
}

impl InMemoryManagementApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single JSON document served verbatim at `path`.
    pub fn with_document(self, path: impl Into<String>, document: Value) -> Self {
        self.state().documents.insert(path.into(), document);
        self
    }

    /// A collection listed at `path` under `_embedded.<last path segment>`.
    /// Every item needs an `id` to be addressable.
    pub fn with_collection(self, path: impl Into<String>, items: Vec<Value>) -> Self {
        self.state().collections.insert(path.into(), items);
        self
    }

    /// Bill of materials listing the given product markers.
    pub fn with_products(self, environment_id: &str, products: &[&str]) -> Self {
        let products: Vec<Value> = products.iter().map(|p| json!({ "type": p })).collect();
        self.with_document(
            format!("environments/{environment_id}/billOfMaterials"),
            json!({ "products": products }),
        )
    }

    /// The next `times` calls matching `method` and `path` return `failure`.
    pub fn fail(&self, method: Method, path: impl Into<String>, failure: ScriptedFailure, times: usize) {
        self.state().scripts.push(Script {
            method,
            path: path.into(),
            failure,
            remaining: times,
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// DELETE and PATCH calls issued so far
    pub fn mutation_count(&self) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.method != Method::Get)
            .count()
    }

    pub fn collection(&self, path: &str) -> Vec<Value> {
        self.state()
            .collections
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, method: Method, path: &str, body: Option<&Value>) -> Option<CallResult> {
        let mut state = self.state();
        state.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        let index = state
            .scripts
            .iter()
            .position(|s| s.method == method && s.path == path && s.remaining > 0)?;
        let script = &mut state.scripts[index];
        script.remaining -= 1;
        let failure = script.failure.clone();
        if script.remaining == 0 {
            state.scripts.remove(index);
        }

        Some(match failure {
            ScriptedFailure::Provider(err) => Err(CallError::Provider(Box::new(err))),
            ScriptedFailure::Transport(message) => Err(CallError::transport(message)),
            ScriptedFailure::EmptyBody => Ok(ApiResponse::new(200, None)),
        })
    }
}

fn split_item_path(path: &str) -> Option<(&str, &str)> {
    path.rsplit_once('/')
}

fn not_found(path: &str) -> CallResult {
    Err(CallError::Provider(Box::new(ServiceError::new(
        404,
        "00000000-0000-0000-0000-000000000404",
        "NOT_FOUND",
        &format!("Unable to find resource at {path}"),
    ))))
}

fn has_id(item: &Value, id: &str) -> bool {
    item.get("id").and_then(Value::as_str) == Some(id)
}

impl ManagementApi for InMemoryManagementApi {
    fn get(&self, path: &str) -> CallResult {
        if let Some(scripted) = self.begin(Method::Get, path, None) {
            return scripted;
        }
        let state = self.state();

        if let Some(document) = state.documents.get(path) {
            return Ok(ApiResponse::new(200, Some(document.clone())));
        }

        if let Some(items) = state.collections.get(path) {
            let key = path.rsplit('/').next().unwrap_or(path);
            return Ok(ApiResponse::new(
                200,
                Some(json!({ "_embedded": { key: items }, "count": items.len() })),
            ));
        }

        if let Some((parent, id)) = split_item_path(path) {
            if let Some(item) = state
                .collections
                .get(parent)
                .and_then(|items| items.iter().find(|item| has_id(item, id)))
            {
                return Ok(ApiResponse::new(200, Some(item.clone())));
            }
        }

        not_found(path)
    }

    fn delete(&self, path: &str) -> CallResult {
        if let Some(scripted) = self.begin(Method::Delete, path, None) {
            return scripted;
        }
        let mut state = self.state();

        let Some((parent, id)) = split_item_path(path) else {
            return not_found(path);
        };
        let Some(items) = state.collections.get_mut(parent) else {
            return not_found(path);
        };
        let before = items.len();
        items.retain(|item| !has_id(item, id));
        if items.len() == before {
            return not_found(path);
        }
        Ok(ApiResponse::no_content())
    }

    fn patch(&self, path: &str, body: &Value) -> CallResult {
        if let Some(scripted) = self.begin(Method::Patch, path, Some(body)) {
            return scripted;
        }
        let mut state = self.state();

        let Some((parent, id)) = split_item_path(path) else {
            return not_found(path);
        };
        let Some(item) = state
            .collections
            .get_mut(parent)
            .and_then(|items| items.iter_mut().find(|item| has_id(item, id)))
        else {
            return not_found(path);
        };

        if let (Some(target), Some(changes)) = (item.as_object_mut(), body.as_object()) {
            for (key, value) in changes {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(ApiResponse::new(200, Some(item.clone())))
    }
}
