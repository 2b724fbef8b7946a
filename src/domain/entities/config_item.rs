//! Config Item Entity
//!
//! A normalized view of one fetched remote object.

use serde::Serialize;

/// One remote configuration object as seen by the sweep engine.
///
/// Built fresh for every object a category lists; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigItem {
    /// Display identifier compared against the target list (name, issuer DN, ...)
    pub identifier: String,
    /// Opaque ID used to address the object in mutating calls
    pub id: String,
    /// `Some(true)` when the object is the environment default for its category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// `Some(false)` when the object is already disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ConfigItem {
    pub fn new(identifier: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            id: id.into(),
            default: None,
            enabled: None,
        }
    }

    pub fn with_default(mut self, default: Option<bool>) -> Self {
        self.default = default;
        self
    }

    pub fn with_enabled(mut self, enabled: Option<bool>) -> Self {
        self.enabled = enabled;
        self
    }

    /// Environment defaults are never mutated.
    pub fn is_default(&self) -> bool {
        self.default == Some(true)
    }

    /// Only an explicit `false` counts; an absent flag means "unknown".
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }
}
