use serde::Serialize;

/// Canonical description of a failed remote call.
///
/// Derived from whatever error shape a provider returned. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NormalizedError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Stable provider error ID; absent for degraded/textual errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub message: String,
    pub details: Vec<String>,
}

impl NormalizedError {
    /// Best-effort error built from an unstructured body.
    pub fn textual(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            id: None,
            code: String::new(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
