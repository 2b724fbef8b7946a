//! Provider Error Port
//!
//! Each remote sub-client (platform API, OAuth token endpoint, ...) returns
//! its own error envelope. They all expose the same accessors so the error
//! normalizer never needs to know which concrete envelope it is looking at.

use std::fmt::Debug;

pub trait ProviderError: Debug + Send + Sync {
    /// HTTP status the envelope arrived with, if known
    fn status_code(&self) -> Option<u16>;

    /// Stable error ID; `None` when the envelope carries no ID
    fn error_id(&self) -> Option<&str>;

    /// Machine code (e.g. `INVALID_DATA`)
    fn code(&self) -> &str;

    fn message(&self) -> &str;

    /// Sub-detail messages, in provider order
    fn details(&self) -> Vec<String>;
}
