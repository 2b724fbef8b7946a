//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - reqwest adapter for the platform API, error envelopes, regions
//! - `memory` - in-memory `ManagementApi` with call recording
//! - `events/` - Event sink implementations

pub mod events;
pub mod http;
pub mod memory;

// Re-export for convenience
pub use events::JsonEventSink;
pub use http::{HttpClientConfig, HttpManagementApi, Region};
pub use memory::InMemoryManagementApi;
