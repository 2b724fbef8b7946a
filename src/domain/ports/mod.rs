//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod management_api;
pub mod provider_error;
pub mod sweep_events;

pub use management_api::{ApiResponse, CallError, CallResult, ManagementApi};
pub use provider_error::ProviderError;
pub use sweep_events::{CategorySkip, FanoutEventSink, NoopEventSink, SweepEvent, SweepEventSink};
