//! Event Sink Implementations
//!
//! Provides concrete implementations of SweepEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives with the CLI views.

mod json;

pub use json::JsonEventSink;
