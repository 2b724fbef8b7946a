//! Sweep Event Port
//!
//! Provides an observable interface for sweep runs.
//! Console rendering, NDJSON streams, and the outcome ledger all hang off it.

use crate::domain::value_objects::{ProductType, SweepOutcome};

/// Why a category produced no outcomes without failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySkip {
    /// The configured identifier list is empty
    NothingConfigured,
    /// The bill of materials does not list the product the category needs
    ProductMissing(ProductType),
    /// The environment holds no objects of this kind
    NoItems,
}

impl std::fmt::Display for CategorySkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategorySkip::NothingConfigured => write!(f, "no bootstrap names configured"),
            CategorySkip::ProductMissing(product) => write!(
                f,
                "bill of materials does not contain applicable service {}",
                product
            ),
            CategorySkip::NoItems => {
                write!(f, "no configuration items found in the target environment")
            }
        }
    }
}

/// Event emitted during a sweep run
#[derive(Debug, Clone)]
pub enum SweepEvent {
    /// Run started
    Started {
        environment_id: String,
        dry_run: bool,
        category_count: usize,
    },

    /// A category began evaluating
    CategoryStarted { label: String },

    /// A category finished early without touching anything
    CategorySkipped { label: String, reason: CategorySkip },

    /// One matched object was evaluated
    Outcome(SweepOutcome),

    /// A category finished
    CategoryCompleted { label: String, matched: usize },

    /// Run completed (successfully or not)
    Completed { success: bool },
}

/// Trait for receiving sweep events
///
/// Implementations must not fail; rendering problems are swallowed.
pub trait SweepEventSink: Send + Sync {
    fn on_event(&self, event: SweepEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SweepEventSink for NoopEventSink {
    fn on_event(&self, _event: SweepEvent) {}
}

/// Fans one event out to several sinks, in order.
pub struct FanoutEventSink {
    sinks: Vec<std::sync::Arc<dyn SweepEventSink>>,
}

impl FanoutEventSink {
    pub fn new(sinks: Vec<std::sync::Arc<dyn SweepEventSink>>) -> Self {
        Self { sinks }
    }
}

impl SweepEventSink for FanoutEventSink {
    fn on_event(&self, event: SweepEvent) {
        for sink in &self.sinks {
            sink.on_event(event.clone());
        }
    }
}
