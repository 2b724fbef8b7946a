//! Outcome Ledger
//!
//! Accumulates every outcome reported during a run and exposes a structured
//! snapshot and a JSON view of them.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ports::{SweepEvent, SweepEventSink};
use crate::domain::value_objects::{OutcomeResult, SweepOutcome};

#[derive(Debug, Clone, Serialize)]
struct LedgerEntry {
    recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    outcome: SweepOutcome,
}

/// Counts by result code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerTotals {
    pub matched: usize,
    pub succeeded: usize,
    pub simulated: usize,
    pub no_action_allowed: usize,
    pub blocked: usize,
    pub failed: usize,
}

impl LedgerTotals {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Event sink that records outcomes in report order.
#[derive(Debug)]
pub struct OutcomeLedger {
    started_at: DateTime<Utc>,
    entries: Mutex<Vec<LedgerEntry>>,
}

impl Default for OutcomeLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeLedger {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, outcome: SweepOutcome) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LedgerEntry {
                recorded_at: Utc::now(),
                outcome,
            });
    }

    pub fn snapshot(&self) -> Vec<SweepOutcome> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| entry.outcome.clone())
            .collect()
    }

    pub fn totals(&self) -> LedgerTotals {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut totals = LedgerTotals {
            matched: entries.len(),
            ..LedgerTotals::default()
        };
        for entry in entries.iter() {
            match entry.outcome.result {
                OutcomeResult::Success => totals.succeeded += 1,
                OutcomeResult::Simulated => totals.simulated += 1,
                OutcomeResult::NoActionAllowed => totals.no_action_allowed += 1,
                OutcomeResult::NoActionBlocked => totals.blocked += 1,
                OutcomeResult::Failure => totals.failed += 1,
            }
        }
        totals
    }

    pub fn to_json(&self) -> serde_json::Value {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone();
        serde_json::json!({
            "started_at": self.started_at,
            "totals": self.totals(),
            "outcomes": entries,
        })
    }
}

impl SweepEventSink for OutcomeLedger {
    fn on_event(&self, event: SweepEvent) {
        if let SweepEvent::Outcome(outcome) = event {
            self.record(outcome);
        }
    }
}
