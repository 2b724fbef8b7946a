//! JSON Event Sink
//!
//! Outputs sweep events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SweepEvent, SweepEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SweepEventSink for JsonEventSink {
    fn on_event(&self, event: SweepEvent) {
        let json = match event {
            SweepEvent::Started {
                environment_id,
                dry_run,
                category_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "sweep",
                    "environment_id": environment_id,
                    "dry_run": dry_run,
                    "category_count": category_count,
                })
            }

            SweepEvent::CategoryStarted { label } => {
                serde_json::json!({
                    "event": "category_start",
                    "command": "sweep",
                    "category": label,
                })
            }

            SweepEvent::CategorySkipped { label, reason } => {
                serde_json::json!({
                    "event": "category_skipped",
                    "command": "sweep",
                    "category": label,
                    "reason": reason.to_string(),
                })
            }

            SweepEvent::Outcome(outcome) => {
                serde_json::json!({
                    "event": "outcome",
                    "command": "sweep",
                    "category": outcome.category,
                    "dry_run": outcome.dry_run,
                    "identifier": outcome.item.identifier,
                    "id": outcome.item.id,
                    "matched": outcome.matched,
                    "action": outcome.action,
                    "result": outcome.result,
                    "message": outcome.message,
                })
            }

            SweepEvent::CategoryCompleted { label, matched } => {
                serde_json::json!({
                    "event": "category_complete",
                    "command": "sweep",
                    "category": label,
                    "matched": matched,
                })
            }

            // The command layer emits the final `complete` event with totals.
            SweepEvent::Completed { .. } => return,
        };

        self.write_event(json);
    }
}
