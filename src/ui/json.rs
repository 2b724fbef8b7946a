//! NDJSON events written by the command layer.
//!
//! Per-object events come from the library's `JsonEventSink`; the events
//! here close the stream.

use std::io::{self, Write};

use pingone_sweep::application::LedgerTotals;
use serde::Serialize;

/// Last event of a run, with the ledger totals.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub success: bool,
    pub dry_run: bool,
    pub totals: LedgerTotals,
    pub duration_ms: u64,
}

impl CompleteEvent {
    pub fn new(success: bool, dry_run: bool, totals: LedgerTotals, duration_ms: u64) -> Self {
        Self {
            event: "complete",
            command: "sweep",
            success,
            dry_run,
            totals,
            duration_ms,
        }
    }
}

/// Emitted when the run stops on an error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command: "sweep",
            code,
            message: message.into(),
        }
    }
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
