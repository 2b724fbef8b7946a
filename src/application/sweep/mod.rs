//! Per-object sweep evaluation and the run's outcome ledger.

mod evaluator;
mod ledger;

pub use evaluator::{ActionCall, SweepEvaluator};
pub use ledger::{LedgerTotals, OutcomeLedger};
