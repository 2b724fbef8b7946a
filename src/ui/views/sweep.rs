use std::io::{self, Write};
use std::sync::Mutex;

use pingone_sweep::application::{LedgerTotals, RunSummary};
use pingone_sweep::domain::ports::{CategorySkip, SweepEvent, SweepEventSink};
use pingone_sweep::domain::value_objects::{OutcomeResult, SweepOutcome};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{ColoredText, SemanticColor};

pub fn render_sweep_header(
    environment_id: &str,
    dry_run: bool,
    categories: &[&str],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Sweep, "PingOne Sweep");
    header.add("Environment", environment_id);
    header.add("Mode", if dry_run { "dry run" } else { "live" });
    header.add("Categories", categories.join(", "));
    header.render(supports_color, supports_unicode)
}

/// One line per matched object:
/// `<Category> [(DRY RUN)] - <identifier> (<id>) with action <ACTION> - <result>[: message]`
pub fn render_outcome(outcome: &SweepOutcome, supports_color: bool) -> String {
    let mut line = ColoredText::new(outcome.category.as_str(), SemanticColor::Category)
        .bold()
        .render(supports_color);

    if outcome.dry_run {
        line.push(' ');
        line.push_str(&ColoredText::new("(DRY RUN)", SemanticColor::Simulated).render(supports_color));
    }

    line.push_str(&format!(
        " - {} ({}) with action {} - {}",
        outcome.item.identifier,
        outcome.item.id,
        outcome.action,
        result_text(outcome.result).render(supports_color)
    ));

    if let Some(message) = &outcome.message {
        line.push_str(": ");
        line.push_str(message);
    }
    line.push('\n');
    line
}

fn result_text(result: OutcomeResult) -> ColoredText {
    let color = match result {
        OutcomeResult::Success | OutcomeResult::NoActionAllowed => SemanticColor::Success,
        OutcomeResult::NoActionBlocked => SemanticColor::Warning,
        OutcomeResult::Simulated => SemanticColor::Simulated,
        OutcomeResult::Failure => SemanticColor::Error,
    };
    ColoredText::new(result.phrase(), color)
}

pub fn render_skip(
    label: &str,
    reason: &CategorySkip,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n",
        Icon::Skip.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{label} - skipped: {reason}")).render(supports_color)
    )
}

pub fn render_sweep_summary(
    summary: &RunSummary,
    totals: &LedgerTotals,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = if totals.blocked > 0 {
        ResultSummary::partial("Sweep Complete")
    } else {
        ResultSummary::success("Sweep Complete")
    };

    block.add_stat("swept", totals.succeeded);
    block.add_stat("would be swept (dry run)", totals.simulated);
    block.add_stat("already in the target state", totals.no_action_allowed);
    block.add_stat("left in place (environment default)", totals.blocked);

    let skipped = summary.skipped();
    if skipped > 0 {
        block.add_note(format!("{skipped} categories skipped"));
    }
    if totals.blocked > 0 {
        block.add_note("Review the objects marked 'needs review' by hand");
    }
    if dry_run && totals.simulated > 0 {
        block.with_next_step("Re-run without --dry-run to apply");
    }

    block.render(supports_color, supports_unicode)
}

/// Console renderer for sweep events. Rendering failures are ignored.
pub struct ConsoleOutcomeSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    show_skips: bool,
}

impl ConsoleOutcomeSink {
    pub fn stdout(color: bool, unicode: bool, show_skips: bool) -> Self {
        Self::with_writer(io::stdout(), color, unicode, show_skips)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        show_skips: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            show_skips,
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl SweepEventSink for ConsoleOutcomeSink {
    fn on_event(&self, event: SweepEvent) {
        match event {
            SweepEvent::Outcome(outcome) => self.write(&render_outcome(&outcome, self.color)),
            SweepEvent::CategorySkipped { label, reason } if self.show_skips => {
                self.write(&render_skip(&label, &reason, self.color, self.unicode))
            }
            _ => {}
        }
    }
}
