//! Sweep command: resolve settings, connect, run the plan, report.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};

use pingone_sweep::application::{CancelFlag, OutcomeLedger, SweepRunner};
use pingone_sweep::config::{self, ConfigWarning};
use pingone_sweep::domain::ports::{FanoutEventSink, SweepEventSink};
use pingone_sweep::infrastructure::JsonEventSink;
use pingone_sweep::presentation::{Cli, SweepConfig};

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, CompleteEvent};
use crate::ui::views::config::render_config_warnings;
use crate::ui::views::sweep::{render_sweep_header, render_sweep_summary, ConsoleOutcomeSink};

pub fn cmd_sweep(cli: &Cli) -> Result<()> {
    let loaded = config::discover(cli.config.as_deref())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

    if let Some(source) = &loaded.source {
        tracing::debug!(path = %source.display(), "Using configuration file");
    }
    report_config_warnings(&loaded.warnings, &ui);

    let resolved = SweepConfig::resolve(cli, &loaded.config)?;

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    if let Err(err) = ctrlc::set_handler(move || handler_flag.cancel()) {
        tracing::warn!(error = %err, "Could not install Ctrl+C handler");
    }

    let env = resolved
        .connect(cancel)
        .context("failed to connect to the platform")?;

    if !ui.json {
        let labels: Vec<&str> = resolved.plan.categories().map(|c| c.label()).collect();
        println!(
            "{}",
            render_sweep_header(
                env.environment_id(),
                env.dry_run(),
                &labels,
                ui.color,
                ui.unicode
            )
        );
    }

    let ledger = Arc::new(OutcomeLedger::new());
    let recorder: Arc<dyn SweepEventSink> = ledger.clone();
    let output: Arc<dyn SweepEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleOutcomeSink::stdout(ui.color, ui.unicode, ui.verbose > 0))
    };
    let sink = FanoutEventSink::new(vec![output, recorder]);

    let started = Instant::now();
    let result = SweepRunner::new(&env, &sink).run(&resolved.plan);
    let totals = ledger.totals();

    if ui.json {
        let event = CompleteEvent::new(
            result.is_ok(),
            env.dry_run(),
            totals,
            started.elapsed().as_millis() as u64,
        );
        let _ = emit_event(&event);
    } else if let Ok(summary) = &result {
        println!();
        print!(
            "{}",
            render_sweep_summary(summary, &totals, env.dry_run(), ui.color, ui.unicode)
        );
    }

    tracing::trace!(ledger = %ledger.to_json(), "Outcome ledger");

    result?;
    Ok(())
}

fn report_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if warnings.is_empty() {
        return;
    }

    if ui.json {
        for w in warnings {
            tracing::warn!(
                key = %w.key,
                file = %w.file.display(),
                suggestion = w.suggestion.as_deref(),
                "Unknown configuration key"
            );
        }
        return;
    }

    eprint!("{}", render_config_warnings(warnings, ui.color, ui.unicode));
}
