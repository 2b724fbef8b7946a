use pingone_sweep::SweepError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::terminal::detect_capabilities;

pub fn format_sweep_error(err: &SweepError, supports_color: bool, supports_unicode: bool) -> String {
    let block = ErrorBlock::new(err.to_string()).with_code(err.code());

    let block = match err {
        SweepError::MissingSetting { flag, env, .. } => {
            block.with_fix(format!("Pass --{flag}, set {env}, or add it to [connection]."))
        }
        SweepError::InvalidConfig { file, .. } => block
            .with_source(file.display().to_string())
            .with_fix("Fix the TOML and try again."),
        SweepError::Provider { label, .. } | SweepError::Request { label, .. } => {
            block.with_source(label.as_str())
        }
        SweepError::Cancelled => {
            block.with_fix("Re-run the same command; objects already swept are reported as no-ops.")
        }
        SweepError::Configuration(message) if message.starts_with("Cannot find schema") => {
            block.with_fix("Check --schema-name against the schemas in the environment.")
        }
        _ => block,
    };

    block.render(supports_color, supports_unicode)
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    match err.downcast_ref::<SweepError>() {
        Some(sweep) => format_sweep_error(sweep, supports_color, supports_unicode),
        None => ErrorBlock::new(format!("{err:#}")).render(supports_color, supports_unicode),
    }
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<SweepError>()
        .map(SweepError::code)
        .unwrap_or("error")
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let event = crate::ui::json::ErrorEvent::new(error_code(err), format!("{err:#}"));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_github_actions {
        println!("{}", github_actions_annotation(&err.to_string()));
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

/// `::error` workflow command so the failure shows up on the run summary.
fn github_actions_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error title=pingone-sweep::{escaped}")
}
