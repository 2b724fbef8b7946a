//! pingone-sweep CLI - removes demo and bootstrap configuration from a PingOne environment
//!
//! Usage: pingone-sweep [OPTIONS] [COMMAND]
//!
//! Without a command every enabled category is swept in a fixed order.

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use pingone_sweep::presentation::Cli;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = commands::cmd_sweep(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `-v` flags win over `RUST_LOG`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };

    let filter = match level {
        Some(level) => EnvFilter::new(format!("pingone_sweep={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pingone_sweep=warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
