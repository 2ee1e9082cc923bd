//! Webprobe - Main Entry Point
//!
//! Parses arguments, loads settings, runs the checks and maps the outcome to
//! the process exit code.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use webprobe::{Cli, init_tracing, load_settings, run};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    init_tracing(settings.verbosity);

    tracing::info!(
        "{} v{}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );
    tracing::debug!(
        config = ?cli.config,
        base_url = %settings.base_url,
        routes = settings.routes.len(),
        "settings loaded"
    );

    let mut out = io::stdout().lock();
    let summary = run(&settings, cli.list, &mut out).await?;

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
