//! Webprobe - smoke checks for URL rewriting on a deployed site.
//!
//! Wires the settings, the console tester and the built-in checks together.
//! The binary in `main.rs` only parses arguments and sets up logging.

pub mod checks;
pub mod cli;
pub mod error;

use std::io::Write;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use webprobe_application::{RunSuite, SuiteSummary};
use webprobe_infrastructure::{ConsoleTester, ProbeSettings, SettingsLoader};

pub use cli::Cli;
pub use error::{AppError, AppResult};

/// Loads settings from the file, environment and flags named by `cli`.
///
/// # Errors
///
/// Returns an error if the settings are missing, unreadable or invalid.
pub fn load_settings(cli: &Cli) -> AppResult<ProbeSettings> {
    let mut loader = SettingsLoader::new()
        .with_base_url(cli.base_url.clone())
        .with_verbosity(cli.verbosity());
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    Ok(loader.load()?)
}

/// Crates whose diagnostics follow the verbosity.
const LOG_TARGETS: [&str; 4] = [
    "webprobe",
    "webprobe_domain",
    "webprobe_application",
    "webprobe_infrastructure",
];

/// Default log filter for a verbosity level.
///
/// Only this workspace's crates are raised; dependencies stay at `warn`.
#[must_use]
pub fn default_log_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        _ => "debug",
    };
    LOG_TARGETS
        .iter()
        .fold("warn".to_string(), |filter, target| format!("{filter},{target}={level}"))
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise the level follows the configured verbosity.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbosity))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Runs the built-in and configured checks, writing every report to `out`.
///
/// With `list` set, only the check names are written.
///
/// # Errors
///
/// Returns an error if writing to `out` fails. Failed checks are reported in
/// the returned summary, not as errors.
pub async fn run<W: Write + ?Sized>(
    settings: &ProbeSettings,
    list: bool,
    out: &mut W,
) -> AppResult<SuiteSummary> {
    let mut cases = checks::default_suite(&settings.routes);

    if list {
        for case in &cases {
            writeln!(out, "{}", case.name())?;
        }
        return Ok(SuiteSummary::default());
    }

    let tester = Arc::new(ConsoleTester::new(
        settings.base_url.clone(),
        settings.verbosity,
    ));
    let summary = RunSuite::new(tester).execute(&mut cases, out).await?;
    writeln!(out, "\n{summary}")?;
    Ok(summary)
}
