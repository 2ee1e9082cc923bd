//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Verify that a deployed site answers URLs the way its rewrite rules intend.
#[derive(Debug, Clone, Parser)]
#[command(name = "webprobe", version)]
#[command(about = "Smoke checks for URL rewriting on a deployed site", long_about = None)]
pub struct Cli {
    /// YAML settings file with the base URL and extra routes.
    #[arg(short, long, env = "WEBPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the site, e.g. `https://lms.example.org`.
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Increase diagnostics: `-v` reports URLs, `-vv` dumps responses.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// List the checks that would run, then exit.
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Verbosity override, `None` when `-v` was not given.
    #[must_use]
    pub const fn verbosity(&self) -> Option<u8> {
        if self.verbose == 0 {
            None
        } else {
            Some(self.verbose)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "webprobe",
            "--base-url",
            "http://site.test",
            "-vv",
            "--config",
            "probe.yaml",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://site.test"));
        assert_eq!(cli.verbosity(), Some(2));
        assert_eq!(cli.config, Some(PathBuf::from("probe.yaml")));
        assert!(!cli.list);
    }

    #[test]
    fn test_no_verbose_flag_means_no_override() {
        let cli = Cli::try_parse_from(["webprobe", "--list"]).unwrap();
        assert_eq!(cli.verbosity(), None);
        assert!(cli.list);
    }
}
