//! Tester used by the command line runner.
//!
//! Diagnostics go through `tracing`, gated by the configured verbosity:
//! level 1 reports each resolved URL, level 2 also dumps every response.

use webprobe_application::ports::{HttpFetcher, Tester};
use webprobe_domain::FetchResult;

use super::ReqwestFetcher;

/// Verbosity at which resolved URLs are reported.
pub const VERBOSE_URLS: u8 = 1;
/// Verbosity at which full responses are dumped.
pub const VERBOSE_DUMP: u8 = 2;

/// Tester bound to one site, logging through `tracing`.
pub struct ConsoleTester {
    base_url: String,
    verbosity: u8,
    fetcher: Box<dyn HttpFetcher>,
}

impl ConsoleTester {
    /// Creates a tester using the reqwest transport.
    ///
    /// `base_url` is expected in normalized form, without a trailing slash.
    #[must_use]
    pub fn new(base_url: impl Into<String>, verbosity: u8) -> Self {
        Self::with_fetcher(base_url, verbosity, Box::new(ReqwestFetcher::new()))
    }

    /// Creates a tester using a custom transport.
    #[must_use]
    pub fn with_fetcher(
        base_url: impl Into<String>,
        verbosity: u8,
        fetcher: Box<dyn HttpFetcher>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            verbosity,
            fetcher,
        }
    }

    /// Configured verbosity.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.verbosity
    }
}

impl Tester for ConsoleTester {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn verbose(&self, message: &str) {
        if self.verbosity >= VERBOSE_URLS {
            tracing::info!("{message}");
        }
    }

    fn dump_contents(&self, result: &FetchResult) {
        if self.verbosity < VERBOSE_DUMP {
            return;
        }
        if result.is_degraded() {
            tracing::debug!("no response received");
            return;
        }
        tracing::debug!(
            status = result.status_code,
            header = %result.header,
            body = %result.body,
            "response"
        );
    }

    fn fetcher(&self) -> &dyn HttpFetcher {
        self.fetcher.as_ref()
    }
}

impl std::fmt::Debug for ConsoleTester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleTester")
            .field("base_url", &self.base_url)
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}
