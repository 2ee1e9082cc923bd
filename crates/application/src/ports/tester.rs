//! Tester port

use webprobe_domain::FetchResult;

use super::HttpFetcher;

/// Injected collaborator that owns the site location and diagnostic sinks.
///
/// A single tester is shared read-only by every test case of a run.
pub trait Tester: Send + Sync {
    /// Base URL of the site under test, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Logs one diagnostic line.
    fn verbose(&self, message: &str);

    /// Logs the full detail of a fetch.
    fn dump_contents(&self, result: &FetchResult);

    /// Transport used to issue GET requests.
    fn fetcher(&self) -> &dyn HttpFetcher;
}
