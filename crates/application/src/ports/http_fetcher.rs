//! HTTP fetcher port

use async_trait::async_trait;
use webprobe_domain::FetchResult;

/// Port for issuing a single HTTP GET.
///
/// Implementations never fail: connection errors and timeouts are reported
/// as a degraded [`FetchResult`] with status code 0.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Performs a GET against the fully resolved `url`.
    async fn get(&self, url: &str) -> FetchResult;
}
