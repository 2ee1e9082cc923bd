//! HTTP fetcher implementation using reqwest.
//!
//! This adapter implements the `HttpFetcher` port. It issues exactly one GET
//! per call with short fixed timeouts and never follows redirects, so rewrite
//! checks can see `3xx` answers and their `Location` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, redirect::Policy};
use tracing::warn;
use webprobe_application::ports::HttpFetcher;
use webprobe_domain::FetchResult;

/// Connect timeout and total timeout of every fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(1);

const USER_AGENT: &str = concat!("webprobe/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher backed by reqwest.
///
/// A client is built for each call and dropped before the call returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    /// Creates the fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_client() -> Result<Client, reqwest::Error> {
        Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(FETCH_TIMEOUT)
            .timeout(FETCH_TIMEOUT)
            .redirect(Policy::none())
            .build()
    }

    /// Renders the status line and headers the way they appear on the wire.
    fn header_block(response: &Response) -> String {
        let status = response.status();
        let mut block = format!(
            "{:?} {} {}",
            response.version(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        )
        .trim_end()
        .to_string();

        for (name, value) in response.headers() {
            block.push_str("\r\n");
            block.push_str(name.as_str());
            block.push_str(": ");
            block.push_str(&String::from_utf8_lossy(value.as_bytes()));
        }
        block
    }

    /// Short classification of a transport failure for the log.
    fn failure_kind(error: &reqwest::Error) -> &'static str {
        if error.is_timeout() {
            "timeout"
        } else if error.is_connect() {
            "connect"
        } else if error.is_builder() {
            "invalid request"
        } else if error.is_body() || error.is_decode() {
            "body"
        } else {
            "transport"
        }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> FetchResult {
        let client = match Self::build_client() {
            Ok(client) => client,
            Err(e) => {
                warn!(url, error = %e, "could not build HTTP client");
                return FetchResult::default();
            }
        };

        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, kind = Self::failure_kind(&e), error = %e, "request failed");
                return FetchResult::default();
            }
        };

        let status = response.status().as_u16();
        let header = Self::header_block(&response);
        let body = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(url, kind = Self::failure_kind(&e), error = %e, "reading body failed");
                String::new()
            }
        };

        FetchResult::new(status, &header, &body)
    }
}
