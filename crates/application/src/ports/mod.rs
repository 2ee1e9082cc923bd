//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the test-case core and the outside
//! world. Adapters live in the infrastructure layer.

mod http_fetcher;
mod tester;

pub use http_fetcher::HttpFetcher;
pub use tester::Tester;
