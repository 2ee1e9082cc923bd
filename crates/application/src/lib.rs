//! Webprobe Application - Test-case contract, ports and use cases
//!
//! This crate defines the application layer with:
//! - Port traits for the injected tester and the HTTP transport
//! - The test-case contract with soft assertions and console reporting
//! - The sequential suite runner

pub mod error;
pub mod ports;
pub mod testing;
pub mod use_cases;

#[cfg(test)]
mod fakes;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpFetcher, Tester};
pub use testing::{Report, TestCase, TestContext, TestState, WebCheck};
pub use use_cases::{RunSuite, SuiteSummary};
