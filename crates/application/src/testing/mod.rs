//! Test-case contract, soft assertions and reporting.

mod case;
mod context;
mod report;

pub use case::{TestCase, WebCheck};
pub use context::{CONTAINS_UNSUPPORTED, NOT_EXECUTED, TESTER_MISSING, TestContext, TestState};
pub use report::Report;
