//! Test case contract.
//!
//! A [`WebCheck`] supplies identity and the check logic; a [`TestCase`]
//! composes it with the [`TestContext`] that records its failures.

use std::io::{self, Write};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::context::{TestContext, TestState};
use super::report::Report;
use crate::ports::Tester;

/// Behaviour of one concrete check against the live site.
#[async_trait]
pub trait WebCheck: Send + Sync {
    /// Short human label.
    fn name(&self) -> &str;

    /// What is being verified and why it matters.
    fn description(&self) -> &str;

    /// Ordered remediation hints, shown only on failure.
    fn troubleshooting(&self) -> Vec<String>;

    /// Performs the check.
    ///
    /// Must not fail: every unmet expectation is recorded through the
    /// assertion helpers of `ctx`.
    async fn run(&self, ctx: &mut TestContext);
}

/// A check together with its recorded outcome.
pub struct TestCase {
    check: Box<dyn WebCheck>,
    context: TestContext,
}

impl TestCase {
    /// Wraps a check in a fresh, not yet executed, test case.
    #[must_use]
    pub fn new(check: impl WebCheck + 'static) -> Self {
        Self::from_boxed(Box::new(check))
    }

    /// Wraps an already boxed check.
    #[must_use]
    pub fn from_boxed(check: Box<dyn WebCheck>) -> Self {
        Self {
            check,
            context: TestContext::new(),
        }
    }

    /// Injects the tester. Must happen before [`TestCase::run`].
    pub fn set_tester(&mut self, tester: Arc<dyn Tester>) {
        self.context.set_tester(tester);
    }

    /// Short human label of the check.
    #[must_use]
    pub fn name(&self) -> &str {
        self.check.name()
    }

    /// Description of the check.
    #[must_use]
    pub fn description(&self) -> &str {
        self.check.description()
    }

    /// Remediation hints of the check.
    #[must_use]
    pub fn troubleshooting(&self) -> Vec<String> {
        self.check.troubleshooting()
    }

    /// Runs the check.
    ///
    /// Expected once per test case; a second call does not reset the error
    /// list, so failures accumulate.
    pub async fn run(&mut self) {
        debug!(name = self.check.name(), "running test case");
        self.context.begin();
        self.check.run(&mut self.context).await;
        debug!(
            name = self.check.name(),
            failures = self.context.errors().len(),
            "test case finished"
        );
    }

    /// True when no failure has been recorded. Always false before `run`.
    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.context.has_passed()
    }

    /// Recorded failure messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        self.context.errors()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TestState {
        self.context.state()
    }

    /// Borrowed report of the current outcome.
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report {
            passed: self.has_passed(),
            name: self.check.name(),
            errors: self.context.errors(),
            description: self.check.description(),
            troubleshooting: self.check.troubleshooting(),
        }
    }

    /// Writes the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_result<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }

    /// Writes the report to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn print_result(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_result(&mut handle)?;
        handle.flush()
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.check.name())
            .field("context", &self.context)
            .finish()
    }
}
