//! Run suite use case.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::ApplicationResult;
use crate::ports::Tester;
use crate::testing::TestCase;

/// Counts of one suite run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Number of test cases run.
    pub total: usize,
    /// Test cases that passed.
    pub passed: usize,
    /// Test cases that failed.
    pub failed: usize,
}

impl SuiteSummary {
    /// True when every test case passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} checks passed", self.passed, self.total)
    }
}

/// Use case running test cases one after another against a shared tester.
pub struct RunSuite {
    tester: Arc<dyn Tester>,
}

impl RunSuite {
    /// Creates the use case.
    #[must_use]
    pub fn new(tester: Arc<dyn Tester>) -> Self {
        Self { tester }
    }

    /// Injects the tester into each case, runs it once and writes its report.
    ///
    /// Cases run sequentially; a failing case never stops the suite.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing a report to `out` fails.
    pub async fn execute<W: Write + ?Sized>(
        &self,
        cases: &mut [TestCase],
        out: &mut W,
    ) -> ApplicationResult<SuiteSummary> {
        let mut summary = SuiteSummary::default();
        info!(
            base_url = self.tester.base_url(),
            cases = cases.len(),
            "running suite"
        );

        for case in cases.iter_mut() {
            case.set_tester(Arc::clone(&self.tester));
            case.run().await;

            summary.total += 1;
            if case.has_passed() {
                summary.passed += 1;
            } else {
                summary.failed += 1;
                warn!(name = case.name(), failures = case.errors().len(), "check failed");
            }

            case.write_result(&mut *out)?;
        }

        out.flush()?;
        info!(%summary, "suite finished");
        Ok(summary)
    }
}
