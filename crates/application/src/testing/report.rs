//! Human-readable pass/fail report of one test case.

use std::fmt;

/// Minimum width of the name column.
const NAME_WIDTH: usize = 60;

/// Borrowed view of a test case, rendered in the fixed console format.
///
/// ```text
/// FAILED: Site root
///
///     Failed: Status code
///   Expected: 200
///      Found: 404
///
///   More information:
///   - The front page must answer.
///
///   Troubleshooting:
///   - Check the web server is running.
/// ```
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// Whether the test case passed.
    pub passed: bool,
    /// Test case name.
    pub name: &'a str,
    /// Recorded failures.
    pub errors: &'a [String],
    /// Test case description, shown on failure.
    pub description: &'a str,
    /// Remediation hints, shown on failure.
    pub troubleshooting: Vec<String>,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "PASSED" } else { "FAILED" };
        writeln!(f, "{verdict}: {:<NAME_WIDTH$}", self.name)?;

        for error in self.errors {
            write!(f, "\n{error}\n")?;
        }

        if !self.passed {
            write!(f, "\n  More information:\n  - {}\n", self.description)?;
            write!(f, "\n  Troubleshooting:\n")?;
            for hint in &self.troubleshooting {
                writeln!(f, "  - {hint}")?;
            }
        }
        Ok(())
    }
}
