//! Shared helper state composed into every test case.
//!
//! Holds the error list and the injected tester, and provides the fetch and
//! soft assertion helpers that checks call from their `run` logic.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use webprobe_domain::{FetchResult, as_text, loosely_equal, make_short_string};

use crate::ports::Tester;

/// Sentinel recorded until the test case has been run.
pub const NOT_EXECUTED: &str = "Test has not been executed yet.";

/// Recorded when `assert_contains` gets a haystack it cannot search.
pub const CONTAINS_UNSUPPORTED: &str = "*** Not implemented assert_contains for this data type.";

/// Recorded when `fetch` is called before a tester was injected.
pub const TESTER_MISSING: &str = "*** Tester has not been set before fetch.";

/// Lifecycle of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestState {
    /// Created, `run` not called yet.
    NotRun,
    /// `run` has been called at least once.
    Executed,
}

/// Error list, tester reference and helpers of one test case.
pub struct TestContext {
    errors: Vec<String>,
    tester: Option<Arc<dyn Tester>>,
    state: TestState,
}

impl TestContext {
    /// Creates a context in the `NotRun` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: vec![NOT_EXECUTED.to_string()],
            tester: None,
            state: TestState::NotRun,
        }
    }

    /// Injects the tester used for URL resolution, transport and logging.
    pub fn set_tester(&mut self, tester: Arc<dyn Tester>) {
        self.tester = Some(tester);
    }

    /// Returns the injected tester, if any.
    #[must_use]
    pub fn tester(&self) -> Option<&Arc<dyn Tester>> {
        self.tester.as_ref()
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TestState {
        self.state
    }

    /// Recorded failure messages, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// True when no failure has been recorded.
    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Moves to `Executed`, dropping the sentinel on the first call only.
    pub(crate) fn begin(&mut self) {
        if self.state == TestState::NotRun {
            self.errors.clear();
            self.state = TestState::Executed;
        }
    }

    /// Fetches `path` relative to the tester's base URL.
    ///
    /// The resolved URL is reported through [`Tester::verbose`] before the
    /// request and the result through [`Tester::dump_contents`] after it.
    /// Never fails: an unreachable site yields status code 0.
    pub async fn fetch(&mut self, path: &str) -> FetchResult {
        let Some(tester) = self.tester.clone() else {
            self.errors.push(TESTER_MISSING.to_string());
            return FetchResult::default();
        };

        let url = format!("{}/{}", tester.base_url(), path);
        tester.verbose(&format!("GET: {url}"));
        let result = tester.fetcher().get(&url).await;
        tester.dump_contents(&result);
        result
    }

    /// Records a failure unless `expected` and `actual` are strictly equal.
    ///
    /// Values are compared with their type: `1` and `"1"` differ, as do
    /// `null` and `false`.
    pub fn assert_same(&mut self, expected: impl Into<Value>, actual: impl Into<Value>, message: &str) {
        let expected = expected.into();
        let actual = actual.into();
        if expected != actual {
            self.errors.push(format!(
                "    Failed: {message}\n  Expected: {}\n     Found: {}",
                make_short_string(&expected),
                make_short_string(&actual)
            ));
        }
    }

    /// Records a failure unless `haystack` contains `needle`.
    ///
    /// Arrays are searched element by element with loose equality (`1`
    /// matches `1.0` and `"1"`), strings by substring. A non-string needle is
    /// searched in a string haystack by its plain text (`1.0` as `"1"`). Any
    /// other haystack records [`CONTAINS_UNSUPPORTED`].
    pub fn assert_contains(&mut self, needle: impl Into<Value>, haystack: impl Into<Value>, message: &str) {
        let needle = needle.into();
        let haystack = haystack.into();

        let found = match (&haystack, &needle) {
            (Value::Array(items), _) => items.iter().any(|item| loosely_equal(item, &needle)),
            (Value::String(text), Value::String(part)) => text.contains(part.as_str()),
            (Value::String(text), other) => text.contains(&as_text(other)),
            _ => {
                self.errors.push(CONTAINS_UNSUPPORTED.to_string());
                return;
            }
        };

        if !found {
            self.errors.push(format!(
                "    Failed: {message}\n    Needle: {}\n  Haystack: {}",
                make_short_string(&needle),
                make_short_string(&haystack)
            ));
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestContext")
            .field("errors", &self.errors)
            .field("tester", &self.tester.as_ref().map(|t| t.base_url().to_string()))
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fakes::{Event, RecordingTester};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn executed() -> TestContext {
        let mut ctx = TestContext::new();
        ctx.begin();
        ctx
    }

    #[test]
    fn test_fresh_context_has_not_passed() {
        let ctx = TestContext::new();
        assert!(!ctx.has_passed());
        assert_eq!(ctx.errors(), [NOT_EXECUTED]);
        assert_eq!(ctx.state(), TestState::NotRun);
    }

    #[test]
    fn test_begin_only_clears_sentinel_once() {
        let mut ctx = executed();
        assert!(ctx.has_passed());

        ctx.assert_same(1, 2, "first");
        ctx.begin();
        assert_eq!(ctx.errors().len(), 1);
        assert_eq!(ctx.state(), TestState::Executed);
    }

    #[test]
    fn test_assert_same_equal_values() {
        let mut ctx = executed();
        ctx.assert_same(200, 200u16, "status");
        ctx.assert_same("Welcome", String::from("Welcome"), "text");
        ctx.assert_same(Value::Null, Value::Null, "null");
        ctx.assert_same(json!([1, "a"]), json!([1, "a"]), "array");
        assert!(ctx.has_passed());
    }

    #[test]
    fn test_assert_same_is_strict() {
        let mut ctx = executed();
        ctx.assert_same(1, "1", "int vs string");
        ctx.assert_same(Value::Null, false, "null vs false");
        ctx.assert_same(1, 1.0, "int vs float");
        assert_eq!(ctx.errors().len(), 3);
    }

    #[test]
    fn test_assert_same_message_format() {
        let mut ctx = executed();
        ctx.assert_same(200, 404, "Status code");
        assert_eq!(
            ctx.errors(),
            ["    Failed: Status code\n  Expected: 200\n     Found: 404"]
        );
    }

    #[test]
    fn test_assertions_accumulate() {
        let mut ctx = executed();
        ctx.assert_same(1, 2, "a");
        ctx.assert_contains("z", "abc", "b");
        ctx.assert_same(3, 3, "c");
        assert_eq!(ctx.errors().len(), 2);
        assert!(ctx.errors()[0].contains("Failed: a"));
        assert!(ctx.errors()[1].contains("Failed: b"));
    }

    #[test]
    fn test_assert_contains_array() {
        let mut ctx = executed();
        ctx.assert_contains("n", json!(["a", "b", "n"]), "member");
        assert!(ctx.has_passed());

        ctx.assert_contains("n", json!(["a", "b"]), "missing");
        assert_eq!(
            ctx.errors(),
            ["    Failed: missing\n    Needle: \"n\"\n  Haystack: [\"a\",\"b\"]"]
        );
    }

    #[test]
    fn test_assert_contains_matches_loosely() {
        let mut ctx = executed();
        ctx.assert_contains(1, json!(["1", "2"]), "numeric string");
        ctx.assert_contains(1, json!([1.0]), "float");
        ctx.assert_contains(1.0, "page 1 of 2", "float in text");
        ctx.assert_contains(true, "HTTP/1.1 200 OK", "true as text");
        assert!(ctx.has_passed(), "{:?}", ctx.errors());

        ctx.assert_contains(0, json!(["abc"]), "non-numeric string");
        ctx.assert_contains(1.5, "page 15", "fraction kept");
        assert_eq!(ctx.errors().len(), 2);
        assert!(ctx.errors()[0].contains("Failed: non-numeric string"));
        assert!(ctx.errors()[1].contains("Failed: fraction kept"));
    }

    #[test]
    fn test_assert_contains_string() {
        let mut ctx = executed();
        ctx.assert_contains("ab", "xabz", "substring");
        ctx.assert_contains(404, "HTTP/1.1 404 Not Found", "number in text");
        assert!(ctx.has_passed());

        ctx.assert_contains("Welcome", "", "empty body");
        assert_eq!(ctx.errors().len(), 1);
        assert!(ctx.errors()[0].contains("Haystack: \"\""));
    }

    #[test]
    fn test_assert_contains_unsupported_haystack() {
        let mut ctx = executed();
        ctx.assert_contains("x", 42, "number");
        ctx.assert_contains(json!(["x"]), json!({"x": 1}), "object");
        ctx.assert_contains(Value::Null, Value::Null, "null");
        assert_eq!(ctx.errors(), [CONTAINS_UNSUPPORTED; 3]);
    }

    #[test]
    fn test_long_operands_are_bounded() {
        let mut ctx = executed();
        let body = "<html>".repeat(500);
        ctx.assert_same("<html></html>", body.as_str(), "body");
        let error = &ctx.errors()[0];
        let found = error.lines().last().unwrap();
        assert!(found.ends_with("..."));
        assert_eq!(found.len(), "     Found: ".len() + 100);
    }

    #[tokio::test]
    async fn test_fetch_resolves_and_logs_url() {
        let tester = Arc::new(RecordingTester::new(
            "http://example.test",
            FetchResult::new(200, "HTTP/1.1 200 OK", "ok"),
        ));
        let mut ctx = executed();
        ctx.set_tester(tester.clone());

        let result = ctx.fetch("admin/x").await;

        assert_eq!(result.status_code, 200);
        assert_eq!(tester.requested(), ["http://example.test/admin/x"]);
        assert_eq!(tester.verbose_lines(), ["GET: http://example.test/admin/x"]);
        assert_eq!(tester.dumps(), [result]);
        assert!(ctx.has_passed());
    }

    #[tokio::test]
    async fn test_fetch_logs_url_before_request_and_dumps_after() {
        let tester = Arc::new(RecordingTester::new(
            "http://example.test",
            FetchResult::new(301, "HTTP/1.1 301 Moved Permanently", ""),
        ));
        let mut ctx = executed();
        ctx.set_tester(tester.clone());

        ctx.fetch("course/view.php?id=2").await;
        ctx.fetch("").await;

        assert_eq!(
            tester.events(),
            [
                Event::Verbose("GET: http://example.test/course/view.php?id=2".to_string()),
                Event::Get("http://example.test/course/view.php?id=2".to_string()),
                Event::Dump(301),
                Event::Verbose("GET: http://example.test/".to_string()),
                Event::Get("http://example.test/".to_string()),
                Event::Dump(301),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_without_tester_records_error() {
        let mut ctx = executed();
        let result = ctx.fetch("x").await;
        assert!(result.is_degraded());
        assert_eq!(ctx.errors(), [TESTER_MISSING]);
    }
}
