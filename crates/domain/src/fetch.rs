//! Fetch result type
//!
//! The outcome of a single GET issued by a test case. Transport failures are
//! not errors: they produce a degraded result with status code 0.

/// Raw outcome of one HTTP GET.
///
/// `header` holds the raw header block (status line plus one `name: value`
/// line per header) and `body` the response body, both trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// HTTP status code, or 0 when no response was received.
    pub status_code: u16,
    /// Raw header block.
    pub header: String,
    /// Response body.
    pub body: String,
}

impl FetchResult {
    /// Creates a result, trimming surrounding whitespace from header and body.
    #[must_use]
    pub fn new(status_code: u16, header: &str, body: &str) -> Self {
        Self {
            status_code,
            header: header.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Returns true when no HTTP response was received at all.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.status_code == 0
    }
}
