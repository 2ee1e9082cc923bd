//! Configured route expectations and base URL handling.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// One URL the deployed site must answer in a known way.
///
/// Typical use is a rewritten path: `expect_status: 301` together with
/// `header_contains: "Location: https://site/clean/path"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Short label shown in the report.
    pub name: String,
    /// What the route verifies and why it matters.
    #[serde(default)]
    pub description: String,
    /// Path relative to the base URL.
    pub path: String,
    /// Expected HTTP status code.
    #[serde(default = "default_status")]
    pub expect_status: u16,
    /// Text the body must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_contains: Option<String>,
    /// Text the raw header block must contain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_contains: Option<String>,
    /// Hints shown when the route check fails.
    #[serde(default)]
    pub troubleshooting: Vec<String>,
}

const fn default_status() -> u16 {
    200
}

impl RouteSpec {
    /// Creates a route expecting `200` with no body or header constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            path: path.into(),
            expect_status: default_status(),
            body_contains: None,
            header_contains: None,
            troubleshooting: Vec::new(),
        }
    }

    /// Sets the expected status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.expect_status = status;
        self
    }

    /// Requires the body to contain `text`.
    #[must_use]
    pub fn with_body_contains(mut self, text: impl Into<String>) -> Self {
        self.body_contains = Some(text.into());
        self
    }

    /// Requires the header block to contain `text`.
    #[must_use]
    pub fn with_header_contains(mut self, text: impl Into<String>) -> Self {
        self.header_contains = Some(text.into());
        self
    }

    /// Path without leading slashes, ready to be joined to the base URL.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Checks the route is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRoute`] for an empty name or a status
    /// code outside `100..=599`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidRoute {
                name: self.path.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if !(100..=599).contains(&self.expect_status) {
            return Err(DomainError::InvalidRoute {
                name: self.name.clone(),
                reason: format!("unexpected status code {}", self.expect_status),
            });
        }
        Ok(())
    }
}

/// Validates a site base URL and strips its trailing slashes.
///
/// Paths are later appended as `{base}/{path}`, so the stored form never ends
/// with `/`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] if the URL does not parse or is not
/// `http`/`https`.
pub fn normalize_base_url(raw: &str) -> DomainResult<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| DomainError::InvalidUrl(format!("{e}: {trimmed}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::InvalidUrl(format!(
            "unsupported scheme '{}': {trimmed}",
            parsed.scheme()
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
