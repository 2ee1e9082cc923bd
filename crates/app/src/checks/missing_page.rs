//! Unknown URLs must still end in a 404.

use async_trait::async_trait;
use uuid::Uuid;
use webprobe_application::{TestContext, WebCheck};

/// Rewrite rules that send every URL to a front controller must still let
/// unknown pages end in a 404.
#[derive(Debug, Clone)]
pub struct MissingPageCheck {
    path: String,
}

impl MissingPageCheck {
    /// Creates the check with a random path that cannot exist.
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(format!("webprobe-missing-{}", Uuid::now_v7().simple()))
    }

    /// Creates the check for a fixed path.
    #[must_use]
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path that is requested.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for MissingPageCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebCheck for MissingPageCheck {
    fn name(&self) -> &str {
        "Unknown URL returns 404"
    }

    fn description(&self) -> &str {
        "A URL that matches no page must be answered with 404. A catch-all \
         rewrite that answers 200 hides broken links from users and search \
         engines."
    }

    fn troubleshooting(&self) -> Vec<String> {
        vec![
            "Check the catch-all rewrite rule only applies to known routes.".to_string(),
            "Check the application's not-found handler sets the status code.".to_string(),
        ]
    }

    async fn run(&self, ctx: &mut TestContext) {
        let result = ctx.fetch(&self.path).await;
        ctx.assert_same(404, result.status_code, "Unknown URL status code");
    }
}
