//! Checks built from the routes listed in the settings.
//!
//! Each route asserts its status code and, when configured, a body or header
//! fragment. Header fragments are matched case-insensitively.

use async_trait::async_trait;
use webprobe_application::{TestContext, WebCheck};
use webprobe_domain::RouteSpec;

/// Check built from a configured [`RouteSpec`].
#[derive(Debug, Clone)]
pub struct RouteCheck {
    route: RouteSpec,
    description: String,
}

impl RouteCheck {
    /// Creates the check.
    #[must_use]
    pub fn new(route: RouteSpec) -> Self {
        let description = if route.description.trim().is_empty() {
            format!(
                "GET /{} must answer {}.",
                route.relative_path(),
                route.expect_status
            )
        } else {
            route.description.clone()
        };
        Self { route, description }
    }
}

#[async_trait]
impl WebCheck for RouteCheck {
    fn name(&self) -> &str {
        &self.route.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn troubleshooting(&self) -> Vec<String> {
        if self.route.troubleshooting.is_empty() {
            vec![
                format!("Request /{} by hand and compare.", self.route.relative_path()),
                "Check the rewrite rules of the web server for this path.".to_string(),
            ]
        } else {
            self.route.troubleshooting.clone()
        }
    }

    async fn run(&self, ctx: &mut TestContext) {
        let path = self.route.relative_path();
        let result = ctx.fetch(path).await;

        ctx.assert_same(
            self.route.expect_status,
            result.status_code,
            &format!("Status code of /{path}"),
        );
        if let Some(text) = &self.route.body_contains {
            ctx.assert_contains(text.as_str(), result.body, &format!("Body of /{path}"));
        }
        // Header names arrive lower-cased, so compare case-insensitively.
        if let Some(text) = &self.route.header_contains {
            ctx.assert_contains(
                text.to_lowercase(),
                result.header.to_lowercase(),
                &format!("Headers of /{path}"),
            );
        }
    }
}
