//! Front page check.

use async_trait::async_trait;
use webprobe_application::{TestContext, WebCheck};

/// The front page must answer before anything else can be trusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteRootCheck;

#[async_trait]
impl WebCheck for SiteRootCheck {
    fn name(&self) -> &str {
        "Site root answers"
    }

    fn description(&self) -> &str {
        "The base URL must return a page with status 200. Every other check \
         resolves its path against this URL, so nothing else is meaningful \
         while it fails."
    }

    fn troubleshooting(&self) -> Vec<String> {
        vec![
            "Check the base URL, including scheme and port.".to_string(),
            "Check the web server is running and reachable from this host.".to_string(),
            "A status of 0 means no HTTP response arrived within one second.".to_string(),
        ]
    }

    async fn run(&self, ctx: &mut TestContext) {
        let result = ctx.fetch("").await;
        ctx.assert_same(200, result.status_code, "Site root status code");
        ctx.assert_same(false, result.body.is_empty(), "Site root body is empty");
    }
}
