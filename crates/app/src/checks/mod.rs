//! Built-in checks run against every site.

mod missing_page;
mod route;
mod site_root;

pub use missing_page::MissingPageCheck;
pub use route::RouteCheck;
pub use site_root::SiteRootCheck;

use webprobe_application::TestCase;
use webprobe_domain::RouteSpec;

/// The built-in checks followed by one check per configured route.
#[must_use]
pub fn default_suite(routes: &[RouteSpec]) -> Vec<TestCase> {
    let mut cases = vec![
        TestCase::new(SiteRootCheck),
        TestCase::new(MissingPageCheck::new()),
    ];
    cases.extend(routes.iter().cloned().map(|r| TestCase::new(RouteCheck::new(r))));
    cases
}
