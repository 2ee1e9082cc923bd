//! Infrastructure adapters

mod console_tester;
mod reqwest_fetcher;

pub use console_tester::{ConsoleTester, VERBOSE_DUMP, VERBOSE_URLS};
pub use reqwest_fetcher::{FETCH_TIMEOUT, ReqwestFetcher};
