//! Application use cases (orchestration).

mod run_suite;

pub use run_suite::*;
