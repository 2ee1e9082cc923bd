//! Webprobe Domain - Core types
//!
//! This crate defines the data shared by every layer of the site self-check:
//! fetch results, configured route expectations, the loose comparison used
//! by containment checks and the bounded value rendering used in assertion
//! messages.
//! All types here are pure Rust with no I/O dependencies.

pub mod compare;
pub mod error;
pub mod fetch;
pub mod render;
pub mod route;

pub use compare::{as_text, loosely_equal};
pub use error::{DomainError, DomainResult};
pub use fetch::FetchResult;
pub use render::make_short_string;
pub use route::{RouteSpec, normalize_base_url};
