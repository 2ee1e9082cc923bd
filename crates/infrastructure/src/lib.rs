//! Webprobe Infrastructure - Adapters and implementations
//!
//! This crate provides the concrete tester and HTTP transport used by the
//! runner, and the layered settings loader.

pub mod adapters;
pub mod error;
pub mod settings;

pub use adapters::{ConsoleTester, ReqwestFetcher};
pub use error::{InfrastructureError, InfrastructureResult};
pub use settings::{ProbeSettings, SettingsLoader};
