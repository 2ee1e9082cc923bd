//! Runner settings.
//!
//! Layered with the `config` crate, later sources winning:
//! 1. optional YAML file
//! 2. environment variables prefixed `WEBPROBE_` (e.g. `WEBPROBE_BASE_URL`)
//! 3. explicit overrides from the command line

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use webprobe_domain::{RouteSpec, normalize_base_url};

use crate::error::InfrastructureResult;

/// Prefix of environment variables read by [`SettingsLoader`].
pub const ENV_PREFIX: &str = "WEBPROBE";

/// Validated runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProbeSettings {
    /// Base URL of the site, without a trailing slash once validated.
    pub base_url: String,
    /// 0 quiet, 1 report URLs, 2 dump responses.
    #[serde(default)]
    pub verbosity: u8,
    /// Additional routes to verify.
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl ProbeSettings {
    fn validated(mut self) -> InfrastructureResult<Self> {
        self.base_url = normalize_base_url(&self.base_url)?;
        for route in &self.routes {
            route.validate()?;
        }
        Ok(self)
    }
}

/// Builder collecting the sources of [`ProbeSettings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    base_url: Option<String>,
    verbosity: Option<u8>,
}

impl SettingsLoader {
    /// Creates a loader reading only the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a YAML file first. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the verbosity.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Option<u8>) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Merges every source and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if `base_url`
    /// is missing or invalid, or if a route is invalid.
    pub fn load(self) -> InfrastructureResult<ProbeSettings> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Yaml));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        if let Some(base_url) = self.base_url {
            builder = builder.set_override("base_url", base_url)?;
        }
        if let Some(verbosity) = self.verbosity {
            builder = builder.set_override("verbosity", i64::from(verbosity))?;
        }

        let settings: ProbeSettings = builder.build()?.try_deserialize()?;
        settings.validated()
    }
}
