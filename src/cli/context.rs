//! Wiring from CLI flags to a configured checker.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{default_cache_dir, FileStore};
use crate::cli::args::Cli;
use crate::config::{load_config, Settings, UpdaterConfig};
use crate::error::Result;
use crate::fetch::HttpTransport;
use crate::updates::ReleaseUpdateChecker;

/// Resolved locations and configuration for one CLI invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Loaded configuration.
    pub config: UpdaterConfig,
    /// Release cache directory.
    pub cache_dir: PathBuf,
    /// Settings file path.
    pub settings_path: PathBuf,
    /// Token given on the command line or via environment.
    pub token_override: Option<String>,
}

impl AppContext {
    /// Resolve the context from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            config: load_config(cli.config.as_deref())?,
            cache_dir: cli.cache_dir.clone().unwrap_or_else(default_cache_dir),
            settings_path: cli.settings.clone().unwrap_or_else(Settings::default_path),
            token_override: cli.token.clone(),
        })
    }

    /// The access token to use: the override if given, else the saved one.
    pub fn access_token(&self) -> Result<Option<String>> {
        if let Some(token) = self.token_override.as_deref().map(str::trim) {
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }

        let settings = Settings::load(&self.settings_path)?;
        Ok(settings.token().map(String::from))
    }

    /// Build a checker backed by the on-disk cache and the HTTP transport.
    pub fn checker(&self) -> Result<ReleaseUpdateChecker> {
        let transport = HttpTransport::with_timeout(self.config.timeout())?;
        let store = Arc::new(FileStore::new(&self.cache_dir));

        Ok(
            ReleaseUpdateChecker::new(self.config.clone(), transport, store)
                .with_access_token(self.access_token()?),
        )
    }
}
