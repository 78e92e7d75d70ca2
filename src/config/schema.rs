//! Updater configuration schema.
//!
//! Every field has a compiled-in default; a YAML file may override any of
//! them. Unknown keys are rejected so typos surface as parse errors.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::updates::VERSION;

/// Fixed cache key for the latest release.
pub const RELEASE_CACHE_KEY: &str = "latest_release";

/// How long a fetched release stays cached (12 hours).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 12 * 3600;

/// Longest accepted cache lifetime (one year).
pub const MAX_CACHE_TTL_SECS: u64 = 365 * 24 * 3600;

/// Release API request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdaterConfig {
    /// Repository identifier, `owner/repo`.
    pub repository: String,
    /// Filename of the packaged artifact attached to each release.
    pub asset_name: String,
    /// Version currently installed.
    pub current_version: String,
    /// Base URL of the release API.
    pub api_base: String,
    /// Base URL of repository web pages.
    pub web_base: String,
    /// Host platform name sent in the user agent.
    pub platform: String,
    /// Host platform version sent in the user agent.
    pub platform_version: String,
    /// Cache lifetime for a fetched release.
    pub cache_ttl_secs: u64,
    /// Release API request timeout.
    pub timeout_secs: u64,
    /// Descriptive plugin metadata.
    pub plugin: PluginMetadata,
    /// Declared compatibility.
    pub compatibility: Compatibility,
}

/// Static plugin metadata shown on the package information screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginMetadata {
    /// Display name.
    pub name: String,
    /// Directory slug.
    pub slug: String,
    /// Main file inside the plugin directory.
    pub entry_file: String,
    /// Author name.
    pub author: String,
    /// Author profile URL.
    pub author_profile: String,
    /// Installation instructions.
    pub installation: String,
}

/// Declared compatibility of the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Compatibility {
    /// Minimum host platform version.
    pub requires: String,
    /// Minimum runtime version.
    pub requires_runtime: String,
    /// Host platform version tested up to.
    pub tested: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            repository: "gbyat/wordpress-plugin-starter".to_string(),
            asset_name: "wordpress-plugin-starter.zip".to_string(),
            current_version: VERSION.to_string(),
            api_base: "https://api.github.com".to_string(),
            web_base: "https://github.com".to_string(),
            platform: "WordPress".to_string(),
            platform_version: "6.4".to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            plugin: PluginMetadata::default(),
            compatibility: Compatibility::default(),
        }
    }
}

impl Default for PluginMetadata {
    fn default() -> Self {
        Self {
            name: "WordPress Plugin Starter".to_string(),
            slug: "wordpress-plugin-starter".to_string(),
            entry_file: "plugin-name.php".to_string(),
            author: "Your Name".to_string(),
            author_profile: "https://github.com/gbyat".to_string(),
            installation: "Upload the plugin files to the /wp-content/plugins/wordpress-plugin-starter \
                 directory, or install the plugin through the WordPress plugins screen directly."
                .to_string(),
        }
    }
}

impl Default for Compatibility {
    fn default() -> Self {
        Self {
            requires: "5.0".to_string(),
            requires_runtime: "7.4".to_string(),
            tested: "6.4".to_string(),
        }
    }
}

impl UpdaterConfig {
    /// URL of the latest-release endpoint.
    pub fn release_url(&self) -> String {
        format!(
            "{}/repos/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            self.repository
        )
    }

    /// Web page of the repository.
    pub fn repository_url(&self) -> String {
        format!("{}/{}", self.web_base.trim_end_matches('/'), self.repository)
    }

    /// `User-Agent` header value.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.platform, self.platform_version)
    }

    /// Plugin identifier as the host refers to it (`slug/entry-file`).
    pub fn plugin_id(&self) -> String {
        format!("{}/{}", self.plugin.slug, self.plugin.entry_file)
    }

    /// Cache lifetime. Saturates instead of overflowing.
    pub fn cache_ttl(&self) -> chrono::Duration {
        i64::try_from(self.cache_ttl_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .unwrap_or(chrono::Duration::MAX)
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self.repository.split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {}
            _ => problems.push(format!(
                "repository must be 'owner/repo', got '{}'",
                self.repository
            )),
        }

        if self.asset_name.trim().is_empty() {
            problems.push("asset_name must not be empty".to_string());
        }

        if self.current_version.trim().is_empty() {
            problems.push("current_version must not be empty".to_string());
        }

        if self.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            problems.push(format!(
                "cache_ttl_secs must be at most {}, got {}",
                MAX_CACHE_TTL_SECS, self.cache_ttl_secs
            ));
        }

        if self.timeout_secs == 0 {
            problems.push("timeout_secs must be greater than zero".to_string());
        }

        problems
    }
}
