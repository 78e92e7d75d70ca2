//! Release update checker.
//!
//! [`ReleaseUpdateChecker`] looks up the latest published release, caches it
//! for the configured TTL and answers the host update pipeline's questions.
//! Its collaborators (transport, store, clock) are injected at construction.

use std::sync::Arc;

use crate::cache::{get_value, set_value, CacheEntry, Clock, ExpiringStore, SystemClock};
use crate::config::{token_preview, UpdaterConfig, RELEASE_CACHE_KEY};
use crate::error::{Result, UpdaterError};
use crate::fetch::{ReleaseRequest, ReleaseTransport};

use super::metadata::{
    CacheState, InformationSections, OfferSections, PluginInformation, TokenStatus, UpdateOffer,
    UpdateStatus,
};
use super::release::{GitHubRelease, ReleaseInfo};
use super::version::is_newer_version;

/// `Accept` header for the release API.
pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// Check whether `release` is strictly newer than `current_version`.
///
/// A missing release never counts as an update.
pub fn is_update_available(current_version: &str, release: Option<&ReleaseInfo>) -> bool {
    release.is_some_and(|release| is_newer_version(&release.version, current_version))
}

/// Checks a release API for new versions of one plugin.
pub struct ReleaseUpdateChecker {
    config: UpdaterConfig,
    access_token: Option<String>,
    transport: Box<dyn ReleaseTransport>,
    store: Arc<dyn ExpiringStore>,
    clock: Arc<dyn Clock>,
}

impl ReleaseUpdateChecker {
    /// Create a checker using wall-clock time and no access token.
    pub fn new(
        config: UpdaterConfig,
        transport: impl ReleaseTransport + 'static,
        store: Arc<dyn ExpiringStore>,
    ) -> Self {
        Self {
            config,
            access_token: None,
            transport: Box::new(transport),
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Use a different time source for cache expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Authenticate release API requests. Blank tokens are ignored.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    /// The configuration this checker was built with.
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// The request sent to the release API.
    pub fn release_request(&self) -> ReleaseRequest {
        let request = ReleaseRequest::new(self.config.release_url())
            .with_header("User-Agent", self.config.user_agent())
            .with_header("Accept", ACCEPT_HEADER);

        match &self.access_token {
            Some(token) => request.with_header("Authorization", format!("token {}", token)),
            None => request,
        }
    }

    /// The live cached release, if any. Never touches the network.
    pub fn cached_release(&self) -> Option<CacheEntry<ReleaseInfo>> {
        match get_value(self.store.as_ref(), self.clock.as_ref(), RELEASE_CACHE_KEY) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Failed to read release cache: {}", e);
                None
            }
        }
    }

    /// Get the latest release, from cache when possible.
    ///
    /// Returns `None` when the release API cannot be reached, answers with a
    /// status other than 200, or returns something that is not a release.
    /// Failures are not cached, so the next call tries again.
    pub fn get_latest_release(&self) -> Option<ReleaseInfo> {
        if let Some(entry) = self.cached_release() {
            tracing::debug!(
                "Using cached release {} (expires {})",
                entry.value.version,
                entry.expires_at
            );
            return Some(entry.value);
        }

        let release = match self.fetch_latest_release() {
            Ok(release) => release,
            Err(e) => {
                tracing::warn!("Latest release unavailable: {}", e);
                return None;
            }
        };

        if let Err(e) = set_value(
            self.store.as_ref(),
            self.clock.as_ref(),
            RELEASE_CACHE_KEY,
            &release,
            self.config.cache_ttl(),
        ) {
            tracing::warn!("Failed to cache release {}: {}", release.version, e);
        }

        Some(release)
    }

    /// Fetch the latest release from the API, bypassing and not updating the cache.
    pub fn fetch_latest_release(&self) -> Result<ReleaseInfo> {
        let request = self.release_request();
        tracing::debug!("Fetching latest release from {}", request.url);

        let response = self.transport.get(&request)?;

        if response.status != 200 {
            return Err(UpdaterError::UnexpectedStatus {
                url: request.url,
                status: response.status,
            });
        }

        let release: GitHubRelease = serde_json::from_str(&response.body)?;
        let info = ReleaseInfo::from_release(&release, &self.config.asset_name);

        if !info.has_package() {
            tracing::debug!(
                "Release {} has no asset named {}",
                info.version,
                self.config.asset_name
            );
        }

        Ok(info)
    }

    /// Check `release` against the configured current version.
    pub fn is_update_available(&self, release: Option<&ReleaseInfo>) -> bool {
        is_update_available(&self.config.current_version, release)
    }

    /// Drop the cached release. The next lookup goes to the network.
    pub fn invalidate_cache(&self) {
        match self.store.delete(RELEASE_CACHE_KEY) {
            Ok(true) => tracing::debug!("Release cache invalidated"),
            Ok(false) => tracing::debug!("Release cache already empty"),
            Err(e) => tracing::warn!("Failed to invalidate release cache: {}", e),
        }
    }

    /// Project a release into the host's package information record.
    pub fn describe_for_user_interface(&self, release: &ReleaseInfo) -> PluginInformation {
        let plugin = &self.config.plugin;
        let compat = &self.config.compatibility;

        PluginInformation {
            name: plugin.name.clone(),
            slug: plugin.slug.clone(),
            version: release.version.clone(),
            author: plugin.author.clone(),
            author_profile: plugin.author_profile.clone(),
            homepage: self.config.repository_url(),
            last_updated: release.published_at.clone(),
            requires: compat.requires.clone(),
            requires_runtime: compat.requires_runtime.clone(),
            tested: compat.tested.clone(),
            download_link: release.download_url.clone(),
            sections: InformationSections {
                description: release.description.clone(),
                changelog: release.changelog.clone(),
                installation: plugin.installation.clone(),
                screenshots: String::new(),
            },
        }
    }

    /// The update to offer the host, if a newer release exists.
    pub fn update_offer(&self) -> Option<UpdateOffer> {
        let release = self.get_latest_release()?;
        self.offer_for(&release)
    }

    /// The offer for an already fetched `release`, if it is newer than the
    /// installed version. Never touches the network or the cache.
    pub fn offer_for(&self, release: &ReleaseInfo) -> Option<UpdateOffer> {
        if !self.is_update_available(Some(release)) {
            tracing::debug!(
                "Installed version {} is up to date (latest {})",
                self.config.current_version,
                release.version
            );
            return None;
        }

        let compat = &self.config.compatibility;
        Some(UpdateOffer {
            slug: self.config.plugin.slug.clone(),
            plugin: self.config.plugin_id(),
            new_version: release.version.clone(),
            url: self.config.repository_url(),
            package: release.download_url.clone(),
            requires: compat.requires.clone(),
            requires_runtime: compat.requires_runtime.clone(),
            tested: compat.tested.clone(),
            last_updated: release.published_at.clone(),
            sections: OfferSections {
                description: release.description.clone(),
                changelog: release.changelog.clone(),
            },
        })
    }

    /// Answer a package information query for `slug`.
    ///
    /// Queries about other plugins are not ours to answer.
    pub fn plugin_information(&self, slug: &str) -> Option<PluginInformation> {
        if slug != self.config.plugin.slug {
            return None;
        }

        let release = self.get_latest_release()?;
        Some(self.describe_for_user_interface(&release))
    }

    /// React to a completed installation.
    ///
    /// Invalidates the cache when `plugin` names this plugin, either by its
    /// full identifier or by its entry file. Returns whether it did.
    pub fn on_post_install(&self, plugin: &str) -> bool {
        let ours = plugin == self.config.plugin_id() || plugin == self.config.plugin.entry_file;
        if ours {
            self.invalidate_cache();
        }
        ours
    }

    /// Administrator-requested cache clear.
    pub fn clear_update_cache(&self) {
        tracing::info!("Clearing update cache for {}", self.config.repository);
        self.invalidate_cache();
    }

    /// Debug report: versions, token and cache state.
    pub fn status(&self) -> UpdateStatus {
        let release = self.get_latest_release();

        let token = match &self.access_token {
            Some(token) => TokenStatus::Set {
                preview: token_preview(token),
            },
            None => TokenStatus::NotSet,
        };

        let cache = match self.cached_release() {
            Some(entry) => CacheState::Populated {
                cached_at: entry.cached_at,
                expires_at: entry.expires_at,
            },
            None => CacheState::Empty,
        };

        UpdateStatus {
            current_version: self.config.current_version.clone(),
            update_available: self.is_update_available(release.as_ref()),
            package_available: release.as_ref().is_some_and(ReleaseInfo::has_package),
            latest_version: release.map(|r| r.version),
            repository: self.config.repository.clone(),
            token,
            cache,
        }
    }
}
