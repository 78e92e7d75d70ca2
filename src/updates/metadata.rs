//! Records handed to the host update pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text sections of an update offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSections {
    pub description: String,
    pub changelog: String,
}

/// Text sections of the package information screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationSections {
    pub description: String,
    pub changelog: String,
    pub installation: String,
    pub screenshots: String,
}

/// Answer to the host's "package information" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInformation {
    pub name: String,
    pub slug: String,
    pub version: String,
    pub author: String,
    pub author_profile: String,
    pub homepage: String,
    pub last_updated: String,
    /// Minimum host platform version.
    pub requires: String,
    /// Minimum runtime version.
    pub requires_runtime: String,
    /// Host platform version tested up to.
    pub tested: String,
    /// Empty when the release carries no package.
    pub download_link: String,
    pub sections: InformationSections,
}

/// An update the host should offer for installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOffer {
    pub slug: String,
    /// Plugin identifier (`slug/entry-file`).
    pub plugin: String,
    pub new_version: String,
    /// Repository web page.
    pub url: String,
    /// Package download URL, empty when the release carries no package.
    pub package: String,
    pub requires: String,
    pub requires_runtime: String,
    pub tested: String,
    pub last_updated: String,
    pub sections: OfferSections,
}

impl UpdateOffer {
    /// Whether the host can install this offer.
    pub fn is_installable(&self) -> bool {
        !self.package.is_empty()
    }
}

/// Whether an access token is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TokenStatus {
    NotSet,
    Set {
        /// Masked token (first eight characters).
        preview: String,
    },
}

/// State of the release cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CacheState {
    Empty,
    Populated {
        cached_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    },
}

/// Debug report of the update system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub current_version: String,
    /// `None` when the latest release could not be fetched.
    pub latest_version: Option<String>,
    pub update_available: bool,
    pub package_available: bool,
    pub repository: String,
    pub token: TokenStatus,
    pub cache: CacheState,
}
