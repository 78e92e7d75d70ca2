//! Update checking against published releases.
//!
//! This module provides:
//! - Version normalization and numeric comparison
//! - Release API documents and the [`ReleaseInfo`] value built from them
//! - The cached [`ReleaseUpdateChecker`]
//! - Records handed to the host update pipeline

pub mod checker;
pub mod metadata;
pub mod release;
pub mod version;

pub use checker::{is_update_available, ReleaseUpdateChecker, ACCEPT_HEADER};
pub use metadata::{
    CacheState, InformationSections, OfferSections, PluginInformation, TokenStatus, UpdateOffer,
    UpdateStatus,
};
pub use release::{GitHubRelease, ReleaseAsset, ReleaseInfo};
pub use version::{compare_versions, is_newer_version, normalize_tag, VERSION};
