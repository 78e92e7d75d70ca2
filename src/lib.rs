//! plugin-updater - Release update checking for installed plugins.
//!
//! Looks up the latest published release of a plugin on a release API,
//! caches it for a configurable TTL and answers a host's update pipeline:
//! whether an update is available, what package to download and what to
//! show in the package information view.
//!
//! # Modules
//!
//! - [`cache`] - Expiring key-value stores and time sources
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and saved settings
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Release API transport
//! - [`host`] - Host update pipeline events
//! - [`ui`] - Terminal output and spinners
//! - [`updates`] - Version comparison and the release update checker
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use plugin_updater::cache::MemoryStore;
//! use plugin_updater::config::UpdaterConfig;
//! use plugin_updater::fetch::MockTransport;
//! use plugin_updater::updates::ReleaseUpdateChecker;
//!
//! let transport = MockTransport::new();
//! transport.respond_with(200, r#"{"tag_name": "v9.0.0", "assets": []}"#);
//!
//! let checker = ReleaseUpdateChecker::new(
//!     UpdaterConfig::default(),
//!     transport,
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let offer = checker.update_offer().unwrap();
//! assert_eq!(offer.new_version, "9.0.0");
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod host;
pub mod ui;
pub mod updates;

pub use error::{Result, UpdaterError};
