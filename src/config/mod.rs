//! Configuration for the update checker.
//!
//! - [`schema`] - [`UpdaterConfig`] and its compiled-in defaults
//! - [`loader`] - YAML file discovery and parsing
//! - [`settings`] - persisted administrator settings (access token)

pub mod loader;
pub mod schema;
pub mod settings;

pub use loader::{config_dir, default_config_path, load_config, load_config_file};
pub use schema::{
    Compatibility, PluginMetadata, UpdaterConfig, DEFAULT_CACHE_TTL_SECS, DEFAULT_TIMEOUT_SECS,
    MAX_CACHE_TTL_SECS,
    RELEASE_CACHE_KEY,
};
pub use settings::{token_preview, Settings};
