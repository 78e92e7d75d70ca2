//! Expiring cache for release lookups.
//!
//! This module provides the [`ExpiringStore`] abstraction with in-memory and
//! on-disk implementations, plus an injectable [`Clock`] so expiry can be
//! driven deterministically in tests.

pub mod clock;
pub mod entry;
pub mod file;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use file::FileStore;
pub use store::{get_value, set_value, ExpiringStore, MemoryStore};

/// Get the default cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("plugin-updater")
}
