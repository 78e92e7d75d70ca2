//! On-disk store: one JSON file per key.

use anyhow::Context;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::entry::CacheEntry;
use super::store::ExpiringStore;

/// Store that persists entries as JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Root directory for cache files.
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;
        Ok(())
    }

    /// Get the file path for a key.
    pub fn entry_path(&self, key: &str) -> PathBuf {
        let hash = Sha256::digest(key.as_bytes());
        let hash_str = hex::encode(&hash[..16]);
        self.root.join(hash_str).with_extension("json")
    }
}

impl ExpiringStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<CacheEntry<serde_json::Value>>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file {:?}", path))?;

        match serde_json::from_str(&json) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                tracing::debug!("Ignoring corrupt cache file {:?}: {}", path, e);
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, entry: CacheEntry<serde_json::Value>) -> Result<()> {
        self.ensure_dir()?;

        let path = self.entry_path(key);
        let json = serde_json::to_string_pretty(&entry)
            .with_context(|| format!("Failed to serialize cache entry '{}'", key))?;
        fs::write(&path, json).with_context(|| format!("Failed to write cache file {:?}", path))?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove cache file {:?}", path))?;
        Ok(true)
    }
}
