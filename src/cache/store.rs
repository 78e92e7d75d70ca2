//! Expiring key-value stores.

use chrono::Duration;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Result, UpdaterError};

use super::clock::Clock;
use super::entry::CacheEntry;

/// A key-value store whose entries carry an expiry.
///
/// Stores hold untyped JSON entries; use [`get_value`] and [`set_value`]
/// for typed access with expiry applied.
pub trait ExpiringStore: Send + Sync {
    /// Load the entry for `key`, expired or not.
    fn get(&self, key: &str) -> Result<Option<CacheEntry<serde_json::Value>>>;

    /// Store an entry, replacing any previous entry for `key`.
    fn set(&self, key: &str, entry: CacheEntry<serde_json::Value>) -> Result<()>;

    /// Remove the entry for `key`. Returns whether anything was removed.
    fn delete(&self, key: &str) -> Result<bool>;
}

/// Read a live value of type `T` for `key`.
///
/// Expired entries and entries that no longer decode as `T` read as a miss.
pub fn get_value<T: DeserializeOwned>(
    store: &dyn ExpiringStore,
    clock: &dyn Clock,
    key: &str,
) -> Result<Option<CacheEntry<T>>> {
    let Some(entry) = store.get(key)? else {
        return Ok(None);
    };

    if entry.is_expired(clock.now()) {
        tracing::debug!("Cache entry '{}' expired at {}", key, entry.expires_at);
        return Ok(None);
    }

    match entry.decode() {
        Ok(entry) => Ok(Some(entry)),
        Err(e) => {
            tracing::debug!("Ignoring unreadable cache entry '{}': {}", key, e);
            Ok(None)
        }
    }
}

/// Store `value` under `key` for `ttl`.
pub fn set_value<T: Serialize>(
    store: &dyn ExpiringStore,
    clock: &dyn Clock,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<CacheEntry<serde_json::Value>> {
    let entry = CacheEntry::new(value, clock.now(), ttl).to_json()?;
    store.set(key, entry.clone())?;
    Ok(entry)
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry<serde_json::Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> UpdaterError {
    UpdaterError::Cache {
        message: "memory store lock poisoned".to_string(),
    }
}

impl ExpiringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<CacheEntry<serde_json::Value>>> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, entry: CacheEntry<serde_json::Value>) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        Ok(entries.remove(key).is_some())
    }
}

impl<S: ExpiringStore + ?Sized> ExpiringStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<CacheEntry<serde_json::Value>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, entry: CacheEntry<serde_json::Value>) -> Result<()> {
        (**self).set(key, entry)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    fn payload() -> Payload {
        Payload {
            name: "widget".to_string(),
            count: 3,
        }
    }

    #[test]
    fn store_and_load() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &payload(), Duration::hours(1)).unwrap();
        let loaded: CacheEntry<Payload> = get_value(&store, &clock, "key").unwrap().unwrap();

        assert_eq!(loaded.value, payload());
    }

    #[test]
    fn load_nonexistent_returns_none() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        let loaded: Option<CacheEntry<Payload>> = get_value(&store, &clock, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn expired_entry_reads_as_miss() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &payload(), Duration::hours(1)).unwrap();
        clock.advance(Duration::hours(1));

        let loaded: Option<CacheEntry<Payload>> = get_value(&store, &clock, "key").unwrap();
        assert!(loaded.is_none());
        // The raw entry is still there until replaced or deleted
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_replaces_previous_entry() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &payload(), Duration::hours(1)).unwrap();
        let newer = Payload {
            name: "gadget".to_string(),
            count: 7,
        };
        set_value(&store, &clock, "key", &newer, Duration::hours(1)).unwrap();

        let loaded: CacheEntry<Payload> = get_value(&store, &clock, "key").unwrap().unwrap();
        assert_eq!(loaded.value, newer);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn undecodable_entry_reads_as_miss() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &"just a string", Duration::hours(1)).unwrap();
        let loaded: Option<CacheEntry<Payload>> = get_value(&store, &clock, "key").unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn delete_entry() {
        let store = MemoryStore::new();
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &payload(), Duration::hours(1)).unwrap();

        assert!(store.delete("key").unwrap());
        assert!(!store.delete("key").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn shared_store_through_arc() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let clock = ManualClock::default();

        set_value(&store, &clock, "key", &payload(), Duration::hours(1)).unwrap();
        assert_eq!(store.len(), 1);
    }
}
