//! Cache entry type.

use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UpdaterError};

/// A cached value with its expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached value.
    pub value: T,
    /// When this entry was cached.
    pub cached_at: DateTime<Utc>,
    /// When the cached entry expires.
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// Create an entry cached at `now` that lives for `ttl`.
    ///
    /// An expiry past the representable range is clamped to the latest instant.
    pub fn new(value: T, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            value,
            cached_at: now,
            expires_at: now
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Check if the entry has expired at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

impl<T: Serialize> CacheEntry<T> {
    /// Convert into the untyped form stores persist.
    pub fn to_json(&self) -> Result<CacheEntry<serde_json::Value>> {
        let value = serde_json::to_value(&self.value).map_err(|e| UpdaterError::Cache {
            message: format!("Failed to serialize cache value: {}", e),
        })?;

        Ok(CacheEntry {
            value,
            cached_at: self.cached_at,
            expires_at: self.expires_at,
        })
    }
}

impl CacheEntry<serde_json::Value> {
    /// Decode the stored value into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<CacheEntry<T>> {
        let value = serde_json::from_value(self.value).map_err(|e| UpdaterError::Cache {
            message: format!("Failed to decode cache value: {}", e),
        })?;

        Ok(CacheEntry {
            value,
            cached_at: self.cached_at,
            expires_at: self.expires_at,
        })
    }
}
