//! Persisted cache entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the day cache as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry {
    /// Expiration instant in epoch milliseconds
    pub expiration: i64,
    /// Human-readable expiration, informational only
    #[serde(default)]
    pub comment: String,
    pub item: Value,
}

impl CacheEntry {
    pub fn new(item: Value, expires_at: DateTime<Utc>) -> Self {
        Self {
            expiration: expires_at.timestamp_millis(),
            comment: expires_at.to_rfc2822(),
            item,
        }
    }

    /// An entry is fresh only while its expiration is strictly in the future.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration > now.timestamp_millis()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expiration)
    }
}
