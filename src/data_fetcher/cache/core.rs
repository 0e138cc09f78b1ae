use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::CacheEntry;
use crate::error::AppError;

/// Key to entry store backed by a single JSON document.
///
/// The document is read once when the cache is constructed and rewritten in
/// full on every [`DurableCache::set`]. Expired entries are only dropped at
/// load time; lookups treat them as absent.
#[derive(Debug)]
pub struct DurableCache {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, CacheEntry>>,
}

impl DurableCache {
    /// Creates an empty cache that persists to `path` on the first write.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Loads the cache document at `path`, dropping entries expired by now.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        Self::load_at(path, Utc::now()).await
    }

    /// Loads the cache document at `path`, dropping entries expired at `now`.
    ///
    /// A missing, unreadable or unparsable document yields an empty cache.
    pub async fn load_at(path: impl Into<PathBuf>, now: DateTime<Utc>) -> Self {
        let path = path.into();

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No cache file at {}, starting with an empty cache", path.display());
                return Self::empty(path);
            }
            Err(e) => {
                warn!("{}", AppError::cache_load(path.display().to_string(), e.to_string()));
                return Self::empty(path);
            }
        };

        let mut entries: BTreeMap<String, CacheEntry> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{}", AppError::cache_load(path.display().to_string(), e.to_string()));
                return Self::empty(path);
            }
        };

        let loaded = entries.len();
        entries.retain(|_, entry| entry.is_fresh_at(now));
        debug!(
            "Loaded {} cache entries, pruned {} expired",
            entries.len(),
            loaded - entries.len()
        );

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Returns the payload for `key` if it exists and has not expired at `now`.
    pub async fn get(&self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.is_fresh_at(now))
            .map(|entry| entry.item.clone())
    }

    /// Returns true if `key` exists and has not expired at `now`.
    pub async fn is_fresh(&self, key: &str, now: DateTime<Utc>) -> bool {
        let entries = self.entries.read().await;
        entries.get(key).is_some_and(|entry| entry.is_fresh_at(now))
    }

    /// Expiration of the entry for `key`, expired or not.
    pub async fn expiration(&self, key: &str) -> Option<DateTime<Utc>> {
        let entries = self.entries.read().await;
        entries.get(key).and_then(CacheEntry::expires_at)
    }

    /// Stores `item` under `key` and rewrites the whole document.
    ///
    /// The in-memory entry is kept even when persisting fails.
    ///
    /// # Errors
    /// * `AppError::CacheWrite` - If the document could not be serialized or written
    #[instrument(skip(self, item))]
    pub async fn set(
        &self,
        key: &str,
        item: Value,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(item, expires_at));
        self.persist(&entries).await
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, CacheEntry>) -> Result<(), AppError> {
        let write_error =
            |message: String| AppError::cache_write(self.path.display().to_string(), message);

        let document =
            serde_json::to_string_pretty(entries).map_err(|e| write_error(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| write_error(e.to_string()))?;
        }

        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| write_error(e.to_string()))
    }
}
