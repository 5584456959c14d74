//! In-memory documentation cache with TTL-on-read.
//!
//! Payloads are stored serialized so a damaged entry can be detected and
//! refetched instead of being served. Entries are only ever replaced whole
//! under the write lock, so readers never see a partial entry.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::DocumentationPayload;
use crate::error::AppError;

/// Default validity window for a cached payload.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// A single cached payload.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Normalized property name
    pub key: String,
    /// Serialized `DocumentationPayload`
    pub payload: String,
    /// Monotonic insertion time, used for expiry
    pub stored_at: Instant,
    /// Wall-clock insertion time, for logs only
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }

    fn is_same_write(&self, other: &CacheEntry) -> bool {
        self.stored_at == other.stored_at && self.payload == other.payload
    }
}

/// Shared documentation cache.
///
/// Construct once per process and share through an `Arc`.
#[derive(Debug)]
pub struct DocCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for DocCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl DocCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh payload for `key`. Expired or corrupted entries count as misses.
    pub async fn get(&self, key: &str) -> Option<DocumentationPayload> {
        let entry = self.entries.read().await.get(key).cloned()?;

        if entry.is_expired(self.ttl) {
            debug!("Cache entry '{}' expired (fetched at {})", key, entry.fetched_at);
            return None;
        }

        match serde_json::from_str::<DocumentationPayload>(&entry.payload) {
            Ok(payload) => Some(payload),
            Err(e) => {
                let err = AppError::CacheCorruption {
                    key: key.to_string(),
                    reason: e.to_string(),
                };
                warn!("{}; treating as a miss", err);
                self.evict_if_unchanged(&entry).await;
                None
            }
        }
    }

    /// Store `payload` under `key`, stamped with the current time. Last write wins.
    pub async fn insert(&self, key: &str, payload: &DocumentationPayload) {
        match serde_json::to_string(payload) {
            Ok(serialized) => self.insert_raw(key, serialized).await,
            Err(e) => warn!("Failed to serialize payload for '{}': {}", key, e),
        }
    }

    pub(crate) async fn insert_raw(&self, key: &str, payload: String) {
        let entry = CacheEntry {
            key: key.to_string(),
            payload,
            stored_at: Instant::now(),
            fetched_at: Utc::now(),
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    /// Remove `stale` unless another write replaced it after it was read.
    async fn evict_if_unchanged(&self, stale: &CacheEntry) {
        let mut entries = self.entries.write().await;
        if entries.get(&stale.key).is_some_and(|current| current.is_same_write(stale)) {
            entries.remove(&stale.key);
        }
    }

    /// Raw entry for `key`, regardless of freshness.
    pub async fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::fallback;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = DocCache::default();
        let payload = fallback::static_payload("gap");
        cache.insert("gap", &payload).await;

        assert_eq!(cache.get("gap").await, Some(payload));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let cache = DocCache::default();
        assert!(cache.get("nonexistent").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_a_miss() {
        let cache = DocCache::new(Duration::from_secs(60));
        cache.insert("gap", &fallback::static_payload("gap")).await;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.get("gap").await.is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get("gap").await.is_none());
        // The stale entry stays until it is overwritten
        assert!(cache.entry("gap").await.is_some());
    }

    #[tokio::test]
    async fn test_corrupted_entry_is_dropped() {
        let cache = DocCache::default();
        cache.insert_raw("gap", "{not json".to_string()).await;

        assert!(cache.get("gap").await.is_none());
        assert!(cache.entry("gap").await.is_none());
    }

    #[tokio::test]
    async fn test_corruption_eviction_spares_newer_write() {
        let cache = DocCache::default();
        cache.insert_raw("gap", "{not json".to_string()).await;
        let corrupted = cache.entry("gap").await.unwrap();

        // A valid payload lands between the failed read and the eviction
        let payload = fallback::static_payload("gap");
        cache.insert("gap", &payload).await;
        cache.evict_if_unchanged(&corrupted).await;

        assert_eq!(cache.get("gap").await, Some(payload));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = DocCache::default();
        let mut first = fallback::static_payload("gap");
        first.description = "first".to_string();
        let mut second = first.clone();
        second.description = "second".to_string();

        cache.insert("gap", &first).await;
        cache.insert("gap", &second).await;
        assert_eq!(cache.get("gap").await.map(|p| p.description), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = DocCache::default();
        cache.insert("a", &fallback::static_payload("a")).await;
        cache.insert("b", &fallback::static_payload("b")).await;
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
