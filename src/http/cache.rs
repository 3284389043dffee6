//! In-memory GET response cache
//!
//! Entries are keyed by method, full URL and sorted query parameters and live
//! for a fixed time window. There is no size bound; expired entries are
//! dropped when they are looked up.

use reqwest::Method;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default lifetime of a cached response
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    stored_at: Instant,
    body: Value,
}

/// Time-bounded response cache
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Create a cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Entry lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Build the cache key for a request
    pub fn key(method: &Method, url: &str, query: &BTreeMap<String, String>) -> String {
        if query.is_empty() {
            return format!("{method} {url}");
        }
        let params = query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{method} {url}{sep}{params}")
    }

    /// Look up a live entry
    pub async fn get(&self, key: &str) -> Option<Value> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.body.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired
        self.entries.write().await.remove(key);
        None
    }

    /// Store a response body
    pub async fn insert(&self, key: String, body: Value) {
        self.entries.write().await.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                body,
            },
        );
    }

    /// Drop the entry for `prefix` and every entry below it
    ///
    /// Matches whole path segments only: `/playlists/p1` covers
    /// `/playlists/p1/tracks` and `/playlists/p1?market=SE` but not
    /// `/playlists/p10`.
    pub async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !is_under(key, prefix));
        before - entries.len()
    }

    /// Drop all entries
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, live or not yet swept
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

fn is_under(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}

#[cfg(test)]
mod cache_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_sorts_query() {
        let mut query = BTreeMap::new();
        query.insert("offset".to_string(), "20".to_string());
        query.insert("limit".to_string(), "10".to_string());

        let key = ResponseCache::key(&Method::GET, "https://api/v1/me/playlists", &query);
        assert_eq!(key, "GET https://api/v1/me/playlists?limit=10&offset=20");
    }

    #[test]
    fn test_key_appends_to_existing_query() {
        let mut query = BTreeMap::new();
        query.insert("market".to_string(), "SE".to_string());

        let key = ResponseCache::key(&Method::GET, "https://api/v1/x?offset=5", &query);
        assert_eq!(key, "GET https://api/v1/x?offset=5&market=SE");
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ResponseCache::default();
        cache.insert("GET a".to_string(), json!({"id": 1})).await;

        assert_eq!(cache.get("GET a").await, Some(json!({"id": 1})));
        assert_eq!(cache.get("GET b").await, None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_dropped() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("GET a".to_string(), json!(1)).await;

        assert_eq!(cache.get("GET a").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalidate_prefix() {
        let cache = ResponseCache::default();
        cache
            .insert("GET https://api/v1/playlists/p1".to_string(), json!(1))
            .await;
        cache
            .insert("GET https://api/v1/playlists/p1/tracks?limit=50".to_string(), json!(2))
            .await;
        cache
            .insert("GET https://api/v1/tracks/t1".to_string(), json!(3))
            .await;

        let removed = cache
            .invalidate_prefix("GET https://api/v1/playlists/p1")
            .await;
        assert_eq!(removed, 2);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_invalidate_prefix_matches_whole_segments() {
        let cache = ResponseCache::default();
        for key in [
            "GET https://api/v1/playlists/p1?market=SE",
            "GET https://api/v1/playlists/p10",
            "GET https://api/v1/playlists/p10/tracks",
            "GET https://api/v1/playlists/p1x?limit=5",
        ] {
            cache.insert(key.to_string(), json!(key)).await;
        }

        let removed = cache
            .invalidate_prefix("GET https://api/v1/playlists/p1")
            .await;
        assert_eq!(removed, 1);
        assert!(cache
            .get("GET https://api/v1/playlists/p10/tracks")
            .await
            .is_some());
        assert!(cache.get("GET https://api/v1/playlists/p1x?limit=5").await.is_some());
    }
}
