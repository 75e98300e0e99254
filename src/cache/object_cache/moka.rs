use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

#[derive(Clone)]
struct CachedEntry {
    value: String,
    ttl: u64,
}

/// 按条目 TTL 过期，TTL 为 0 的条目使用默认值
struct EntryExpiry {
    default_ttl: u64,
}

impl Expiry<String, CachedEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        let ttl = if value.ttl == 0 {
            self.default_ttl
        } else {
            value.ttl
        };
        Some(Duration::from_secs(ttl))
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, CachedEntry>,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Ok(Self::with_settings(
            config.cache.memory.max_capacity,
            config.cache.default_ttl,
        ))
    }

    pub fn with_settings(max_capacity: u64, default_ttl: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(EntryExpiry { default_ttl })
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default ttl: {}s",
            max_capacity, default_ttl
        );
        Self { inner }
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(entry) => CacheResult::Found(entry.value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        self.inner.insert(key, CachedEntry { value, ttl }).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache
            .insert_raw("user:1".to_string(), "{}".to_string(), 0)
            .await;
        assert_eq!(cache.get_raw("user:1").await, CacheResult::Found("{}".into()));

        cache.remove("user:1").await;
        assert_eq!(cache.get_raw("user:1").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_typed_helpers() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        crate::cache::insert_json(&cache, "roles".to_string(), &vec!["student"], 0).await;
        let roles: Option<Vec<String>> = crate::cache::get_json(&cache, "roles").await;
        assert_eq!(roles, Some(vec!["student".to_string()]));

        cache
            .insert_raw("broken".to_string(), "not json".to_string(), 0)
            .await;
        let broken: Option<Vec<String>> = crate::cache::get_json(&cache, "broken").await;
        assert!(broken.is_none());
        assert_eq!(cache.get_raw("broken").await, CacheResult::NotFound);
    }
}
