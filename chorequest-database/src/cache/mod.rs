mod redis_store;

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use redis_store::RedisCacheStore;

/// Profiles change on every task toggle, so keep them short-lived.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(60);
/// Reward lists only change through the parents' panel.
pub const REWARDS_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

#[derive(Clone, Debug)]
enum CacheBackend {
    /// Stores nothing: every read misses and writes are dropped.
    Disabled,
    Redis(RedisCacheStore),
}

#[derive(Clone, Debug)]
pub struct CacheService {
    key_prefix: String,
    backend: CacheBackend,
}

impl CacheService {
    pub fn disabled(prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Disabled,
        }
    }

    pub fn redis(redis_url: &str, prefix: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            key_prefix: prefix.into(),
            backend: CacheBackend::Redis(RedisCacheStore::from_url(redis_url)?),
        })
    }

    pub fn is_redis_enabled(&self) -> bool {
        matches!(self.backend, CacheBackend::Redis(_))
    }

    pub fn key(&self, suffix: impl AsRef<str>) -> String {
        format!("{}:{}", self.key_prefix, suffix.as_ref())
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled => Ok(()),
            CacheBackend::Redis(store) => store.ping().await,
        }
    }

    pub async fn get_json<T>(&self, key: &str) -> anyhow::Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let value = match &self.backend {
            CacheBackend::Disabled => Ok(None),
            CacheBackend::Redis(store) => store.get(key).await,
        }?;

        value
            .map(|bytes| {
                serde_json::from_slice(&bytes).map_err(|e| {
                    anyhow::anyhow!("failed to deserialize cache value for `{key}`: {e}")
                })
            })
            .transpose()
    }

    pub async fn set_json<T>(&self, key: &str, value: &T, ttl: Duration) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        let ttl_seconds = ttl.as_secs().max(1);
        let payload = serde_json::to_vec(value)
            .map_err(|e| anyhow::anyhow!("failed to serialize cache value for `{key}`: {e}"))?;

        match &self.backend {
            CacheBackend::Disabled => Ok(()),
            CacheBackend::Redis(store) => store.set(key, payload, ttl_seconds).await,
        }
    }

    pub async fn del(&self, key: &str) -> anyhow::Result<()> {
        match &self.backend {
            CacheBackend::Disabled => Ok(()),
            CacheBackend::Redis(store) => store.del(key).await,
        }
    }

    /// Read through the cache. Cache failures are logged and fall back to
    /// `loader`; loader failures propagate.
    pub async fn get_or_load_json<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> anyhow::Result<T>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        match self.get_json::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(?e, cache_key = key, "cache get failed; falling back to database"),
        }

        let loaded = loader().await?;

        if let Err(e) = self.set_json(key, &loaded, ttl).await {
            warn!(?e, cache_key = key, "cache set failed; returning database value");
        }

        Ok(loaded)
    }

    /// Drop a key, logging instead of failing: a stale entry expires on its own.
    pub async fn invalidate(&self, key: &str) {
        if let Err(e) = self.del(key).await {
            warn!(?e, cache_key = key, "cache invalidation failed");
        }
    }
}

pub fn profile_key(cache: &CacheService, user_id: u64) -> String {
    cache.key(format!("profile:{user_id}"))
}

pub fn rewards_key(cache: &CacheService, user_id: u64) -> String {
    cache.key(format!("rewards:{user_id}"))
}

pub async fn invalidate_profile(cache: &CacheService, user_id: u64) {
    cache.invalidate(&profile_key(cache, user_id)).await;
}

pub async fn invalidate_rewards(cache: &CacheService, user_id: u64) {
    cache.invalidate(&rewards_key(cache, user_id)).await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{CacheService, profile_key, rewards_key};

    #[test]
    fn keys_are_prefixed() {
        let cache = CacheService::disabled("chorequest:test");
        assert_eq!(profile_key(&cache, 42), "chorequest:test:profile:42");
        assert_eq!(rewards_key(&cache, 7), "chorequest:test:rewards:7");
        assert!(!cache.is_redis_enabled());
    }

    #[tokio::test]
    async fn disabled_cache_always_loads() {
        let cache = CacheService::disabled("chorequest:test");
        let value: u64 = cache
            .get_or_load_json("k", Duration::from_secs(5), || async { Ok(9) })
            .await
            .unwrap();
        assert_eq!(value, 9);
        assert_eq!(cache.get_json::<u64>("k").await.unwrap(), None);
    }
}
