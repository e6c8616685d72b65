//! Redis-backed page cache.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Namespace for page cache keys, keeping them apart from the activity
/// store entries sharing the same Redis database.
const KEY_PREFIX: &str = "page:";

/// Shared-connection Redis cache for composed page content.
///
/// `ConnectionManager` multiplexes one connection and reconnects on
/// failure, so clones are cheap and the cache can be shared freely.
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    /// Opens the connection and verifies it with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] when the URL does not parse
    /// or Redis is unreachable.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;
        let mut connection = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Redis unreachable: {e}")))?;

        connection
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("✓ Connected to Redis page cache");
        Ok(Self { connection })
    }
}

fn namespaced(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection.clone();
        match conn.get::<_, Option<String>>(namespaced(key)).await {
            Ok(hit) => {
                debug!(key, hit = hit.is_some(), "page cache read");
                Ok(hit)
            }
            Err(e) => {
                warn!("page cache read for '{key}' failed, treating as miss: {e}");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.connection.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(namespaced(key), value, ttl_seconds)
            .await
        {
            warn!("page cache write for '{key}' failed: {e}");
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.connection.clone().ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(namespaced("index"), "page:index");
    }
}
