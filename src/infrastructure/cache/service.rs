//! Page cache trait and error type.

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache connection failed: {0}")]
    Connection(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// String-keyed cache for composed page content.
///
/// Values are opaque to the cache; the homepage stores its composed
/// unit as JSON. Implementations are expected to fail open: a backend
/// problem surfaces as a miss (and a log line), never as an error page,
/// so `get` and `set` should reserve `Err` for situations the caller
/// can act on.
///
/// Implemented by [`super::RedisCache`] and, for deployments without
/// Redis, [`super::MemoryCache`].
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up a key. Expired and missing entries both read as `None`.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value for `ttl_seconds`, replacing any existing entry.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Liveness probe for the health endpoint.
    async fn health_check(&self) -> bool;
}
