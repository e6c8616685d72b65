//! Page cache: [`RedisCache`] in production, [`MemoryCache`] when no
//! Redis is configured.

mod memory_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
