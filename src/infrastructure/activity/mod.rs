//! Per-user activity storage: cart size and recently-viewed history.
//!
//! Provides two implementations of
//! [`crate::domain::repositories::ActivityStore`]:
//! - [`RedisActivityStore`] - Production store, sharing its keyspace
//!   with the cart service
//! - [`MemoryActivityStore`] - In-process fallback when Redis is not
//!   configured

mod memory_store;
mod redis_store;

pub use memory_store::MemoryActivityStore;
pub use redis_store::RedisActivityStore;
