//! In-process activity store for deployments without Redis.

use crate::domain::repositories::activity_store::{ActivityStore, MAX_RECENT_VIEWS};
use crate::domain::visitor::UserId;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local activity store.
///
/// Mirrors the Redis semantics closely enough for local development and
/// tests: history is deduplicated, front-inserted and capped, and a
/// user without a cart record has a count of zero.
#[derive(Default)]
pub struct MemoryActivityStore {
    carts: Mutex<HashMap<UserId, u64>>,
    views: Mutex<HashMap<UserId, Vec<i64>>>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a cart size for a user.
    ///
    /// The cart itself belongs to the cart service; in-process
    /// deployments have no such writer, so local tooling and tests seed
    /// counts through this hook.
    pub fn set_cart_count(&self, user_id: UserId, count: u64) {
        self.carts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(user_id, count);
    }
}

#[async_trait]
impl ActivityStore for MemoryActivityStore {
    async fn cart_count(&self, user_id: UserId) -> Result<u64, AppError> {
        let carts = self.carts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(carts.get(&user_id).copied().unwrap_or(0))
    }

    async fn record_view(&self, user_id: UserId, sku_id: i64) -> Result<(), AppError> {
        let mut views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        let history = views.entry(user_id).or_default();
        history.retain(|&id| id != sku_id);
        history.insert(0, sku_id);
        history.truncate(MAX_RECENT_VIEWS);
        Ok(())
    }

    async fn recent_views(&self, user_id: UserId) -> Result<Vec<i64>, AppError> {
        let views = self.views.lock().unwrap_or_else(|e| e.into_inner());
        Ok(views.get(&user_id).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cart_count_defaults_to_zero() {
        let store = MemoryActivityStore::new();
        assert_eq!(store.cart_count(7).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cart_count_reads_seeded_value() {
        let store = MemoryActivityStore::new();
        store.set_cart_count(7, 3);
        assert_eq!(store.cart_count(7).await.unwrap(), 3);
        assert_eq!(store.cart_count(8).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_record_view_orders_most_recent_first() {
        let store = MemoryActivityStore::new();
        store.record_view(7, 1).await.unwrap();
        store.record_view(7, 2).await.unwrap();
        store.record_view(7, 3).await.unwrap();
        assert_eq!(store.recent_views(7).await.unwrap(), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_record_view_moves_repeat_to_front_without_duplicate() {
        let store = MemoryActivityStore::new();
        for sku in [1, 2, 3] {
            store.record_view(7, sku).await.unwrap();
        }
        store.record_view(7, 1).await.unwrap();
        assert_eq!(store.recent_views(7).await.unwrap(), vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_record_view_caps_history_length() {
        let store = MemoryActivityStore::new();
        for sku in 1..=8 {
            store.record_view(7, sku).await.unwrap();
        }
        let views = store.recent_views(7).await.unwrap();
        assert_eq!(views.len(), MAX_RECENT_VIEWS);
        assert_eq!(views, vec![8, 7, 6, 5, 4]);
    }

    #[tokio::test]
    async fn test_histories_are_per_user() {
        let store = MemoryActivityStore::new();
        store.record_view(7, 1).await.unwrap();
        store.record_view(8, 2).await.unwrap();
        assert_eq!(store.recent_views(7).await.unwrap(), vec![1]);
        assert_eq!(store.recent_views(8).await.unwrap(), vec![2]);
    }
}
