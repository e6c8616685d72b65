//! Per-visitor activity service: cart badge and view history.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::Visitor;
use crate::domain::repositories::ActivityStore;
use crate::error::AppError;

/// Service wrapping the activity store with visitor-awareness.
///
/// Anonymous visitors never reach the store: their cart badge is zero
/// and their views are not recorded. Store failures degrade the same
/// way, a page must never fail because the badge could not be read.
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    /// Number of distinct SKUs in the visitor's cart.
    ///
    /// Anonymous visitors and store failures both read as zero.
    pub async fn cart_count(&self, visitor: Visitor) -> u64 {
        match visitor {
            Visitor::Anonymous => 0,
            Visitor::Authenticated(user_id) => match self.store.cart_count(user_id).await {
                Ok(count) => count,
                Err(e) => {
                    error!("Cart count failed for user {user_id}: {e}");
                    0
                }
            },
        }
    }

    /// Records a product view in the visitor's history.
    ///
    /// A no-op for anonymous visitors. Failures are logged and
    /// swallowed, history is best-effort.
    pub async fn record_view(&self, visitor: Visitor, sku_id: i64) {
        match visitor {
            Visitor::Anonymous => {
                debug!("Anonymous view of SKU {sku_id}, not recorded");
            }
            Visitor::Authenticated(user_id) => {
                if let Err(e) = self.store.record_view(user_id, sku_id).await {
                    error!("Failed to record view of SKU {sku_id} for user {user_id}: {e}");
                }
            }
        }
    }

    /// The visitor's recently-viewed SKU ids, most recent first.
    ///
    /// Anonymous visitors have no history.
    pub async fn recent_views(&self, visitor: Visitor) -> Result<Vec<i64>, AppError> {
        match visitor {
            Visitor::Anonymous => Ok(Vec::new()),
            Visitor::Authenticated(user_id) => self.store.recent_views(user_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockActivityStore;

    #[tokio::test]
    async fn test_cart_count_anonymous_is_zero_without_store_call() {
        let mut store = MockActivityStore::new();
        store.expect_cart_count().times(0);

        let service = ActivityService::new(Arc::new(store));
        assert_eq!(service.cart_count(Visitor::Anonymous).await, 0);
    }

    #[tokio::test]
    async fn test_cart_count_authenticated_reads_store() {
        let mut store = MockActivityStore::new();
        store
            .expect_cart_count()
            .withf(|&user_id| user_id == 42)
            .times(1)
            .returning(|_| Ok(3));

        let service = ActivityService::new(Arc::new(store));
        assert_eq!(service.cart_count(Visitor::Authenticated(42)).await, 3);
    }

    #[tokio::test]
    async fn test_cart_count_store_failure_degrades_to_zero() {
        let mut store = MockActivityStore::new();
        store
            .expect_cart_count()
            .times(1)
            .returning(|_| Err(AppError::internal("redis down")));

        let service = ActivityService::new(Arc::new(store));
        assert_eq!(service.cart_count(Visitor::Authenticated(42)).await, 0);
    }

    #[tokio::test]
    async fn test_record_view_anonymous_skips_store() {
        let mut store = MockActivityStore::new();
        store.expect_record_view().times(0);

        let service = ActivityService::new(Arc::new(store));
        service.record_view(Visitor::Anonymous, 101).await;
    }

    #[tokio::test]
    async fn test_record_view_authenticated_writes_store() {
        let mut store = MockActivityStore::new();
        store
            .expect_record_view()
            .withf(|&user_id, &sku_id| user_id == 42 && sku_id == 101)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ActivityService::new(Arc::new(store));
        service.record_view(Visitor::Authenticated(42), 101).await;
    }

    #[tokio::test]
    async fn test_record_view_swallows_store_failure() {
        let mut store = MockActivityStore::new();
        store
            .expect_record_view()
            .times(1)
            .returning(|_, _| Err(AppError::internal("redis down")));

        let service = ActivityService::new(Arc::new(store));
        // Must not panic or propagate.
        service.record_view(Visitor::Authenticated(42), 101).await;
    }

    #[tokio::test]
    async fn test_recent_views_anonymous_is_empty() {
        let mut store = MockActivityStore::new();
        store.expect_recent_views().times(0);

        let service = ActivityService::new(Arc::new(store));
        assert!(
            service
                .recent_views(Visitor::Anonymous)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
