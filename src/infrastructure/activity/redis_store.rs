//! Redis-backed per-user activity store.

use crate::domain::repositories::activity_store::{ActivityStore, MAX_RECENT_VIEWS};
use crate::domain::visitor::UserId;
use crate::error::AppError;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis activity store.
///
/// Shares its keyspace with the cart service: carts are hashes under
/// `cart_{user_id}` (field = SKU id, value = quantity) and view history
/// is a list under `history_{user_id}`, most recent first.
pub struct RedisActivityStore {
    client: ConnectionManager,
}

impl RedisActivityStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the URL is invalid or the
    /// connection cannot be established.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|e| AppError::internal(format!("Failed to create Redis client: {e}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::internal(format!("Failed to connect to Redis: {e}")))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| AppError::internal(format!("Redis PING failed: {e}")))?;

        info!("✓ Connected to Redis activity store");

        Ok(Self { client: manager })
    }
}

fn cart_key(user_id: UserId) -> String {
    format!("cart_{user_id}")
}

fn history_key(user_id: UserId) -> String {
    format!("history_{user_id}")
}

#[async_trait]
impl ActivityStore for RedisActivityStore {
    async fn cart_count(&self, user_id: UserId) -> Result<u64, AppError> {
        let mut conn = self.client.clone();
        // HLEN of a missing key is 0, which is exactly the empty-cart case.
        conn.hlen::<_, u64>(&cart_key(user_id))
            .await
            .map_err(|e| AppError::internal(format!("Redis HLEN failed: {e}")))
    }

    async fn record_view(&self, user_id: UserId, sku_id: i64) -> Result<(), AppError> {
        let key = history_key(user_id);
        let mut conn = self.client.clone();

        // Remove-push-trim must be one atomic unit, otherwise two
        // concurrent views of the same SKU can leave a duplicate behind.
        redis::pipe()
            .atomic()
            .lrem(&key, 0, sku_id)
            .ignore()
            .lpush(&key, sku_id)
            .ignore()
            .ltrim(&key, 0, MAX_RECENT_VIEWS as isize - 1)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| AppError::internal(format!("Redis history update failed: {e}")))?;

        debug!("Recorded view of SKU {} for user {}", sku_id, user_id);
        Ok(())
    }

    async fn recent_views(&self, user_id: UserId) -> Result<Vec<i64>, AppError> {
        let mut conn = self.client.clone();
        conn.lrange::<_, Vec<i64>>(&history_key(user_id), 0, -1)
            .await
            .map_err(|e| AppError::internal(format!("Redis LRANGE failed: {e}")))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
