//! Store trait for per-user activity: cart size and view history.

use crate::domain::visitor::UserId;
use crate::error::AppError;
use async_trait::async_trait;

/// Maximum number of SKUs kept in a user's recently-viewed history.
pub const MAX_RECENT_VIEWS: usize = 5;

/// Fast per-user key-value state shared with the cart service.
///
/// The cart itself is owned by the cart/checkout modules; the browsing
/// surface only reads its size for the header badge. View history is
/// owned here. Unreachable-store failures surface as
/// [`AppError::Internal`].
///
/// Production uses [`crate::infrastructure::activity::RedisActivityStore`];
/// [`crate::infrastructure::activity::MemoryActivityStore`] covers
/// deployments without Redis.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Number of distinct SKUs in the user's cart.
    ///
    /// A user with no cart record has zero entries, not an error.
    async fn cart_count(&self, user_id: UserId) -> Result<u64, AppError>;

    /// Records that the user viewed a SKU.
    ///
    /// The history is deduplicated and capped: any earlier occurrence of
    /// `sku_id` is removed, the SKU moves to the front, and the list is
    /// trimmed to [`MAX_RECENT_VIEWS`] entries. The three steps are
    /// applied atomically so concurrent views cannot leave duplicates
    /// behind.
    async fn record_view(&self, user_id: UserId, sku_id: i64) -> Result<(), AppError>;

    /// The user's recently-viewed SKU ids, most recent first.
    async fn recent_views(&self, user_id: UserId) -> Result<Vec<i64>, AppError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn health_check(&self) -> bool;
}
