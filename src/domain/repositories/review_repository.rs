//! Repository trait for customer review data access.

use crate::domain::entities::Review;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to product reviews.
///
/// Reviews live on order lines written by the checkout pipeline; the
/// catalog only ever reads them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Reviews for one SKU, newest first. Order lines with an empty
    /// comment are not reviews and are skipped.
    async fn list_for_sku(&self, sku_id: i64) -> Result<Vec<Review>, AppError>;
}
