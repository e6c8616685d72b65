//! Repository trait for category data access.

use crate::domain::entities::Category;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the category set.
///
/// Categories are few and appear on every page (sidebar navigation,
/// homepage shelves), so this is a plain read surface with no
/// pagination. Backed by
/// [`crate::infrastructure::persistence::PgCategoryRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, in display order (ascending id).
    async fn list_all(&self) -> Result<Vec<Category>, AppError>;

    /// One category, or `None` when the id matches nothing.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;
}
