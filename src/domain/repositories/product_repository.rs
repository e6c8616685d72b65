//! Repository trait for product SKU data access.

use crate::domain::entities::ProductSku;
use crate::error::AppError;
use async_trait::async_trait;

/// Sort order for a category listing.
///
/// Parsed leniently from the `?sort=` query parameter: anything other
/// than the two recognized keys falls back to [`SortKey::Default`], so
/// a mistyped URL still renders a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (descending id).
    #[default]
    Default,
    /// Cheapest first.
    Price,
    /// Best-selling first.
    Hot,
}

impl SortKey {
    /// Parses the raw query parameter value.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price") => SortKey::Price,
            Some("hot") => SortKey::Hot,
            _ => SortKey::Default,
        }
    }

    /// The canonical query-string value, echoed into pagination links.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Price => "price",
            SortKey::Hot => "hot",
        }
    }
}

/// Read access to sellable SKUs.
///
/// Every method maps database failures to [`AppError::Internal`]; a
/// lookup that matches nothing is `Ok(None)` or an empty `Vec`, never
/// an error. Backed by
/// [`crate::infrastructure::persistence::PgProductRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One SKU, or `None` when the id matches nothing.
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSku>, AppError>;

    /// Every SKU in a category, ordered by `sort`.
    ///
    /// The full listing is returned; pagination happens at the edge.
    /// Categories hold at most a few hundred SKUs, so this stays cheap.
    async fn list_by_category(
        &self,
        category_id: i64,
        sort: SortKey,
    ) -> Result<Vec<ProductSku>, AppError>;

    /// The most recently added SKUs in a category, newest first.
    async fn list_newest_by_category(
        &self,
        category_id: i64,
        limit: i64,
    ) -> Result<Vec<ProductSku>, AppError>;

    /// Sibling SKUs of a product group, excluding the one currently
    /// being viewed.
    async fn list_same_group(
        &self,
        group_id: i64,
        exclude_sku_id: i64,
    ) -> Result<Vec<ProductSku>, AppError>;
}
