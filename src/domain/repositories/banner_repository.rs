//! Repository trait for homepage banner data access.

use crate::domain::entities::{CarouselBanner, PromotionBanner, ShelfBanner, ShelfBannerKind};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the curated homepage merchandising slots.
///
/// Every method returns rows sorted by `display_index` ascending, which
/// is the order they appear on the page. Backed by
/// [`crate::infrastructure::persistence::PgBannerRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// The homepage carousel slides.
    async fn carousel_banners(&self) -> Result<Vec<CarouselBanner>, AppError>;

    /// The promotion tiles next to the carousel.
    async fn promotion_banners(&self) -> Result<Vec<PromotionBanner>, AppError>;

    /// One category's shelf placements of the given kind.
    async fn shelf_banners(
        &self,
        category_id: i64,
        kind: ShelfBannerKind,
    ) -> Result<Vec<ShelfBanner>, AppError>;
}
