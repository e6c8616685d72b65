//! PostgreSQL implementation of the banner repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{CarouselBanner, PromotionBanner, ShelfBanner, ShelfBannerKind};
use crate::domain::repositories::BannerRepository;
use crate::error::AppError;

/// PostgreSQL repository for homepage merchandising slots.
///
/// Carousel and shelf rows join the product table so the homepage can
/// render SKU names and images without a second round trip.
pub struct PgBannerRepository {
    pool: Arc<PgPool>,
}

impl PgBannerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CarouselRow {
    id: i64,
    sku_id: i64,
    sku_name: String,
    image: String,
    display_index: i32,
}

impl From<CarouselRow> for CarouselBanner {
    fn from(row: CarouselRow) -> Self {
        CarouselBanner {
            id: row.id,
            sku_id: row.sku_id,
            sku_name: row.sku_name,
            image: row.image,
            display_index: row.display_index,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PromotionRow {
    id: i64,
    name: String,
    url: String,
    image: String,
    display_index: i32,
}

impl From<PromotionRow> for PromotionBanner {
    fn from(row: PromotionRow) -> Self {
        PromotionBanner {
            id: row.id,
            name: row.name,
            url: row.url,
            image: row.image,
            display_index: row.display_index,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ShelfRow {
    id: i64,
    category_id: i64,
    sku_id: i64,
    sku_name: String,
    sku_image: String,
    display_kind: i16,
    display_index: i32,
}

impl From<ShelfRow> for ShelfBanner {
    fn from(row: ShelfRow) -> Self {
        ShelfBanner {
            id: row.id,
            category_id: row.category_id,
            sku_id: row.sku_id,
            sku_name: row.sku_name,
            sku_image: row.sku_image,
            kind: ShelfBannerKind::from_flag(row.display_kind),
            display_index: row.display_index,
        }
    }
}

#[async_trait]
impl BannerRepository for PgBannerRepository {
    async fn carousel_banners(&self) -> Result<Vec<CarouselBanner>, AppError> {
        let rows = sqlx::query_as::<_, CarouselRow>(
            r#"
            SELECT b.id, b.sku_id, s.name AS sku_name, b.image, b.display_index
            FROM carousel_banners b
            JOIN product_skus s ON s.id = b.sku_id
            ORDER BY b.display_index
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CarouselBanner::from).collect())
    }

    async fn promotion_banners(&self) -> Result<Vec<PromotionBanner>, AppError> {
        let rows = sqlx::query_as::<_, PromotionRow>(
            "SELECT id, name, url, image, display_index FROM promotion_banners ORDER BY display_index",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PromotionBanner::from).collect())
    }

    async fn shelf_banners(
        &self,
        category_id: i64,
        kind: ShelfBannerKind,
    ) -> Result<Vec<ShelfBanner>, AppError> {
        let rows = sqlx::query_as::<_, ShelfRow>(
            r#"
            SELECT b.id, b.category_id, b.sku_id, s.name AS sku_name,
                   s.image AS sku_image, b.display_kind, b.display_index
            FROM category_shelf_banners b
            JOIN product_skus s ON s.id = b.sku_id
            WHERE b.category_id = $1 AND b.display_kind = $2
            ORDER BY b.display_index
            "#,
        )
        .bind(category_id)
        .bind(kind.as_flag())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShelfBanner::from).collect())
    }
}
