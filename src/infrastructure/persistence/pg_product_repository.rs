//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ProductSku;
use crate::domain::repositories::{ProductRepository, SortKey};
use crate::error::AppError;

const SKU_COLUMNS: &str = "id, category_id, group_id, name, brief, unit, price_cents, \
                           image, stock, sales, on_sale, created_at";

/// PostgreSQL repository for sellable SKUs.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// ORDER BY fragment for a sort key. Ties fall back to descending id so
/// page boundaries stay stable between requests.
fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Default => "id DESC",
        SortKey::Price => "price_cents ASC, id DESC",
        SortKey::Hot => "sales DESC, id DESC",
    }
}

#[derive(sqlx::FromRow)]
struct SkuRow {
    id: i64,
    category_id: i64,
    group_id: i64,
    name: String,
    brief: String,
    unit: String,
    price_cents: i64,
    image: String,
    stock: i32,
    sales: i64,
    on_sale: bool,
    created_at: DateTime<Utc>,
}

impl From<SkuRow> for ProductSku {
    fn from(row: SkuRow) -> Self {
        ProductSku {
            id: row.id,
            category_id: row.category_id,
            group_id: row.group_id,
            name: row.name,
            brief: row.brief,
            unit: row.unit,
            price_cents: row.price_cents,
            image: row.image,
            stock: row.stock,
            sales: row.sales,
            on_sale: row.on_sale,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductSku>, AppError> {
        let row = sqlx::query_as::<_, SkuRow>(&format!(
            "SELECT {SKU_COLUMNS} FROM product_skus WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ProductSku::from))
    }

    async fn list_by_category(
        &self,
        category_id: i64,
        sort: SortKey,
    ) -> Result<Vec<ProductSku>, AppError> {
        // The ORDER BY fragment comes from a closed enum, never from
        // user input, so string assembly is safe here.
        let query = format!(
            "SELECT {SKU_COLUMNS} FROM product_skus WHERE category_id = $1 ORDER BY {}",
            order_clause(sort)
        );

        let rows = sqlx::query_as::<_, SkuRow>(&query)
            .bind(category_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(ProductSku::from).collect())
    }

    async fn list_newest_by_category(
        &self,
        category_id: i64,
        limit: i64,
    ) -> Result<Vec<ProductSku>, AppError> {
        let rows = sqlx::query_as::<_, SkuRow>(&format!(
            "SELECT {SKU_COLUMNS} FROM product_skus \
             WHERE category_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2"
        ))
        .bind(category_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ProductSku::from).collect())
    }

    async fn list_same_group(
        &self,
        group_id: i64,
        exclude_sku_id: i64,
    ) -> Result<Vec<ProductSku>, AppError> {
        let rows = sqlx::query_as::<_, SkuRow>(&format!(
            "SELECT {SKU_COLUMNS} FROM product_skus \
             WHERE group_id = $1 AND id <> $2 ORDER BY id"
        ))
        .bind(group_id)
        .bind(exclude_sku_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ProductSku::from).collect())
    }
}
