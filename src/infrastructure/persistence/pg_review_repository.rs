//! PostgreSQL implementation of the review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Review;
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

/// PostgreSQL repository for customer reviews, read from order lines.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    order_id: i64,
    sku_id: i64,
    comment: String,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            order_id: row.order_id,
            sku_id: row.sku_id,
            comment: row.comment,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn list_for_sku(&self, sku_id: i64) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, order_id, sku_id, comment, created_at
            FROM order_items
            WHERE sku_id = $1 AND comment <> ''
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(sku_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }
}
