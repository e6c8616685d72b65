//! Customer review entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A non-empty comment left on a completed order line.
///
/// Reviews are written by the checkout pipeline; the catalog only reads
/// them for the product detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub order_id: i64,
    pub sku_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
