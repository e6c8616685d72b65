//! Product entities: SPU-level groups and the sellable SKUs beneath them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product group (SPU): the abstract product that one or more
/// concrete SKUs belong to, e.g. "Gala Apple" with 500g and 1kg SKUs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductGroup {
    pub id: i64,
    pub name: String,
}

/// A sellable stock-keeping unit.
///
/// Prices are stored in integer cents to keep arithmetic exact; use
/// [`ProductSku::price_display`] when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSku {
    pub id: i64,
    pub category_id: i64,
    pub group_id: i64,
    pub name: String,
    pub brief: String,
    pub unit: String,
    pub price_cents: i64,
    pub image: String,
    pub stock: i32,
    pub sales: i64,
    pub on_sale: bool,
    pub created_at: DateTime<Utc>,
}

impl ProductSku {
    /// Formats the price in whole currency units with two decimals,
    /// e.g. `1050` cents renders as `"10.50"`.
    pub fn price_display(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// Returns true if the SKU can currently be added to a cart.
    pub fn is_available(&self) -> bool {
        self.on_sale && self.stock > 0
    }
}
