//! Homepage merchandising banners.
//!
//! Three slot families feed the homepage: the main carousel, the
//! promotion tiles next to it, and per-category shelves that mix text
//! links with image tiles. All of them are curated rows ordered by
//! `display_index`, lowest first.

use serde::{Deserialize, Serialize};

/// How a shelf banner is rendered on a category shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShelfBannerKind {
    /// A plain text link, stacked in the shelf's link column.
    Title,
    /// An image tile in the shelf's product grid.
    Image,
}

impl ShelfBannerKind {
    /// Maps the persisted `display_kind` flag (0 = title, 1 = image).
    pub fn from_flag(flag: i16) -> Self {
        if flag == 1 {
            ShelfBannerKind::Image
        } else {
            ShelfBannerKind::Title
        }
    }

    pub fn as_flag(self) -> i16 {
        match self {
            ShelfBannerKind::Title => 0,
            ShelfBannerKind::Image => 1,
        }
    }
}

/// A slide in the homepage carousel, linking to one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselBanner {
    pub id: i64,
    pub sku_id: i64,
    pub sku_name: String,
    pub image: String,
    pub display_index: i32,
}

/// A promotional tile linking to an arbitrary URL (sale page, article).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionBanner {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub image: String,
    pub display_index: i32,
}

/// A curated SKU placement on a category's homepage shelf.
///
/// Carries the SKU's name and image denormalized so the homepage can
/// render without touching the product table again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfBanner {
    pub id: i64,
    pub category_id: i64,
    pub sku_id: i64,
    pub sku_name: String,
    pub sku_image: String,
    pub kind: ShelfBannerKind,
    pub display_index: i32,
}
