//! Core domain entities representing the catalog data model.
//!
//! This module contains the fundamental data structures of the
//! storefront's browsing surface. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Category`] - A top-level product category
//! - [`ProductGroup`] / [`ProductSku`] - SPU/SKU product model
//! - [`CarouselBanner`], [`PromotionBanner`], [`ShelfBanner`] - Homepage
//!   merchandising slots
//! - [`Review`] - A customer comment attached to an order line
//!
//! All entities derive `Serialize`/`Deserialize` because composed page
//! content is cached as JSON (see `crate::application::services`).

pub mod banner;
pub mod category;
pub mod product;
pub mod review;

pub use banner::{CarouselBanner, PromotionBanner, ShelfBanner, ShelfBannerKind};
pub use category::Category;
pub use product::{ProductGroup, ProductSku};
pub use review::Review;
