//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! prepared statements. Each repository maps its own private row
//! structs into domain entities so the entity types stay free of
//! persistence concerns.
//!
//! # Repositories
//!
//! - [`PgCategoryRepository`] - Category reads
//! - [`PgBannerRepository`] - Homepage merchandising slots
//! - [`PgProductRepository`] - SKU lookups and category listings
//! - [`PgReviewRepository`] - Customer reviews from order lines

pub mod pg_banner_repository;
pub mod pg_category_repository;
pub mod pg_product_repository;
pub mod pg_review_repository;

pub use pg_banner_repository::PgBannerRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_review_repository::PgReviewRepository;
