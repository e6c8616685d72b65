//! Data-access traits the rest of the crate programs against.
//!
//! The catalog side is split by aggregate; relational implementations
//! live in `crate::infrastructure::persistence`. The activity store is
//! a separate concern backed by Redis in
//! `crate::infrastructure::activity`. All traits carry a mockall
//! `automock` under `cfg(test)`.
//!
//! - [`CategoryRepository`] - Category reads
//! - [`BannerRepository`] - Homepage merchandising slots
//! - [`ProductRepository`] - SKU lookups and category listings
//! - [`ReviewRepository`] - Customer reviews
//! - [`ActivityStore`] - Per-user cart size and view history

pub mod activity_store;
pub mod banner_repository;
pub mod category_repository;
pub mod product_repository;
pub mod review_repository;

pub use activity_store::{ActivityStore, MAX_RECENT_VIEWS};
pub use banner_repository::BannerRepository;
pub use category_repository::CategoryRepository;
pub use product_repository::{ProductRepository, SortKey};
pub use review_repository::ReviewRepository;

#[cfg(test)]
pub use activity_store::MockActivityStore;
#[cfg(test)]
pub use banner_repository::MockBannerRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
