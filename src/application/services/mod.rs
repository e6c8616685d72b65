//! Page-assembly services sitting between the handlers and the
//! repositories.

pub mod activity_service;
pub mod catalog_service;

pub use activity_service::ActivityService;
pub use catalog_service::{
    CatalogService, CategoryListing, CategoryShelf, HomeContent, ProductDetail,
};
