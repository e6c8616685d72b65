//! HTTP handlers for the storefront pages and the health endpoint.

mod detail;
mod health;
mod home;
mod list;

pub use detail::detail_handler;
pub use health::health_handler;
pub use home::home_handler;
pub use list::list_handler;
