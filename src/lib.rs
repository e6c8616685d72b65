//! Read-side catalog service for a fresh-groceries storefront.
//!
//! Serves the three browsing pages: the homepage (curated banners and
//! per-category shelves, cached as one unit), product detail (with
//! per-user recently-viewed tracking), and paginated, sortable category
//! listings. The cart badge in the page header reads the per-user
//! activity store that the cart service writes.
//!
//! Layers follow the usual clean split: [`domain`] holds entities and
//! repository traits, [`application`] composes pages and owns the cache
//! discipline, [`infrastructure`] implements the traits over PostgreSQL
//! and Redis, and [`web`] renders Askama templates behind Axum routes.
//!
//! Getting a local instance up:
//!
//! ```bash
//! export DATABASE_URL="postgres://localhost/fresh_catalog"
//! export SESSION_SIGNING_SECRET="change-me"
//! cargo run                      # migrations run on startup
//! cargo run --bin admin seed     # demo catalog data
//! ```
//!
//! Redis (`REDIS_URL`) is optional; without it the page cache and
//! activity store run in-process. Every knob is documented in
//! [`config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod web;

pub use error::AppError;
pub use state::AppState;
