//! Storefront page route configuration.

use crate::state::AppState;
use crate::web::handlers::{detail_handler, home_handler, list_handler};
use axum::{Router, routing::get};

/// The three browsing pages. All GET, none require authentication.
///
/// # Endpoints
///
/// - `GET /` - Homepage with shelves, carousel, and promotions
/// - `GET /goods/{goods_id}` - Product detail page
/// - `GET /list/{type_id}/{page_index}` - Paginated category listing
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/goods/{goods_id}", get(detail_handler))
        .route("/list/{type_id}/{page_index}", get(list_handler))
}
