//! Homepage handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::application::services::CategoryShelf;
use crate::domain::Visitor;
use crate::domain::entities::{CarouselBanner, PromotionBanner};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the homepage.
///
/// Renders `templates/index.html` with the cached merchandising unit
/// plus the per-visitor cart badge.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub shelves: Vec<CategoryShelf>,
    pub carousel_banners: Vec<CarouselBanner>,
    pub promotion_banners: Vec<PromotionBanner>,
    pub cart_count: u64,
}

/// Renders the homepage.
///
/// # Endpoint
///
/// `GET /`
///
/// The merchandising content (shelves, carousel, promotions) comes from
/// the page cache and is shared by every visitor; only the cart badge
/// is computed per request.
#[instrument(skip(state))]
pub async fn home_handler(
    State(state): State<AppState>,
    visitor: Visitor,
) -> Result<IndexTemplate, AppError> {
    let content = state.catalog.home_content().await?;
    let cart_count = state.activity.cart_count(visitor).await;

    Ok(IndexTemplate {
        shelves: content.shelves,
        carousel_banners: content.carousel_banners,
        promotion_banners: content.promotion_banners,
        cart_count,
    })
}
