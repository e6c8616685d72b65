//! Category listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::application::pagination::{self, Page};
use crate::domain::Visitor;
use crate::domain::entities::{Category, ProductSku};
use crate::domain::repositories::SortKey;
use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the listing page.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Sort order: `default`, `price`, or `hot`. Unknown values fall
    /// back to `default`.
    pub sort: Option<String>,
}

/// Template for the category listing page.
///
/// Renders `templates/list.html`.
#[derive(Template, WebTemplate)]
#[template(path = "list.html")]
pub struct ListTemplate {
    pub category: Category,
    pub categories: Vec<Category>,
    pub page: Page<ProductSku>,
    pub new_arrivals: Vec<ProductSku>,
    /// Echoed into pagination links so the sort survives page flips.
    pub sort: &'static str,
    pub cart_count: u64,
}

/// Renders one page of a category's SKUs.
///
/// # Endpoint
///
/// `GET /list/{type_id}/{page_index}?sort={default|price|hot}`
///
/// An unknown category redirects to the homepage. A page index that is
/// garbage or out of range serves page 1 rather than erroring, so stale
/// bookmarks survive catalog shrinkage.
#[instrument(skip(state))]
pub async fn list_handler(
    State(state): State<AppState>,
    Path((type_id, page_index)): Path<(String, String)>,
    Query(query): Query<ListQuery>,
    visitor: Visitor,
) -> Result<ListTemplate, AppError> {
    let category_id: i64 = type_id
        .parse()
        .map_err(|_| AppError::not_found("category"))?;

    let sort = SortKey::parse(query.sort.as_deref());
    let listing = state.catalog.category_listing(category_id, sort).await?;

    let requested_page = pagination::parse_page_index(&page_index);
    let page = pagination::paginate(&listing.skus, state.list_page_size, requested_page);

    let cart_count = state.activity.cart_count(visitor).await;

    Ok(ListTemplate {
        category: listing.category,
        categories: listing.categories,
        page,
        new_arrivals: listing.new_arrivals,
        sort: sort.as_str(),
        cart_count,
    })
}
