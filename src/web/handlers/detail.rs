//! Product detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::domain::Visitor;
use crate::domain::entities::{Category, ProductSku, Review};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the product detail page.
///
/// Renders `templates/detail.html`.
#[derive(Template, WebTemplate)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub sku: ProductSku,
    pub categories: Vec<Category>,
    pub reviews: Vec<Review>,
    pub new_arrivals: Vec<ProductSku>,
    pub same_group: Vec<ProductSku>,
    pub cart_count: u64,
}

/// Renders one SKU's detail page and records the view.
///
/// # Endpoint
///
/// `GET /goods/{goods_id}`
///
/// A `goods_id` that is not a number or does not match a SKU redirects
/// to the homepage. For signed-in visitors the view lands in their
/// recently-viewed history after the page content is resolved, so a
/// miss never pollutes the history.
#[instrument(skip(state))]
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(goods_id): Path<String>,
    visitor: Visitor,
) -> Result<DetailTemplate, AppError> {
    let sku_id: i64 = goods_id
        .parse()
        .map_err(|_| AppError::not_found("product"))?;

    let detail = state.catalog.product_detail(sku_id).await?;
    let cart_count = state.activity.cart_count(visitor).await;
    state.activity.record_view(visitor, sku_id).await;

    Ok(DetailTemplate {
        sku: detail.sku,
        categories: detail.categories,
        reviews: detail.reviews,
        new_arrivals: detail.new_arrivals,
        same_group: detail.same_group,
        cart_count,
    })
}
