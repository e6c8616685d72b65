//! Top-level router: pages, health, static assets, and the middleware
//! stack around them.
//!
//! The three browsing pages get the session middleware (so handlers see
//! a [`crate::domain::Visitor`]) and the per-IP rate limiter. `/health`
//! and `/static` sit outside both. Requests for paths that match
//! nothing are sent back to the homepage, the same policy unknown
//! catalog ids get.

use crate::state::AppState;
use crate::web;
use crate::web::handlers::health_handler;
use crate::web::middleware::{rate_limit, session, trace};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Assembles the full application router.
///
/// Trailing slashes are trimmed before routing, so `/list/3/1/` and
/// `/list/3/1` are the same page.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let pages = web::routes::page_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::layer,
        ))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(pages)
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(|| async { Redirect::to("/") })
        .with_state(state)
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
