//! Application-wide error type for the browsing surface.
//!
//! The storefront renders HTML pages, so errors resolve to page-level
//! responses rather than a JSON envelope: a missing catalog entity sends
//! the visitor back to the homepage, and anything unexpected becomes a
//! plain 500 with the details kept in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, error};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A catalog entity referenced by the URL does not exist.
    ///
    /// The payload names what was missed (`"product"`, `"category"`) and
    /// is only used for logging.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Infrastructure failure (database, Redis) that the page cannot
    /// recover from.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound(what)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                debug!("{what} not found, redirecting to homepage");
                Redirect::to("/").into_response()
            }
            AppError::Internal(message) => {
                error!("request failed: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, "something went wrong").into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(format!("database error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_not_found_redirects_to_homepage() {
        let response = AppError::not_found("product").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/"
        );
    }

    #[test]
    fn test_internal_is_500() {
        let response = AppError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_sqlx_error_maps_to_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
