//! Session-cookie middleware resolving the request's [`Visitor`].
//!
//! The accounts service issues a `session` cookie when a user signs in;
//! this module only verifies it. Verification failure is not an error
//! on the browsing surface: every page works anonymously, so a missing,
//! malformed, or forged cookie simply downgrades the request to
//! [`Visitor::Anonymous`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::COOKIE,
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::convert::Infallible;
use tracing::debug;

use crate::domain::visitor::{UserId, Visitor};
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie issued by the accounts service.
pub const SESSION_COOKIE: &str = "session";

/// Resolves the visitor from the session cookie and stores it in the
/// request extensions for the [`Visitor`] extractor.
///
/// # Cookie Format
///
/// ```text
/// Cookie: session=<user_id>.<hmac_sha256_hex>
/// ```
///
/// The signature is HMAC-SHA256 over the decimal user id, keyed with
/// `SESSION_SIGNING_SECRET`, hex-encoded. Anything that fails to parse
/// or verify resolves to [`Visitor::Anonymous`].
pub async fn layer(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let visitor = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(SESSION_COOKIE), Some(value)) => Some(value.to_string()),
                    _ => None,
                }
            })
        })
        .and_then(|value| verify_session_value(&value, &state.session_secret))
        .map_or(Visitor::Anonymous, Visitor::Authenticated);

    req.extensions_mut().insert(visitor);
    next.run(req).await
}

/// Extracts the visitor resolved by [`layer`].
///
/// Defaults to [`Visitor::Anonymous`] when the middleware did not run,
/// which keeps handlers usable in isolation (unit tests, health probes).
impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Visitor>()
            .copied()
            .unwrap_or(Visitor::Anonymous))
    }
}

/// Builds the signed cookie value for a user id.
///
/// This is the issuing counterpart of [`layer`]'s verification, shared
/// with the seed CLI (for printing a demo login) and with tests.
pub fn session_cookie_value(user_id: UserId, secret: &str) -> String {
    let user_id = user_id.to_string();
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(user_id.as_bytes());
    format!("{}.{}", user_id, hex::encode(mac.finalize().into_bytes()))
}

/// Verifies a cookie value and returns the embedded user id.
///
/// The MAC comparison is constant-time via [`Mac::verify_slice`].
fn verify_session_value(value: &str, secret: &str) -> Option<UserId> {
    let (user_id_str, signature_hex) = value.split_once('.')?;
    let user_id: UserId = user_id_str.parse().ok()?;
    let signature = hex::decode(signature_hex).ok()?;

    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(user_id_str.as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Session cookie signature mismatch for user {user_id_str}");
        return None;
    }

    Some(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_signed_value_round_trips() {
        let value = session_cookie_value(42, SECRET);
        assert_eq!(verify_session_value(&value, SECRET), Some(42));
    }

    #[test]
    fn test_tampered_user_id_is_rejected() {
        let value = session_cookie_value(42, SECRET);
        let signature = value.split_once('.').unwrap().1;
        let forged = format!("7.{signature}");
        assert_eq!(verify_session_value(&forged, SECRET), None);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let value = session_cookie_value(42, "other-secret");
        assert_eq!(verify_session_value(&value, SECRET), None);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        assert_eq!(verify_session_value("", SECRET), None);
        assert_eq!(verify_session_value("42", SECRET), None);
        assert_eq!(verify_session_value("abc.def", SECRET), None);
        assert_eq!(verify_session_value("42.nothex!", SECRET), None);
        assert_eq!(verify_session_value(".deadbeef", SECRET), None);
    }
}
