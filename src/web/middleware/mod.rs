//! Middleware for the storefront: session resolution, rate limiting,
//! and request tracing.

pub mod rate_limit;
pub mod session;
pub mod trace;
