//! Browser-facing layer: Askama-rendered pages, the storefront
//! middleware stack, and page route wiring.

pub mod handlers;
pub mod middleware;
pub mod routes;
