//! Application layer: page composition over the repository traits.
//!
//! [`services`] holds the catalog read service and the visitor-aware
//! activity service; [`pagination`] the listing pagination and the
//! bounded pager window. Handlers call these and only render.

pub mod pagination;
pub mod services;
