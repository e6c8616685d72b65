//! Concrete backends for the domain's trait seams.
//!
//! [`persistence`] implements the catalog repositories over PostgreSQL.
//! [`cache`] and [`activity`] back the page cache and the per-user
//! activity store with Redis, each with an in-process fallback for
//! deployments without one.

pub mod activity;
pub mod cache;
pub mod persistence;
