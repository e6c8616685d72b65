//! Domain layer: catalog entities, repository traits, and the visitor
//! identity model.
//!
//! Nothing here touches a database or a socket. The traits in
//! [`repositories`] are the seams the rest of the crate builds against;
//! their concrete backends live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod visitor;

pub use visitor::{UserId, Visitor};
