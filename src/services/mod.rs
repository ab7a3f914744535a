//! Service layer for business logic.
//!
//! Separates filesystem side effects from UI handlers for better testability.

pub mod link_store;
pub mod review_service;

pub use link_store::{LinkStore, SymlinkStore};
pub use review_service::{ReviewService, Transition};
