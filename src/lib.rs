//! Core of the image culler: directory inventory, parallel bulk decoding,
//! the frozen image registry, and the accept/reject engine that mirrors
//! acceptance into a `chosen/` directory of symlinks.

pub mod config;
pub mod error;
pub mod file_utils;
pub mod image_loader;
pub mod image_registry;
pub mod services;
pub mod startup;
pub mod state;

pub use error::{AppError, Result};
