//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything here runs on the Slint event loop thread.
//! Decoding already happened on the rayon pool during startup, so handlers
//! only read memory and make single small filesystem calls.

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use image_display::display_current;
