//! Pushes the record under the cursor into the window.
//!
//! Pixels are already decoded in memory, so this runs synchronously on the
//! UI thread. Aspect-fit scaling is left to the `Image` element.

use crate::ui::state_helpers::{set_file_info, set_navigation_info, set_review_info};
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer};
use slint_image_culler::image_registry::PixelBuffer;
use slint_image_culler::state::AppState;

/// Copies decoded RGBA8 pixels into a Slint image.
pub fn create_slint_image(pixels: &PixelBuffer) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&pixels.data, pixels.width, pixels.height);
    Image::from_rgba8(buffer)
}

/// Shows the current record: image (or the no-content placeholder), file info, position, status.
pub fn display_current(ui: &crate::AppWindow, state: &AppState) {
    let Some(view) = state.current_view() else {
        return;
    };

    let image = view.pixels.map(create_slint_image).unwrap_or_default();
    ui.global::<crate::ViewerState>().set_current_image(image);

    set_file_info(ui, view.display_name, view.pixels.map(PixelBuffer::dimensions));
    set_navigation_info(ui, view.index + 1, view.total);
    set_review_info(ui, view.status, view.accepted_count);
}

/// Refreshes only the review status after an accept/reject command.
pub fn display_review(ui: &crate::AppWindow, state: &AppState) {
    if let Some(view) = state.current_view() {
        set_review_info(ui, view.status, view.accepted_count);
    }
}
