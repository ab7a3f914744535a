//! Helper functions to set multiple ViewerState properties in a grouped manner.

use log::error;
use slint::ComponentHandle;
use slint_image_culler::image_registry::ReviewStatus;

/// Sets file information properties at once.
///
/// Groups: current-filename, has-content, image-width, image-height
pub fn set_file_info(ui: &crate::AppWindow, filename: &str, dimensions: Option<(u32, u32)>) {
    let viewer_state = ui.global::<crate::ViewerState>();
    let (width, height) = dimensions.unwrap_or((0, 0));
    viewer_state.set_current_filename(filename.into());
    viewer_state.set_has_content(dimensions.is_some());
    viewer_state.set_image_width(width as i32);
    viewer_state.set_image_height(height as i32);
}

/// Sets navigation properties. `current_index` is one-based.
pub fn set_navigation_info(ui: &crate::AppWindow, current_index: usize, total_index: usize) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_current_index(current_index as i32);
    viewer_state.set_total_index(total_index as i32);
}

/// Sets review properties: the border colour code and the accepted tally.
pub fn set_review_info(ui: &crate::AppWindow, status: ReviewStatus, accepted_count: usize) {
    let viewer_state = ui.global::<crate::ViewerState>();
    viewer_state.set_review_status(status_code(status));
    viewer_state.set_accepted_count(accepted_count as i32);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewerState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewerState>()
        .set_error_message(error_message.into());
}

/// Clears the error-message property.
pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewerState>()
        .set_error_message("".into());
}

/// Integer code the window uses to pick the border colour.
fn status_code(status: ReviewStatus) -> i32 {
    match status {
        ReviewStatus::Neutral => 0,
        ReviewStatus::Accepted => 1,
        ReviewStatus::Rejected => 2,
    }
}
