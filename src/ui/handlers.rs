//! Event handlers for UI callbacks.
//!
//! Every Logic callback dispatches one [`Command`] on the UI thread and runs
//! it to completion, filesystem call included, before returning.

use crate::ui::image_display::{display_current, display_review};
use crate::ui::state_helpers::{clear_error, set_error_with_prefix};
use log::warn;
use slint::ComponentHandle;
use slint_image_culler::state::{AppState, Command, DispatchOutcome};
use std::cell::RefCell;
use std::rc::Rc;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: Rc<RefCell<AppState>>) {
    let logic = ui.global::<crate::Logic>();
    logic.on_next_image(command_handler(ui, &state, Command::Next));
    logic.on_prev_image(command_handler(ui, &state, Command::Previous));
    logic.on_accept_image(command_handler(ui, &state, Command::Accept));
    logic.on_reject_or_clear_image(command_handler(ui, &state, Command::RejectOrClear));
    logic.on_reject_image(command_handler(ui, &state, Command::Reject));
    logic.on_request_quit(command_handler(ui, &state, Command::Quit));
}

fn command_handler(
    ui: &crate::AppWindow,
    state: &Rc<RefCell<AppState>>,
    command: Command,
) -> impl FnMut() + 'static {
    let ui_handle = ui.as_weak();
    let state = state.clone();
    move || {
        let Some(ui) = ui_handle.upgrade() else {
            return;
        };
        let mut state = state.borrow_mut();

        match state.dispatch(command) {
            DispatchOutcome::Moved(_) => {
                clear_error(&ui);
                display_current(&ui, &state);
            }
            DispatchOutcome::Reviewed(transition) => {
                match transition.error() {
                    Some(e) => {
                        set_error_with_prefix(&ui, "Failed to update chosen folder", e.to_string())
                    }
                    None => clear_error(&ui),
                }
                display_review(&ui, &state);
            }
            DispatchOutcome::Quit => {
                if let Err(e) = slint::quit_event_loop() {
                    warn!("Failed to quit event loop: {}", e);
                }
            }
            DispatchOutcome::Ignored => {}
        }
    }
}
