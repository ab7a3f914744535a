//! State management for the culling session.
//!
//! [`AppState`] owns the registry, the review engine and the cursor. The
//! interactive phase is single-threaded: each [`Command`] runs to completion,
//! including its filesystem call, before the next one is dispatched.

use crate::image_registry::{ImageRegistry, PixelBuffer, ReviewStatus};
use crate::services::{LinkStore, ReviewService, SymlinkStore, Transition};
use log::info;

pub mod navigation;

pub use navigation::{Direction, NavigationState};

/// Operator commands accepted by the interactive phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Accept,
    RejectOrClear,
    Reject,
    Quit,
}

/// Result of dispatching one [`Command`].
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The cursor moved to this index.
    Moved(usize),
    /// A review command ran on the current record.
    Reviewed(Transition),
    /// Nothing to act on (empty registry).
    Ignored,
    Quit,
}

/// What the display needs to draw the current record.
#[derive(Debug, Clone, Copy)]
pub struct CurrentView<'a> {
    pub index: usize,
    pub total: usize,
    pub display_name: &'a str,
    pub status: ReviewStatus,
    /// `None` for records that failed to decode.
    pub pixels: Option<&'a PixelBuffer>,
    pub accepted_count: usize,
}

/// Session context: registry, review engine and cursor.
pub struct AppState<S: LinkStore = SymlinkStore> {
    registry: ImageRegistry,
    review: ReviewService<S>,
    navigation: NavigationState,
}

impl<S: LinkStore> AppState<S> {
    /// Builds the session and restores acceptances already on disk.
    pub fn new(mut registry: ImageRegistry, review: ReviewService<S>) -> Self {
        review.reconcile(&mut registry);
        let navigation = NavigationState::new(registry.len());
        Self {
            registry,
            review,
            navigation,
        }
    }

    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    pub fn review(&self) -> &ReviewService<S> {
        &self.review
    }

    pub fn current_index(&self) -> usize {
        self.navigation.index()
    }

    pub fn dispatch(&mut self, command: Command) -> DispatchOutcome {
        if command == Command::Quit {
            return DispatchOutcome::Quit;
        }
        if self.registry.is_empty() {
            return DispatchOutcome::Ignored;
        }

        let index = self.navigation.index();
        match command {
            Command::Next | Command::Previous => {
                let direction = if command == Command::Next {
                    Direction::Next
                } else {
                    Direction::Previous
                };
                match self.navigation.navigate(direction) {
                    Some(new_index) => {
                        if let Some(line) = self.viewing_line() {
                            info!("{}", line);
                        }
                        DispatchOutcome::Moved(new_index)
                    }
                    None => DispatchOutcome::Ignored,
                }
            }
            Command::Accept => {
                DispatchOutcome::Reviewed(self.review.accept(&mut self.registry, index))
            }
            Command::RejectOrClear => {
                DispatchOutcome::Reviewed(self.review.reject_or_clear(&mut self.registry, index))
            }
            Command::Reject => {
                DispatchOutcome::Reviewed(self.review.reject(&mut self.registry, index))
            }
            Command::Quit => DispatchOutcome::Quit,
        }
    }

    /// Console line for the record under the cursor, e.g. `[3/50] Viewing: img03.png`.
    pub fn viewing_line(&self) -> Option<String> {
        let index = self.navigation.index();
        let record = self.registry.get(index)?;
        Some(format!(
            "[{}/{}] Viewing: {}",
            index + 1,
            self.registry.len(),
            record.display_name()
        ))
    }

    /// View of the record under the cursor, or `None` for an empty registry.
    pub fn current_view(&self) -> Option<CurrentView<'_>> {
        let index = self.navigation.index();
        let record = self.registry.get(index)?;
        Some(CurrentView {
            index,
            total: self.registry.len(),
            display_name: record.display_name(),
            status: record.status(),
            pixels: record.pixels(),
            accepted_count: self.registry.accepted_count(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::file_utils::ScannedImage;
    use crate::image_registry::{DecodeOutcome, ImageRecord};
    use std::fs;
    use tempfile::TempDir;

    fn session(dir: &TempDir, names: &[&str]) -> AppState {
        let records = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, b"x").unwrap();
                let outcome = if name.starts_with("bad") {
                    DecodeOutcome::Failure
                } else {
                    DecodeOutcome::Success(PixelBuffer::new(vec![0; 4], 1, 1))
                };
                ImageRecord::new(ScannedImage::new(path), outcome)
            })
            .collect();
        let store = SymlinkStore::open(dir.path().join("chosen")).unwrap();
        AppState::new(ImageRegistry::from_records(records), ReviewService::new(store))
    }

    #[test]
    fn navigation_does_not_touch_review_status() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &["a.png", "b.png"]);

        state.dispatch(Command::Accept);
        assert!(matches!(state.dispatch(Command::Next), DispatchOutcome::Moved(1)));
        assert!(matches!(state.dispatch(Command::Next), DispatchOutcome::Moved(0)));

        let view = state.current_view().unwrap();
        assert_eq!(view.status, ReviewStatus::Accepted);
        assert_eq!(state.registry().at(1).status(), ReviewStatus::Neutral);
    }

    #[test]
    fn review_commands_target_current_record() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &["a.png", "b.png", "c.png"]);

        state.dispatch(Command::Previous);
        state.dispatch(Command::Accept);

        assert_eq!(state.current_index(), 2);
        assert_eq!(state.registry().at(2).status(), ReviewStatus::Accepted);
        assert!(dir.path().join("chosen").join("c.png").is_symlink());
    }

    #[test]
    fn failed_record_presents_no_content() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &["a.png", "bad.png"]);

        state.dispatch(Command::Next);
        let view = state.current_view().unwrap();

        assert_eq!(view.display_name, "bad.png");
        assert!(view.pixels.is_none());
    }

    #[test]
    fn viewing_line_follows_cursor() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &["a.png", "b.png"]);

        assert_eq!(state.viewing_line().as_deref(), Some("[1/2] Viewing: a.png"));
        state.dispatch(Command::Previous);
        assert_eq!(state.viewing_line().as_deref(), Some("[2/2] Viewing: b.png"));
    }

    #[test]
    fn quit_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &["a.png"]);
        assert!(matches!(state.dispatch(Command::Quit), DispatchOutcome::Quit));
    }

    #[test]
    fn empty_session_ignores_commands() {
        let dir = TempDir::new().unwrap();
        let mut state = session(&dir, &[]);
        assert!(matches!(state.dispatch(Command::Accept), DispatchOutcome::Ignored));
        assert!(state.current_view().is_none());
        assert!(state.viewing_line().is_none());
    }
}
