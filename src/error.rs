//! Unified error types for the image culler.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What the review engine was doing to the chosen directory when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    Create,
    Remove,
}

impl std::fmt::Display for LinkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkAction::Create => f.write_str("create"),
            LinkAction::Remove => f.write_str("remove"),
        }
    }
}

/// Application-specific errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input path is missing or not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Input directory holds no file with a supported extension.
    #[error("No images found in directory: {}", .0.display())]
    NoImagesFound(PathBuf),

    /// The chosen directory could not be created.
    #[error("Failed to create chosen directory {}: {source}", path.display())]
    ChosenDirCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error listing directory entries
    #[error("Directory scan error: {0}")]
    DirectoryScan(#[from] io::Error),

    /// Error loading or decoding an image file
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// A link in the chosen directory could not be created or removed.
    #[error("Failed to {action} chosen link '{name}': {source}")]
    Persistence {
        name: String,
        action: LinkAction,
        #[source]
        source: io::Error,
    },

    /// The decode thread pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
