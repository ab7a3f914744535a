//! Directory inventory: lists the candidate images of a run in a stable order.

use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// A candidate file found by [`scan_directory`], before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedImage {
    /// Raw base file name, used verbatim as the link name in the chosen directory.
    pub file_name: OsString,
    /// Lossy UTF-8 rendering of `file_name`, for display and logs only.
    pub display_name: String,
    /// Absolute path to the original file.
    pub source_path: PathBuf,
}

impl ScannedImage {
    pub fn new(source_path: PathBuf) -> Self {
        let file_name = source_path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| source_path.as_os_str().to_os_string());
        let display_name = display_name(&source_path);
        Self {
            file_name,
            display_name,
            source_path,
        }
    }
}

/// Returns true when the path carries one of the supported extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Base file name of a path, lossily converted for display.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Lists supported image files directly inside `dir`, sorted byte-wise by full path.
///
/// The directory is resolved to an absolute path first, so every returned
/// `source_path` is absolute. An empty result is not an error here.
pub fn scan_directory(dir: &Path) -> Result<Vec<ScannedImage>> {
    if !dir.is_dir() {
        return Err(AppError::DirectoryNotFound(dir.to_path_buf()));
    }
    let dir = dir.canonicalize()?;

    let mut image_files: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(image_files.into_iter().map(ScannedImage::new).collect())
}

/// Formatting helpers for paths in log lines.
pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}
