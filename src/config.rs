//! Application configuration constants and runtime settings.

use std::path::PathBuf;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tga", "gif", "webp"];

/// Name of the subdirectory (inside the input directory) holding accepted links.
pub const CHOSEN_DIR_NAME: &str = "chosen";

/// Loader progress is reported every this many completed decodes.
pub const PROGRESS_INTERVAL: usize = 10;

/// Runtime settings for one culling session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose images are loaded.
    pub directory: PathBuf,
    /// Decode pool size. `None` uses rayon's global pool (one thread per core).
    pub threads: Option<usize>,
}

impl Config {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            threads: None,
        }
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads.filter(|&n| n > 0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_threads_means_default_pool() {
        assert_eq!(Config::new(".").with_threads(Some(0)).threads, None);
        assert_eq!(Config::new(".").with_threads(Some(3)).threads, Some(3));
    }
}
