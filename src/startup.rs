//! Startup sequence: scan, prepare the chosen directory, load, reconcile.

use crate::config::{CHOSEN_DIR_NAME, Config};
use crate::error::{AppError, Result};
use crate::file_utils::{self, PathExt};
use crate::image_loader::{self, ImageDecoder, LoadReport};
use crate::services::{ReviewService, SymlinkStore};
use crate::state::AppState;
use log::info;

/// Runs every step before the interactive phase.
///
/// Fails with [`AppError::DirectoryNotFound`], [`AppError::NoImagesFound`] or
/// [`AppError::ChosenDirCreateFailed`] before any decoding starts. Every
/// error returned here is fatal for the process.
pub fn bootstrap<D, P>(config: &Config, decoder: &D, on_progress: P) -> Result<AppState>
where
    D: ImageDecoder + ?Sized,
    P: Fn(usize, usize) + Sync + Send,
{
    info!("Scanning directory: {}", config.directory.format_for_log());
    let entries = file_utils::scan_directory(&config.directory)?;
    if entries.is_empty() {
        return Err(AppError::NoImagesFound(config.directory.clone()));
    }

    let directory = config.directory.canonicalize()?;
    let store = SymlinkStore::open(directory.join(CHOSEN_DIR_NAME))?;

    let LoadReport { registry, elapsed } = match config.threads {
        Some(threads) => image_loader::load_all_with_threads(entries, decoder, threads, on_progress)?,
        None => image_loader::load_all(entries, decoder, on_progress),
    };

    info!(
        "Loaded {} images in {:.3} seconds ({} failed)",
        registry.len(),
        elapsed.as_secs_f64(),
        registry.failure_count()
    );

    let state = AppState::new(registry, ReviewService::new(store));
    info!(
        "{} images ready, {} already accepted",
        state.registry().len(),
        state.registry().accepted_count()
    );
    if let Some(line) = state.viewing_line() {
        info!("{}", line);
    }
    Ok(state)
}
