//! Image decoding and the parallel bulk loader.
//!
//! Every candidate is decoded up front on the rayon pool so navigation never
//! waits on disk. Each task owns exactly one output slot; the indexed collect
//! preserves scan order and doubles as the join barrier.

use crate::config::PROGRESS_INTERVAL;
use crate::error::{AppError, Result};
use crate::file_utils::{PathExt, ScannedImage};
use crate::image_registry::{DecodeOutcome, ImageRecord, ImageRegistry, PixelBuffer};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Turns a file into RGBA8 pixels.
pub trait ImageDecoder: Sync {
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;
}

/// Decoder backed by the `image` crate. Output is always 4-channel RGBA.
#[derive(Debug, Default, Clone, Copy)]
pub struct RgbaDecoder;

impl ImageDecoder for RgbaDecoder {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        let decode_error = |reason: String| AppError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let img = image::ImageReader::open(path)
            .map_err(|e| decode_error(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;

        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(PixelBuffer::new(rgba.into_raw(), width, height))
    }
}

/// Registry produced by a bulk load, plus how long the whole phase took.
#[derive(Debug)]
pub struct LoadReport {
    pub registry: ImageRegistry,
    pub elapsed: Duration,
}

/// Decodes every entry in parallel on the current rayon pool.
///
/// Returns only after all tasks have reported. A failed decode marks that
/// record as [`DecodeOutcome::Failure`] and never affects its siblings.
/// `on_progress(done, total)` fires every [`PROGRESS_INTERVAL`] completions
/// and once more on the last one. Wall-clock time for the whole phase is
/// returned in [`LoadReport::elapsed`] for the caller to report.
pub fn load_all<D, P>(entries: Vec<ScannedImage>, decoder: &D, on_progress: P) -> LoadReport
where
    D: ImageDecoder + ?Sized,
    P: Fn(usize, usize) + Sync,
{
    let total = entries.len();
    let completed = AtomicUsize::new(0);
    let start = Instant::now();

    info!(
        "Loading {} images into memory on {} threads",
        total,
        rayon::current_num_threads()
    );

    let records: Vec<ImageRecord> = entries
        .into_par_iter()
        .map(|scanned| {
            let outcome = match decoder.decode(&scanned.source_path) {
                Ok(buffer) => {
                    debug!(
                        "Decoded {} ({}x{})",
                        scanned.source_path.format_for_log(),
                        buffer.width,
                        buffer.height
                    );
                    DecodeOutcome::Success(buffer)
                }
                Err(e) => {
                    warn!("{}", e);
                    DecodeOutcome::Failure
                }
            };

            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_INTERVAL == 0 || done == total {
                on_progress(done, total);
            }

            ImageRecord::new(scanned, outcome)
        })
        .collect();

    LoadReport {
        registry: ImageRegistry::from_records(records),
        elapsed: start.elapsed(),
    }
}

/// Like [`load_all`], but on a dedicated pool of `threads` workers.
pub fn load_all_with_threads<D, P>(
    entries: Vec<ScannedImage>,
    decoder: &D,
    threads: usize,
    on_progress: P,
) -> Result<LoadReport>
where
    D: ImageDecoder + ?Sized,
    P: Fn(usize, usize) + Sync + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("decode-{i}"))
        .build()
        .map_err(|e| AppError::ThreadPool(e.to_string()))?;

    Ok(pool.install(move || load_all(entries, decoder, on_progress)))
}
