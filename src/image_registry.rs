//! Image registry: the ordered, frozen set of records produced by ingestion.
//!
//! Structure is fixed once the loader hands the registry over. Only the
//! review status of existing records changes afterwards.

use crate::file_utils::ScannedImage;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Decoded RGBA8 pixels, `width * height * 4` bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Result of decoding one record. Set once by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Success(PixelBuffer),
    Failure,
}

impl DecodeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DecodeOutcome::Success(_))
    }
}

/// Operator judgment on a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    #[default]
    Neutral,
    Accepted,
    Rejected,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReviewStatus::Neutral => "neutral",
            ReviewStatus::Accepted => "accepted",
            ReviewStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// One scanned image together with its decode result and review status.
#[derive(Debug)]
pub struct ImageRecord {
    file_name: OsString,
    display_name: String,
    source_path: PathBuf,
    outcome: DecodeOutcome,
    status: ReviewStatus,
}

impl ImageRecord {
    pub fn new(scanned: ScannedImage, outcome: DecodeOutcome) -> Self {
        Self {
            file_name: scanned.file_name,
            display_name: scanned.display_name,
            source_path: scanned.source_path,
            outcome,
            status: ReviewStatus::Neutral,
        }
    }

    /// Raw file name; the key of this record's link in the chosen directory.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// File name for display. Lossy for non-UTF-8 names.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn outcome(&self) -> &DecodeOutcome {
        &self.outcome
    }

    /// Decoded pixels, or `None` when decoding failed.
    pub fn pixels(&self) -> Option<&PixelBuffer> {
        match &self.outcome {
            DecodeOutcome::Success(buffer) => Some(buffer),
            DecodeOutcome::Failure => None,
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.pixels().map(PixelBuffer::dimensions)
    }

    pub fn status(&self) -> ReviewStatus {
        self.status
    }
}

/// Ordered container of records, in scan order.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    records: Vec<ImageRecord>,
}

impl ImageRegistry {
    pub fn from_records(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn at(&self, index: usize) -> &ImageRecord {
        &self.records[index]
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    /// Sets a record's status from persisted state. Used once at startup.
    pub fn restore_status(&mut self, index: usize, status: ReviewStatus) {
        self.set_status(index, status);
    }

    pub(crate) fn set_status(&mut self, index: usize, status: ReviewStatus) {
        self.records[index].status = status;
    }

    pub fn success_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome.is_success())
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }

    pub fn accepted_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == ReviewStatus::Accepted)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, outcome: DecodeOutcome) -> ImageRecord {
        ImageRecord::new(
            ScannedImage::new(PathBuf::from("/photos").join(name)),
            outcome,
        )
    }

    fn sample_registry() -> ImageRegistry {
        ImageRegistry::from_records(vec![
            record("a.png", DecodeOutcome::Success(PixelBuffer::new(vec![0; 16], 2, 2))),
            record("b.jpg", DecodeOutcome::Failure),
            record("c.bmp", DecodeOutcome::Success(PixelBuffer::new(vec![0; 4], 1, 1))),
        ])
    }

    #[test]
    fn records_start_neutral() {
        let registry = sample_registry();
        assert!(registry.iter().all(|r| r.status() == ReviewStatus::Neutral));
    }

    #[test]
    fn failed_record_has_no_pixels_or_dimensions() {
        let registry = sample_registry();
        let failed = registry.at(1);
        assert_eq!(failed.display_name(), "b.jpg");
        assert!(failed.pixels().is_none());
        assert!(failed.dimensions().is_none());
        assert_eq!(registry.at(0).dimensions(), Some((2, 2)));
    }

    #[test]
    fn counts_outcomes() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.success_count(), 2);
        assert_eq!(registry.failure_count(), 1);
    }

    #[test]
    fn restore_status_updates_only_that_record() {
        let mut registry = sample_registry();
        registry.restore_status(2, ReviewStatus::Accepted);
        assert_eq!(registry.at(2).status(), ReviewStatus::Accepted);
        assert_eq!(registry.at(0).status(), ReviewStatus::Neutral);
        assert_eq!(registry.accepted_count(), 1);
    }

    #[test]
    #[should_panic]
    fn at_out_of_range_panics() {
        let registry = sample_registry();
        let _ = registry.at(3);
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert!(sample_registry().get(3).is_none());
    }
}
