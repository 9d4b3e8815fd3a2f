//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::BatchItem;
use unbox_core::ExtractionResult;
use unbox_core::FailureReason;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Reports the directory archives are extracted in.
    fn format_directory(&self, dir: &Path);

    /// Reports that the target directory does not exist.
    fn format_directory_missing(&self, dir: &Path) -> Result<()>;

    /// Reports an empty scan.
    fn format_no_archives(&self, dir: &Path) -> Result<()>;

    /// Prints the numbered archive listing.
    fn format_listing(&self, dir: &Path, archives: &[ArchiveFile]) -> Result<()>;

    /// Called before an archive is extracted.
    fn format_archive_started(&self, archive: &ArchiveFile, position: usize, total: usize);

    /// Reports the outcome of one archive as soon as it is known.
    fn format_archive_result(&self, item: &BatchItem);

    /// Reports every outcome of the run.
    fn format_summary(&self, dir: &Path, items: &[BatchItem]) -> Result<()>;

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);
}

/// Outcome counts of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Tally {
    pub fn of(items: &[BatchItem]) -> Self {
        items.iter().fold(Self::default(), |mut tally, item| {
            match &item.result {
                ExtractionResult::Success(_) => tally.succeeded += 1,
                ExtractionResult::Failure(FailureReason::UnsupportedFormat) => tally.skipped += 1,
                ExtractionResult::Failure(_) => tally.failed += 1,
            }
            tally
        })
    }

    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    /// An error that still carries the data gathered before it.
    pub fn partial(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Error,
            data: Some(data),
            error: Some(error.into()),
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
