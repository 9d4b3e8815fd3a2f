//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use super::formatter::Tally;
use crate::error::directory_missing_message;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::BatchItem;
use unbox_core::ExtractionResult;
use unbox_core::FailureReason;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ArchiveOutput {
    name: String,
    path: String,
    kind: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files_extracted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directories_created: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes_written: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u128>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

impl ArchiveOutput {
    fn base(archive: &ArchiveFile, status: &'static str) -> Self {
        Self {
            name: archive.display_name(),
            path: archive.path().display().to_string(),
            kind: archive.kind().name(),
            status,
            reason: None,
            entry: None,
            detail: None,
            files_extracted: None,
            directories_created: None,
            bytes_written: None,
            duration_ms: None,
            warnings: Vec::new(),
        }
    }

    fn from_item(item: &BatchItem) -> Self {
        match &item.result {
            ExtractionResult::Success(report) => Self {
                files_extracted: Some(report.files_extracted),
                directories_created: Some(report.directories_created),
                bytes_written: Some(report.bytes_written),
                duration_ms: Some(report.duration.as_millis()),
                warnings: report.warnings.clone(),
                ..Self::base(&item.archive, "success")
            },
            ExtractionResult::Failure(reason) => {
                let status = if matches!(reason, FailureReason::UnsupportedFormat) {
                    "skipped"
                } else {
                    "failed"
                };
                let (entry, detail) = match reason {
                    FailureReason::Corrupted { entry, detail } => (entry.clone(), Some(detail.clone())),
                    FailureReason::PermissionDenied { detail } | FailureReason::Unknown(detail) => {
                        (None, Some(detail.clone()))
                    }
                    FailureReason::UnsupportedFormat => (None, None),
                };
                Self {
                    reason: Some(reason.label()),
                    entry,
                    detail,
                    ..Self::base(&item.archive, status)
                }
            }
        }
    }
}

#[derive(Serialize)]
struct ExtractOutput {
    directory: String,
    #[serde(flatten)]
    tally: Tally,
    archives: Vec<ArchiveOutput>,
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }

    fn extract_output(dir: &Path, items: &[BatchItem]) -> JsonOutput<ExtractOutput> {
        let tally = Tally::of(items);
        let data = ExtractOutput {
            directory: dir.display().to_string(),
            tally,
            archives: items.iter().map(ArchiveOutput::from_item).collect(),
        };

        if tally.has_failures() {
            JsonOutput::partial(
                "extract",
                data,
                format!("{} archive(s) failed to extract", tally.failed),
            )
        } else {
            JsonOutput::success("extract", data)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_directory(&self, _dir: &Path) {}

    fn format_directory_missing(&self, dir: &Path) -> Result<()> {
        Self::output(&JsonOutput::<()>::error(
            "extract",
            directory_missing_message(dir),
        ))
    }

    fn format_no_archives(&self, dir: &Path) -> Result<()> {
        Self::output(&Self::extract_output(dir, &[]))
    }

    fn format_listing(&self, dir: &Path, archives: &[ArchiveFile]) -> Result<()> {
        #[derive(Serialize)]
        struct ListedArchive {
            index: usize,
            name: String,
            path: String,
            kind: &'static str,
        }

        #[derive(Serialize)]
        struct ListOutput {
            directory: String,
            archives: Vec<ListedArchive>,
        }

        let data = ListOutput {
            directory: dir.display().to_string(),
            archives: archives
                .iter()
                .enumerate()
                .map(|(idx, archive)| ListedArchive {
                    index: idx + 1,
                    name: archive.display_name(),
                    path: archive.path().display().to_string(),
                    kind: archive.kind().name(),
                })
                .collect(),
        };

        Self::output(&JsonOutput::success("list", data))
    }

    fn format_archive_started(&self, _archive: &ArchiveFile, _position: usize, _total: usize) {}

    fn format_archive_result(&self, _item: &BatchItem) {}

    fn format_summary(&self, dir: &Path, items: &[BatchItem]) -> Result<()> {
        Self::output(&Self::extract_output(dir, items))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("extract", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
