//! ZIP archive format handler.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;

use super::traits::ArchiveFormat;

/// ZIP archive handler.
///
/// Extraction is all-or-nothing with respect to entry integrity: unless
/// verification is disabled, every entry is read once (which makes the zip
/// library check its CRC-32) before the first file is written.
#[derive(Debug, Clone)]
pub struct ZipArchive {
    path: PathBuf,
    verify: bool,
}

impl ZipArchive {
    /// Creates a handler for the zip file at `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            verify: true,
        }
    }

    /// Enables or disables the integrity pass.
    #[must_use]
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Returns the path of the archive.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads every entry to the end, returning the first one whose data fails
/// the library's consistency checks.
fn verify_entries<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> Result<()> {
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }

        if let Err(err) = io::copy(&mut entry, &mut io::sink()) {
            return Err(ExtractionError::CorruptedEntry {
                entry: entry.name().to_string(),
                reason: err.to_string(),
            });
        }
    }
    Ok(())
}

impl ArchiveFormat for ZipArchive {
    fn extract(
        &mut self,
        dest: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let file = File::open(&self.path)?;
        let mut archive = zip::ZipArchive::new(BufReader::new(file))?;
        let total = archive.len();
        debug!(archive = %self.path.display(), entries = total, "opened zip archive");

        if self.verify {
            verify_entries(&mut archive)?;
        }

        let mut report = ExtractionReport::new();

        for index in 0..total {
            let mut entry = archive.by_index(index)?;

            let Some(relative) = entry.enclosed_name() else {
                warn!(entry = entry.name(), "skipping zip entry with unsafe path");
                report.entries_skipped += 1;
                report.add_warning(format!("skipped entry with unsafe path: {}", entry.name()));
                continue;
            };

            progress.on_entry_start(&relative, total, index + 1);
            let target = dest.join(&relative);

            if entry.is_dir() {
                fs::create_dir_all(&target)?;
                report.directories_created += 1;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut writer = BufWriter::with_capacity(64 * 1024, File::create(&target)?);
                let written = io::copy(&mut entry, &mut writer)?;
                writer.flush()?;

                report.files_extracted += 1;
                report.bytes_written += written;
                progress.on_bytes_written(written);
            }

            progress.on_entry_complete(&relative);
        }

        Ok(report)
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}
