//! Tar archive format handler.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;

use super::compression::Compression;
use super::traits::ArchiveFormat;

/// Tar archive handler with transparent decompression.
///
/// There is no pre-validation pass: a malformed header or a damaged
/// compressed stream surfaces as an error while entries are being unpacked,
/// so earlier entries may already be on disk. A stream without a single
/// entry is rejected as an invalid archive.
#[derive(Debug, Clone)]
pub struct TarArchive {
    path: PathBuf,
}

impl TarArchive {
    /// Creates a handler for the tar file at `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the archive.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArchiveFormat for TarArchive {
    fn extract(
        &mut self,
        dest: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let file = File::open(&self.path)?;
        if file.metadata()?.len() == 0 {
            return Err(ExtractionError::InvalidArchive("empty file".to_string()));
        }

        let (codec, reader) = Compression::detect_and_wrap(BufReader::new(file))?;
        debug!(archive = %self.path.display(), compression = codec.name(), "opened tar archive");

        let mut archive = tar::Archive::new(reader);
        let mut report = ExtractionReport::new();

        let entries = archive
            .entries()
            .map_err(ExtractionError::from_tar)?;

        let mut seen_entry = false;
        for (index, entry) in entries.enumerate() {
            seen_entry = true;
            let mut entry = entry.map_err(ExtractionError::from_tar)?;
            let path = entry
                .path()
                .map_err(ExtractionError::from_tar)?
                .into_owned();
            let entry_type = entry.header().entry_type();
            let size = entry.size();

            progress.on_entry_start(&path, 0, index + 1);

            if !entry.unpack_in(dest).map_err(ExtractionError::from_tar)? {
                warn!(entry = %path.display(), "skipping tar entry with unsafe path");
                report.entries_skipped += 1;
                report.add_warning(format!("skipped entry with unsafe path: {}", path.display()));
                continue;
            }

            if entry_type.is_dir() {
                report.directories_created += 1;
            } else if entry_type.is_file() {
                report.files_extracted += 1;
                report.bytes_written += size;
                progress.on_bytes_written(size);
            }

            progress.on_entry_complete(&path);
        }

        if !seen_entry {
            return Err(ExtractionError::InvalidArchive("empty archive".to_string()));
        }

        Ok(report)
    }

    fn format_name(&self) -> &str {
        "tar"
    }
}
