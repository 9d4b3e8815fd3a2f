//! Core extraction engine.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::ArchiveFile;
use crate::ArchiveKind;
use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::ExtractionResult;
use crate::FailureReason;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::TarArchive;
use crate::formats::ZipArchive;

/// Classifies archives and runs the matching format handler.
///
/// Every error raised by a handler is converted into
/// [`ExtractionResult::Failure`]; nothing escapes [`ExtractionEngine::extract`].
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    dest: PathBuf,
    config: ExtractConfig,
}

impl ExtractionEngine {
    /// Creates an engine that extracts into `dest`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dest: P, config: ExtractConfig) -> Self {
        Self {
            dest: dest.into(),
            config,
        }
    }

    /// Creates an engine that extracts into the process working directory.
    #[must_use]
    pub fn in_current_dir(config: ExtractConfig) -> Self {
        Self::new(".", config)
    }

    /// Returns the destination directory.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Classifies `path` under this engine's configuration.
    pub fn classify<P: Into<PathBuf>>(&self, path: P) -> ArchiveFile {
        ArchiveFile::new(path, &self.config)
    }

    /// Extracts the archive at `path`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use unbox_core::ExtractConfig;
    /// use unbox_core::ExtractionEngine;
    ///
    /// let engine = ExtractionEngine::new("/tmp/out", ExtractConfig::default());
    /// let result = engine.extract("/tmp/in/photos.zip");
    /// println!("success: {}", result.is_success());
    /// ```
    pub fn extract<P: Into<PathBuf>>(&self, path: P) -> ExtractionResult {
        self.extract_file(&self.classify(path), &mut NoopProgress)
    }

    /// Extracts the archive at `path`, reporting per-entry progress.
    pub fn extract_with_progress<P: Into<PathBuf>>(
        &self,
        path: P,
        progress: &mut dyn ProgressCallback,
    ) -> ExtractionResult {
        self.extract_file(&self.classify(path), progress)
    }

    /// Extracts an already classified archive.
    ///
    /// Unsupported files fail with [`FailureReason::UnsupportedFormat`]
    /// without touching the filesystem.
    pub fn extract_file(
        &self,
        archive: &ArchiveFile,
        progress: &mut dyn ProgressCallback,
    ) -> ExtractionResult {
        let mut handler: Box<dyn ArchiveFormat> = match archive.kind() {
            ArchiveKind::Zip => Box::new(
                ZipArchive::new(archive.path()).with_verification(self.config.verify_zip),
            ),
            ArchiveKind::Tar => Box::new(TarArchive::new(archive.path())),
            ArchiveKind::Unsupported => {
                info!(archive = %archive.path().display(), "skipping unsupported file");
                return ExtractionResult::Failure(FailureReason::UnsupportedFormat);
            }
        };

        let start = Instant::now();
        let outcome = self.run(handler.as_mut(), progress);
        progress.on_complete();

        match outcome {
            Ok(mut report) => {
                report.duration = start.elapsed();
                info!(
                    archive = %archive.path().display(),
                    format = handler.format_name(),
                    files = report.files_extracted,
                    bytes = report.bytes_written,
                    "extracted archive"
                );
                ExtractionResult::Success(report)
            }
            Err(err) => {
                let reason = err.reason();
                info!(
                    archive = %archive.path().display(),
                    format = handler.format_name(),
                    reason = reason.label(),
                    error = %err,
                    "extraction failed"
                );
                ExtractionResult::Failure(reason)
            }
        }
    }

    fn run(
        &self,
        handler: &mut dyn ArchiveFormat,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        fs::create_dir_all(&self.dest)?;
        handler.extract(&self.dest, progress)
    }
}
