//! High-level public API for one-off extractions.

use std::path::Path;

use crate::ArchiveFile;
use crate::ArchiveKind;
use crate::ExtractConfig;
use crate::ExtractionEngine;
use crate::ExtractionResult;
use crate::NoopProgress;

/// Extracts an archive into `output_dir`, choosing the handler from the
/// file name.
///
/// # Arguments
///
/// * `archive_path` - Path to the archive file
/// * `output_dir` - Directory where entries are written, created if missing
/// * `config` - Extraction configuration
///
/// # Examples
///
/// ```no_run
/// use unbox_core::ExtractConfig;
/// use unbox_core::ExtractionResult;
/// use unbox_core::extract_archive;
///
/// match extract_archive("backup.tar.gz", "/tmp/output", &ExtractConfig::default()) {
///     ExtractionResult::Success(report) => println!("{} files", report.files_extracted),
///     ExtractionResult::Failure(reason) => eprintln!("failed: {reason}"),
/// }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    config: &ExtractConfig,
) -> ExtractionResult {
    ExtractionEngine::new(output_dir.as_ref(), *config).extract(archive_path.as_ref())
}

/// Extracts a zip archive regardless of its file name, with the integrity
/// pass enabled.
pub fn extract_zip<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, output_dir: Q) -> ExtractionResult {
    extract_as(archive_path.as_ref(), output_dir.as_ref(), ArchiveKind::Zip)
}

/// Extracts a tar archive regardless of its file name, detecting its outer
/// compression from the content.
pub fn extract_tar<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, output_dir: Q) -> ExtractionResult {
    extract_as(archive_path.as_ref(), output_dir.as_ref(), ArchiveKind::Tar)
}

fn extract_as(archive_path: &Path, output_dir: &Path, kind: ArchiveKind) -> ExtractionResult {
    let archive = ArchiveFile::with_kind(archive_path, kind);
    ExtractionEngine::new(output_dir, ExtractConfig::default()).extract_file(&archive, &mut NoopProgress)
}
