//! Common traits for archive format handlers.

use std::path::Path;

use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;

/// Trait for archive format handlers.
pub trait ArchiveFormat {
    /// Extracts every entry of the archive below `dest`, preserving the
    /// archive's relative paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive is malformed or the destination
    /// cannot be written.
    fn extract(
        &mut self,
        dest: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}
