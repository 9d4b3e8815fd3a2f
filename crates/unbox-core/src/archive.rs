//! Candidate archive files.

use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveKind;
use crate::ExtractConfig;
use crate::formats::detect::classify_with;

/// A file path together with the strategy its name maps to.
///
/// The kind is fixed at construction; renaming the file on disk afterwards
/// does not reclassify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    path: PathBuf,
    kind: ArchiveKind,
}

impl ArchiveFile {
    /// Classifies `path` under `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbox_core::ArchiveFile;
    /// use unbox_core::ArchiveKind;
    /// use unbox_core::ExtractConfig;
    ///
    /// let file = ArchiveFile::new("release.tgz", &ExtractConfig::default());
    /// assert_eq!(file.kind(), ArchiveKind::Tar);
    /// ```
    pub fn new<P: Into<PathBuf>>(path: P, config: &ExtractConfig) -> Self {
        let path = path.into();
        let kind = classify_with(&path, config);
        Self { path, kind }
    }

    /// Pairs `path` with a kind chosen by the caller instead of its name.
    pub(crate) fn with_kind<P: Into<PathBuf>>(path: P, kind: ArchiveKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Returns the path to the archive file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the classification.
    #[must_use]
    pub const fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// File name for status lines, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}
