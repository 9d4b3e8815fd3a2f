//! Archive kind detection from file names.

use std::path::Path;

use crate::ExtractConfig;

/// Extraction strategy a file name maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// ZIP container.
    Zip,
    /// Tar container, optionally wrapped in a compression layer.
    Tar,
    /// Anything the dispatcher does not handle.
    Unsupported,
}

impl ArchiveKind {
    /// Lowercase name used in logs and JSON output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Suffix table, longest suffix first so `.tar.gz` wins over `.gz`.
///
/// The trailing flag marks suffixes that only apply when bare `.gz` files
/// are treated as tar archives.
const SUFFIXES: &[(&str, ArchiveKind, bool)] = &[
    (".tar.gz", ArchiveKind::Tar, false),
    (".tgz", ArchiveKind::Tar, false),
    (".tar", ArchiveKind::Tar, false),
    (".zip", ArchiveKind::Zip, false),
    (".gz", ArchiveKind::Tar, true),
];

/// Classifies a path by its file name suffix with the default configuration.
///
/// Matching is case-sensitive: `ARCHIVE.ZIP` is unsupported.
///
/// # Examples
///
/// ```
/// use unbox_core::ArchiveKind;
/// use unbox_core::classify;
///
/// assert_eq!(classify("photos.zip"), ArchiveKind::Zip);
/// assert_eq!(classify("src.tar.gz"), ArchiveKind::Tar);
/// assert_eq!(classify("notes.rar"), ArchiveKind::Unsupported);
/// ```
pub fn classify<P: AsRef<Path>>(path: P) -> ArchiveKind {
    classify_with(path, &ExtractConfig::default())
}

/// Classifies a path by its file name suffix.
pub fn classify_with<P: AsRef<Path>>(path: P, config: &ExtractConfig) -> ArchiveKind {
    let Some(name) = path.as_ref().file_name() else {
        return ArchiveKind::Unsupported;
    };
    let name = name.as_encoded_bytes();

    SUFFIXES
        .iter()
        .filter(|(_, _, lenient_only)| config.gz_as_tar || !lenient_only)
        .find(|(suffix, _, _)| name.ends_with(suffix.as_bytes()))
        .map_or(ArchiveKind::Unsupported, |(_, kind, _)| *kind)
}
