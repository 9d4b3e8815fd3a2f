//! Error types for archive extraction operations.

use std::io;

use thiserror::Error;
use zip::result::ZipError;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors raised inside the extraction strategies.
///
/// These never leave the dispatcher: [`ExtractionEngine`] converts every
/// error into a [`FailureReason`] before handing the outcome to the caller.
///
/// [`ExtractionEngine`]: crate::ExtractionEngine
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Archive kind could not be determined from the file name.
    #[error("unsupported archive format")]
    UnsupportedFormat,

    /// Archive is structurally invalid or not an archive at all.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A single entry failed the container's consistency check.
    #[error("bad entry {entry}: {reason}")]
    CorruptedEntry {
        /// Name of the entry as stored in the archive.
        entry: String,
        /// What the format library reported.
        reason: String,
    },

    /// Archive uses a feature the format library cannot decode.
    #[error("unsupported archive feature: {0}")]
    UnsupportedFeature(String),

    /// Batch selection points past the end of the archive list.
    #[error("selection {index} is out of range (1-{len})")]
    SelectionOutOfRange {
        /// 1-based index that was requested.
        index: usize,
        /// Number of archives available.
        len: usize,
    },
}

impl From<ZipError> for ExtractionError {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(io_err) => Self::Io(io_err),
            ZipError::UnsupportedArchive(msg) => Self::UnsupportedFeature(msg.to_string()),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}

impl ExtractionError {
    /// Wraps an error raised by the tar reader.
    ///
    /// The tar reader reports checksum mismatches, truncated blocks and short
    /// entry data as `ErrorKind::Other`, so those kinds (along with decoder
    /// errors) mean a malformed archive. OS-level kinds pass through.
    pub(crate) fn from_tar(err: io::Error) -> Self {
        if is_corruption_error(&err) || err.kind() == io::ErrorKind::Other {
            Self::InvalidArchive(err.to_string())
        } else {
            Self::Io(err)
        }
    }

    /// Classifies this error into the user-facing failure taxonomy.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbox_core::ExtractionError;
    /// use unbox_core::FailureReason;
    ///
    /// let err = ExtractionError::InvalidArchive("bad header".to_string());
    /// assert!(matches!(err.reason(), FailureReason::Corrupted { .. }));
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    /// let err = ExtractionError::from(io);
    /// assert!(matches!(err.reason(), FailureReason::PermissionDenied { .. }));
    /// ```
    #[must_use]
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Io(err) if is_permission_error(err) => FailureReason::PermissionDenied {
                detail: err.to_string(),
            },
            Self::Io(err) if is_corruption_error(err) => FailureReason::Corrupted {
                entry: None,
                detail: err.to_string(),
            },
            Self::InvalidArchive(detail) => FailureReason::Corrupted {
                entry: None,
                detail: detail.clone(),
            },
            Self::CorruptedEntry { entry, reason } => FailureReason::Corrupted {
                entry: Some(entry.clone()),
                detail: reason.clone(),
            },
            Self::UnsupportedFormat => FailureReason::UnsupportedFormat,
            other => FailureReason::Unknown(other.to_string()),
        }
    }
}

fn is_permission_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem
    )
}

fn is_corruption_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::InvalidInput | io::ErrorKind::UnexpectedEof
    )
}

/// Why an extraction attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The archive is malformed or one of its entries is damaged.
    Corrupted {
        /// The offending entry, when the integrity pass identified one.
        entry: Option<String>,
        /// Library-level description of the damage.
        detail: String,
    },
    /// Writing to the destination was not permitted.
    PermissionDenied {
        /// OS-level description.
        detail: String,
    },
    /// The file name does not map to a known archive kind.
    UnsupportedFormat,
    /// Any other failure.
    Unknown(String),
}

impl FailureReason {
    /// Short machine-friendly label used in JSON output and logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Corrupted { .. } => "corrupted",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::UnsupportedFormat => "unsupported_format",
            Self::Unknown(_) => "unknown",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Corrupted {
                entry: Some(entry),
                detail,
            } => write!(f, "corrupted entry {entry}: {detail}"),
            Self::Corrupted {
                entry: None,
                detail,
            } => write!(f, "corrupted archive: {detail}"),
            Self::PermissionDenied { detail } => write!(f, "permission denied: {detail}"),
            Self::UnsupportedFormat => write!(f, "unsupported archive format"),
            Self::Unknown(detail) => write!(f, "{detail}"),
        }
    }
}
