//! User-facing wording for extraction outcomes and CLI errors.
//!
//! Converts unbox-core's typed outcomes into the status lines printed after
//! each archive, and core errors into anyhow errors with actionable hints.

use anyhow::anyhow;
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::ExtractionError;
use unbox_core::FailureReason;

/// Status line for a successful extraction.
pub fn success_message(archive: &ArchiveFile) -> String {
    format!("File {} successfully decompressed.", archive.display_name())
}

/// Status line for a failed or skipped extraction.
pub fn failure_message(archive: &ArchiveFile, reason: &FailureReason) -> String {
    let name = archive.display_name();
    match reason {
        FailureReason::Corrupted {
            entry: Some(entry), ..
        } => format!("Warning: {name} contains a bad file: {entry}"),
        FailureReason::Corrupted { entry: None, .. } => format!(
            "Failed to decompress {name}. It may be corrupted or not a valid {} archive.",
            archive.kind().name()
        ),
        FailureReason::PermissionDenied { .. } => {
            format!("Permission denied: Cannot extract {name}. Please check your permissions.")
        }
        FailureReason::UnsupportedFormat => format!("Unsupported file format: {name}"),
        FailureReason::Unknown(detail) => format!("An unexpected error occurred: {detail}"),
    }
}

/// Extra guidance shown in verbose mode.
pub const fn hint(reason: &FailureReason) -> Option<&'static str> {
    match reason {
        FailureReason::Corrupted { .. } => {
            Some("Download the archive again; a partial or damaged download is the usual cause.")
        }
        FailureReason::PermissionDenied { .. } => {
            Some("Make sure the target directory is writable by the current user.")
        }
        FailureReason::UnsupportedFormat => Some("Supported formats: zip, tar, tar.gz, tgz, gz"),
        FailureReason::Unknown(_) => None,
    }
}

/// Message for a target directory that does not exist.
pub fn directory_missing_message(dir: &Path) -> String {
    format!("Directory {} does not exist.", dir.display())
}

/// Converts a batch error into a user-friendly anyhow error.
pub fn convert_batch_error(err: ExtractionError) -> anyhow::Error {
    match err {
        ExtractionError::SelectionOutOfRange { index, len } => anyhow!(
            "Invalid selection {index}: the directory holds {len} supported archive(s)\n\
             HINT: Run with --list to see the numbered archives."
        ),
        other => anyhow::Error::from(other).context("Batch extraction failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbox_core::ExtractConfig;

    fn archive(name: &str) -> ArchiveFile {
        ArchiveFile::new(name, &ExtractConfig::default())
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message(&archive("/dl/a.zip")),
            "File a.zip successfully decompressed."
        );
    }

    #[test]
    fn test_failure_messages() {
        let zip = archive("a.zip");
        let tar = archive("b.tar.gz");

        let bad_entry = FailureReason::Corrupted {
            entry: Some("x.txt".into()),
            detail: String::new(),
        };
        assert_eq!(
            failure_message(&zip, &bad_entry),
            "Warning: a.zip contains a bad file: x.txt"
        );

        let broken = FailureReason::Corrupted {
            entry: None,
            detail: String::new(),
        };
        assert_eq!(
            failure_message(&tar, &broken),
            "Failed to decompress b.tar.gz. It may be corrupted or not a valid tar archive."
        );

        let denied = FailureReason::PermissionDenied {
            detail: String::new(),
        };
        assert!(failure_message(&zip, &denied).starts_with("Permission denied: Cannot extract a.zip"));

        assert_eq!(
            failure_message(&archive("c.rar"), &FailureReason::UnsupportedFormat),
            "Unsupported file format: c.rar"
        );
        assert_eq!(
            failure_message(&zip, &FailureReason::Unknown("disk on fire".into())),
            "An unexpected error occurred: disk on fire"
        );
    }

    #[test]
    fn test_hints() {
        assert!(hint(&FailureReason::UnsupportedFormat).is_some());
        assert!(hint(&FailureReason::Unknown(String::new())).is_none());
    }

    #[test]
    fn test_convert_selection_error() {
        let err = convert_batch_error(ExtractionError::SelectionOutOfRange { index: 5, len: 2 });
        let msg = format!("{err:?}");
        assert!(msg.contains("Invalid selection 5"));
        assert!(msg.contains("HINT"));
    }
}
