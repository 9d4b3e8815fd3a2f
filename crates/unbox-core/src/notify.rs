//! User notifications about extraction outcomes.
//!
//! Delivery is a side effect behind the [`Notifier`] trait so extraction and
//! batch logic can run without a desktop session. Callers treat delivery as
//! best-effort: a failed notification is logged, never turned into an
//! extraction failure.

use std::path::Path;

use thiserror::Error;

use crate::ExtractionResult;
use crate::FailureReason;

/// Errors from a notification backend.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// No backend is available on this platform or session.
    #[error("notifications unavailable: {0}")]
    Unavailable(String),

    /// The backend was found but delivery failed.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// A notification ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Notification {
    /// Creates a notification.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Builds the notification for an extraction outcome.
    ///
    /// Unsupported files produce no notification; they are only skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbox_core::ExtractionReport;
    /// use unbox_core::ExtractionResult;
    /// use unbox_core::FailureReason;
    /// use unbox_core::Notification;
    ///
    /// let ok = ExtractionResult::Success(ExtractionReport::new());
    /// let note = Notification::for_result("photos.zip", &ok).unwrap();
    /// assert_eq!(note.title, "Extraction Complete");
    ///
    /// let skipped = ExtractionResult::Failure(FailureReason::UnsupportedFormat);
    /// assert!(Notification::for_result("notes.rar", &skipped).is_none());
    /// ```
    pub fn for_result<P: AsRef<Path>>(archive: P, result: &ExtractionResult) -> Option<Self> {
        let name = display_name(archive.as_ref());
        let notification = match result {
            ExtractionResult::Success(_) => Self::new(
                "Extraction Complete",
                format!("{name} was successfully extracted."),
            ),
            ExtractionResult::Failure(FailureReason::Corrupted {
                entry: Some(entry),
                ..
            }) => Self::new(
                "Corrupted File",
                format!("File {name} contains a bad file: {entry}."),
            ),
            ExtractionResult::Failure(FailureReason::Corrupted { entry: None, .. }) => Self::new(
                "Extraction Failed",
                format!("Failed to decompress {name}. It may be corrupted."),
            ),
            ExtractionResult::Failure(FailureReason::PermissionDenied { .. }) => Self::new(
                "Permission Denied",
                format!("Cannot extract {name}. Check your permissions."),
            ),
            ExtractionResult::Failure(FailureReason::Unknown(_)) => Self::new(
                "Unexpected Error",
                format!("An error occurred while extracting {name}."),
            ),
            ExtractionResult::Failure(FailureReason::UnsupportedFormat) => return None,
        };
        Some(notification)
    }

    /// Notification for a target directory that does not exist.
    pub fn directory_not_found<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(
            "Directory Not Found",
            format!("Could not find directory: {}.", dir.as_ref().display()),
        )
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Capability to show a notification to the user.
pub trait Notifier {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is missing or delivery fails.
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Notifier that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}
