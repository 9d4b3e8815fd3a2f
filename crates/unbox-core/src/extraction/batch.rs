//! Sequential extraction of several archives.

use tracing::debug;
use tracing::warn;

use crate::ArchiveFile;
use crate::ExtractionError;
use crate::ExtractionResult;
use crate::NoopProgress;
use crate::Notification;
use crate::Notifier;
use crate::ProgressCallback;
use crate::Result;

use super::ExtractionEngine;

/// Which archives of a listing to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Every archive, in listing order.
    All,
    /// One archive by 0-based position.
    Single(usize),
}

/// An archive together with the outcome of extracting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// The archive that was attempted.
    pub archive: ArchiveFile,
    /// What happened.
    pub result: ExtractionResult,
}

/// Receives batch lifecycle events.
pub trait BatchObserver {
    /// Called before an archive is extracted. Returns the progress sink for
    /// that archive.
    ///
    /// `position` is 1-based within the selected archives.
    fn archive_started(
        &mut self,
        archive: &ArchiveFile,
        position: usize,
        total: usize,
    ) -> Box<dyn ProgressCallback>;

    /// Called after an archive has been attempted and its notification sent.
    fn archive_finished(&mut self, item: &BatchItem);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {
    fn archive_started(
        &mut self,
        _archive: &ArchiveFile,
        _position: usize,
        _total: usize,
    ) -> Box<dyn ProgressCallback> {
        Box::new(NoopProgress)
    }

    fn archive_finished(&mut self, _item: &BatchItem) {}
}

impl ExtractionEngine {
    /// Extracts the selected archives one after another.
    ///
    /// A failure never stops the batch; every selected archive yields one
    /// [`BatchItem`], in input order. After each attempt a notification is
    /// sent; delivery errors are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::SelectionOutOfRange`] before extracting
    /// anything when a single selection does not name a listed archive.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use unbox_core::ExtractConfig;
    /// use unbox_core::ExtractionEngine;
    /// use unbox_core::NoopNotifier;
    /// use unbox_core::NoopObserver;
    /// use unbox_core::Selection;
    /// use unbox_core::scan_directory;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ExtractConfig::default();
    /// let archives = scan_directory("/home/me/Downloads", &config)?;
    /// let engine = ExtractionEngine::new("/home/me/Downloads", config);
    /// let items = engine.run_batch(&archives, Selection::All, &NoopNotifier, &mut NoopObserver)?;
    /// println!("{} attempted", items.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_batch(
        &self,
        archives: &[ArchiveFile],
        selection: Selection,
        notifier: &dyn Notifier,
        observer: &mut dyn BatchObserver,
    ) -> Result<Vec<BatchItem>> {
        let selected = match selection {
            Selection::All => archives,
            Selection::Single(index) => {
                if index >= archives.len() {
                    return Err(ExtractionError::SelectionOutOfRange {
                        index: index + 1,
                        len: archives.len(),
                    });
                }
                &archives[index..=index]
            }
        };

        let total = selected.len();
        debug!(total, ?selection, "starting batch");

        let mut items = Vec::with_capacity(total);
        for (offset, archive) in selected.iter().enumerate() {
            let mut progress = observer.archive_started(archive, offset + 1, total);
            let result = self.extract_file(archive, progress.as_mut());

            if let Some(notification) = Notification::for_result(archive.path(), &result)
                && let Err(err) = notifier.notify(&notification)
            {
                warn!(
                    archive = %archive.path().display(),
                    error = %err,
                    "failed to deliver notification"
                );
            }

            let item = BatchItem {
                archive: archive.clone(),
                result,
            };
            observer.archive_finished(&item);
            items.push(item);
        }

        Ok(items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ExtractConfig;
    use crate::FailureReason;
    use crate::test_utils::FailingNotifier;
    use crate::test_utils::RecordingNotifier;
    use crate::test_utils::create_test_zip;
    use crate::test_utils::write_archive;
    use std::path::Path;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Log {
        events: Vec<String>,
    }

    impl BatchObserver for Log {
        fn archive_started(
            &mut self,
            archive: &ArchiveFile,
            position: usize,
            total: usize,
        ) -> Box<dyn ProgressCallback> {
            self.events
                .push(format!("start {} {position}/{total}", archive.display_name()));
            Box::new(NoopProgress)
        }

        fn archive_finished(&mut self, item: &BatchItem) {
            self.events.push(format!(
                "finish {} {}",
                item.archive.display_name(),
                item.result.is_success()
            ));
        }
    }

    fn listing(dir: &Path, names: &[&str]) -> Vec<ArchiveFile> {
        let config = ExtractConfig::default();
        names
            .iter()
            .map(|name| {
                let data = create_test_zip(&[(format!("{name}.txt").as_str(), "content")]);
                ArchiveFile::new(write_archive(dir, name, &data), &config)
            })
            .collect()
    }

    #[test]
    fn test_all_in_order_with_notifications() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let archives = listing(src.path(), &["a.zip", "b.zip"]);
        let engine = ExtractionEngine::new(dest.path(), ExtractConfig::default());
        let notifier = RecordingNotifier::new();
        let mut log = Log::default();

        let items = engine
            .run_batch(&archives, Selection::All, &notifier, &mut log)
            .unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.result.is_success()));
        assert_eq!(
            log.events,
            [
                "start a.zip 1/2",
                "finish a.zip true",
                "start b.zip 2/2",
                "finish b.zip true"
            ]
        );
        let titles: Vec<_> = notifier.sent().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, ["Extraction Complete", "Extraction Complete"]);
    }

    #[test]
    fn test_single_selection() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let archives = listing(src.path(), &["a.zip", "b.zip", "c.zip"]);
        let engine = ExtractionEngine::new(dest.path(), ExtractConfig::default());

        let items = engine
            .run_batch(&archives, Selection::Single(1), &RecordingNotifier::new(), &mut NoopObserver)
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].archive.display_name(), "b.zip");
        assert!(dest.path().join("b.zip.txt").exists());
        assert!(!dest.path().join("a.zip.txt").exists());
    }

    #[test]
    fn test_out_of_range_extracts_nothing() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let archives = listing(src.path(), &["a.zip"]);
        let engine = ExtractionEngine::new(dest.path(), ExtractConfig::default());
        let notifier = RecordingNotifier::new();

        let err = engine
            .run_batch(&archives, Selection::Single(1), &notifier, &mut NoopObserver)
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractionError::SelectionOutOfRange { index: 2, len: 1 }
        ));
        assert!(notifier.sent().is_empty());
        assert_eq!(std::fs::read_dir(dest.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_notifier_failure_is_swallowed() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let archives = listing(src.path(), &["a.zip", "b.zip"]);
        let engine = ExtractionEngine::new(dest.path(), ExtractConfig::default());

        let items = engine
            .run_batch(&archives, Selection::All, &FailingNotifier, &mut NoopObserver)
            .unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.result.is_success()));
    }

    #[test]
    fn test_unsupported_is_not_notified() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let rar = ArchiveFile::new(write_archive(src.path(), "x.rar", b"Rar!"), &config);
        let engine = ExtractionEngine::new(dest.path(), config);
        let notifier = RecordingNotifier::new();

        let items = engine
            .run_batch(&[rar], Selection::All, &notifier, &mut NoopObserver)
            .unwrap();

        assert_eq!(
            items[0].result,
            ExtractionResult::Failure(FailureReason::UnsupportedFormat)
        );
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_empty_listing() {
        let engine = ExtractionEngine::new(".", ExtractConfig::default());
        let items = engine
            .run_batch(&[], Selection::All, &RecordingNotifier::new(), &mut NoopObserver)
            .unwrap();
        assert!(items.is_empty());
    }
}
