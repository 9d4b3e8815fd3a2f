//! Progress bar and batch observer for CLI runs.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::BatchItem;
use unbox_core::BatchObserver;
use unbox_core::NoopProgress;
use unbox_core::ProgressCallback;

use crate::output::OutputFormatter;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Shows entries processed and bytes written for one archive. Tar archives
/// do not announce their entry count, so the bar length grows as entries
/// arrive. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    label: String,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a progress bar labelled with the archive name.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);

        // Template: "Extracting a.zip (1.5 MB) [████████░░░░] 42/100 entries (3s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} entries ({elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        let progress = Self {
            bar,
            label: label.to_string(),
            bytes_written: 0,
        };
        progress.refresh_message();
        progress
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn refresh_message(&self) {
        self.bar.set_message(format!(
            "Extracting {} ({})",
            self.label,
            humanize_bytes(self.bytes_written)
        ));
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, total: usize, current: usize) {
        let len = if total > 0 { total } else { current };
        if self.bar.length() != Some(len as u64) {
            self.bar.set_length(len as u64);
        }
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.refresh_message();
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Forwards batch events to the output formatter and hands out progress bars.
pub struct CliObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    show_progress: bool,
}

impl<'a> CliObserver<'a> {
    pub const fn new(formatter: &'a dyn OutputFormatter, show_progress: bool) -> Self {
        Self {
            formatter,
            show_progress,
        }
    }
}

impl BatchObserver for CliObserver<'_> {
    fn archive_started(
        &mut self,
        archive: &ArchiveFile,
        position: usize,
        total: usize,
    ) -> Box<dyn ProgressCallback> {
        self.formatter
            .format_archive_started(archive, position, total);
        if self.show_progress {
            Box::new(CliProgress::new(&archive.display_name()))
        } else {
            Box::new(NoopProgress)
        }
    }

    fn archive_finished(&mut self, item: &BatchItem) {
        self.formatter.format_archive_result(item);
    }
}

/// Converts bytes to human-readable format (KB, MB, GB, TB).
pub fn humanize_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
