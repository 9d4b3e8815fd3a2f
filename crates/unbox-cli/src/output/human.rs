//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::formatter::Tally;
use crate::error::directory_missing_message;
use crate::error::failure_message;
use crate::error::hint;
use crate::error::success_message;
use crate::progress::humanize_bytes;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::BatchItem;
use unbox_core::ExtractionReport;
use unbox_core::ExtractionResult;
use unbox_core::FailureReason;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            self.line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            self.line(message);
        }
    }

    fn failure_line(&self, message: &str) {
        if self.use_colors {
            self.line(&format!("{} {message}", style("✗").red().bold()));
        } else {
            self.line(message);
        }
    }

    fn warning_line(&self, message: &str) {
        if self.use_colors {
            self.line(&format!("  {} {message}", style("⚠").yellow().bold()));
        } else {
            self.line(&format!("  WARNING: {message}"));
        }
    }

    fn report_details(&self, report: &ExtractionReport) {
        self.line(&format!(
            "  Files extracted: {}",
            Self::format_number(report.files_extracted)
        ));
        self.line(&format!(
            "  Directories: {}",
            Self::format_number(report.directories_created)
        ));
        self.line(&format!("  Total size: {}", humanize_bytes(report.bytes_written)));
        self.line(&format!("  Duration: {:?}", report.duration));
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_directory(&self, dir: &Path) {
        if !self.quiet {
            self.line(&format!("Changed to directory: {}", dir.display()));
        }
    }

    fn format_directory_missing(&self, dir: &Path) -> Result<()> {
        self.failure_line(&directory_missing_message(dir));
        Ok(())
    }

    fn format_no_archives(&self, _dir: &Path) -> Result<()> {
        if !self.quiet {
            self.line("No supported compressed files found in the directory.");
        }
        Ok(())
    }

    fn format_listing(&self, _dir: &Path, archives: &[ArchiveFile]) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.line("Available compressed files:");
        for (idx, archive) in archives.iter().enumerate() {
            if self.verbose {
                self.line(&format!(
                    "{}: {} ({})",
                    idx + 1,
                    archive.display_name(),
                    archive.kind().name()
                ));
            } else {
                self.line(&format!("{}: {}", idx + 1, archive.display_name()));
            }
        }
        Ok(())
    }

    fn format_archive_started(&self, archive: &ArchiveFile, position: usize, total: usize) {
        if self.verbose {
            self.line(&format!(
                "[{position}/{total}] Extracting {}",
                archive.display_name()
            ));
        }
    }

    fn format_archive_result(&self, item: &BatchItem) {
        match &item.result {
            ExtractionResult::Success(report) => {
                if self.quiet {
                    return;
                }
                self.success_line(&success_message(&item.archive));
                if self.verbose {
                    self.report_details(report);
                }
                for warning in &report.warnings {
                    self.warning_line(warning);
                }
            }
            ExtractionResult::Failure(FailureReason::UnsupportedFormat) => {
                if !self.quiet {
                    self.line(&failure_message(&item.archive, &FailureReason::UnsupportedFormat));
                }
            }
            ExtractionResult::Failure(reason) => {
                self.failure_line(&failure_message(&item.archive, reason));
                if self.verbose {
                    self.line(&format!("  Reason: {reason}"));
                    if let Some(hint) = hint(reason) {
                        self.line(&format!("  HINT: {hint}"));
                    }
                }
            }
        }
    }

    fn format_summary(&self, _dir: &Path, items: &[BatchItem]) -> Result<()> {
        if self.quiet || items.len() < 2 {
            return Ok(());
        }

        let tally = Tally::of(items);
        self.line("");
        self.line(&format!(
            "Extracted {} of {} archives ({} failed, {} skipped)",
            tally.succeeded,
            items.len(),
            tally.failed,
            tally.skipped
        ));
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            self.line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            self.line(&format!("ERROR: {error:?}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_small() {
        assert_eq!(HumanFormatter::format_number(0), "0");
        assert_eq!(HumanFormatter::format_number(42), "42");
        assert_eq!(HumanFormatter::format_number(999), "999");
    }

    #[test]
    fn test_format_number_thousands() {
        assert_eq!(HumanFormatter::format_number(1000), "1,000");
        assert_eq!(HumanFormatter::format_number(1_234_567), "1,234,567");
    }
}
