//! Command implementations.

pub mod completion;
pub mod extract;
pub mod list;

use anyhow::Context;
use anyhow::Result;
use std::env;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use unbox_core::BatchItem;
use unbox_core::ExtractConfig;
use unbox_core::Notification;
use unbox_core::Notifier;

use crate::cli::Cli;
use crate::interactive::Prompter;
use crate::output::OutputFormatter;
use crate::output::Tally;

/// How a run ended, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every attempted archive was extracted or skipped as unsupported.
    Success,
    /// The target directory does not exist.
    DirectoryMissing,
    /// At least one archive failed to extract.
    ExtractionFailed,
}

impl Outcome {
    pub fn from_items(items: &[BatchItem]) -> Self {
        if Tally::of(items).has_failures() {
            Self::ExtractionFailed
        } else {
            Self::Success
        }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::DirectoryMissing => ExitCode::from(1),
            Self::ExtractionFailed => ExitCode::from(2),
        }
    }
}

/// Builds the extraction configuration from CLI flags.
pub const fn extract_config(cli: &Cli) -> ExtractConfig {
    ExtractConfig {
        gz_as_tar: !cli.strict_gz,
        verify_zip: !cli.no_verify,
    }
}

/// Resolves the target directory and makes it the working directory.
///
/// Without a `DIR` argument the user is asked for one when `interactive`,
/// falling back to the Downloads folder. Returns `None` after reporting a
/// missing directory.
pub fn enter_directory<R: BufRead, W: Write>(
    cli: &Cli,
    interactive: bool,
    formatter: &dyn OutputFormatter,
    notifier: &dyn Notifier,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<PathBuf>> {
    let answer = match &cli.dir {
        Some(dir) => Some(dir.clone()),
        None if interactive => prompter
            .directory()
            .context("failed to read the directory prompt")?,
        None => None,
    };
    let dir = match answer {
        Some(dir) => dir,
        None => default_downloads_dir()?,
    };

    if !dir.is_dir() {
        formatter.format_directory_missing(&dir)?;
        if let Err(err) = notifier.notify(&Notification::directory_not_found(&dir)) {
            warn!(error = %err, "failed to deliver notification");
        }
        return Ok(None);
    }

    env::set_current_dir(&dir)
        .with_context(|| format!("failed to change to directory {}", dir.display()))?;
    let cwd = env::current_dir().context("failed to get current directory")?;
    formatter.format_directory(&cwd);
    Ok(Some(cwd))
}

/// The user's Downloads folder.
fn default_downloads_dir() -> Result<PathBuf> {
    let home = home::home_dir().context("cannot locate the Downloads folder: no home directory")?;
    Ok(home.join("Downloads"))
}
