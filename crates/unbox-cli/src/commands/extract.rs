//! Extract command implementation.

use super::Outcome;
use crate::cli::Cli;
use crate::error::convert_batch_error;
use crate::interactive::Choice;
use crate::interactive::Prompter;
use crate::output::OutputFormatter;
use crate::progress::CliObserver;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use unbox_core::ArchiveFile;
use unbox_core::BatchItem;
use unbox_core::ExtractionEngine;
use unbox_core::FailureReason;
use unbox_core::Notifier;
use unbox_core::Selection;

/// Extracts archives from the working directory into it.
///
/// `--all` and `--pick` run without questions; otherwise the user is asked
/// whether to extract everything or pick files one at a time.
pub fn execute<R: BufRead, W: Write>(
    cli: &Cli,
    target: &Path,
    archives: &[ArchiveFile],
    formatter: &dyn OutputFormatter,
    notifier: &dyn Notifier,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome> {
    let engine = ExtractionEngine::in_current_dir(super::extract_config(cli));
    // Use progress bar if TTY is detected (not quiet, not JSON, is terminal)
    let show_progress = !cli.quiet && !cli.json && CliProgress::should_show();
    let mut observer = CliObserver::new(formatter, show_progress);

    let items = if cli.all {
        run(&engine, archives, Selection::All, notifier, &mut observer)?
    } else if let Some(position) = cli.pick {
        run(
            &engine,
            archives,
            Selection::Single(position - 1),
            notifier,
            &mut observer,
        )?
    } else {
        interactive(&engine, archives, notifier, &mut observer, prompter)?
    };

    formatter.format_summary(target, &items)?;
    Ok(Outcome::from_items(&items))
}

fn run(
    engine: &ExtractionEngine,
    archives: &[ArchiveFile],
    selection: Selection,
    notifier: &dyn Notifier,
    observer: &mut CliObserver<'_>,
) -> Result<Vec<BatchItem>> {
    engine
        .run_batch(archives, selection, notifier, observer)
        .map_err(convert_batch_error)
}

fn interactive<R: BufRead, W: Write>(
    engine: &ExtractionEngine,
    archives: &[ArchiveFile],
    notifier: &dyn Notifier,
    observer: &mut CliObserver<'_>,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<BatchItem>> {
    if prompter
        .confirm("Do you want to extract all files? (y/n): ")
        .context("failed to read answer")?
    {
        return run(engine, archives, Selection::All, notifier, observer);
    }

    prompter
        .show_archives(archives)
        .context("failed to print archive list")?;

    let mut items = Vec::new();
    loop {
        let index = match prompter.choose(archives.len()).context("failed to read selection")? {
            Choice::Index(index) => index,
            Choice::Exit | Choice::Invalid => break,
        };

        let picked = run(engine, archives, Selection::Single(index), notifier, observer)?;
        let skipped = picked
            .iter()
            .all(|item| item.result.failure() == Some(&FailureReason::UnsupportedFormat));
        items.extend(picked);

        // Unsupported picks go straight back to the selection prompt.
        if skipped {
            continue;
        }
        if !prompter
            .confirm("Do you want to extract another file? (y/n): ")
            .context("failed to read answer")?
        {
            break;
        }
    }

    Ok(items)
}
