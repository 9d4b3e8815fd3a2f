//! Unbox CLI - extracts the zip and tar archives found in a directory.

mod cli;
mod commands;
mod error;
mod interactive;
mod notify;
mod output;
mod progress;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use std::io;
use std::io::IsTerminal;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unbox_core::NoopNotifier;
use unbox_core::Notifier;
use unbox_core::scan_directory;

use crate::commands::Outcome;
use crate::interactive::Prompter;
use crate::notify::DesktopNotifier;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Some(shell) = cli.completions {
        commands::completion::execute(shell);
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(&cli);

    match run(&cli, &*formatter) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            formatter.format_error(&err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with JSON on stdout. `RUST_LOG`
/// overrides the level picked from the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &cli::Cli, formatter: &dyn OutputFormatter) -> Result<Outcome> {
    let notifier: Box<dyn Notifier> = if cli.no_notify {
        Box::new(NoopNotifier)
    } else {
        Box::new(DesktopNotifier::new())
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    // Prompts stay off stdout when it carries JSON.
    let prompt_output: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let mut prompter = Prompter::new(stdin.lock(), prompt_output);

    let Some(target) =
        commands::enter_directory(cli, interactive, formatter, &*notifier, &mut prompter)?
    else {
        return Ok(Outcome::DirectoryMissing);
    };

    let archives = scan_directory(&target, &commands::extract_config(cli))
        .with_context(|| format!("failed to read directory {}", target.display()))?;

    if archives.is_empty() {
        formatter.format_no_archives(&target)?;
        return Ok(Outcome::Success);
    }

    if cli.list {
        return commands::list::execute(&target, &archives, formatter);
    }

    commands::extract::execute(cli, &target, &archives, formatter, &*notifier, &mut prompter)
}
