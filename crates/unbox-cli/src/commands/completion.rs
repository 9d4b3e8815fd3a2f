//! `--completions` support.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::io::Write;

const BIN_NAME: &str = "unbox";

/// Prints the completion script for `shell` to stdout.
///
/// Runs before any directory handling, so `unbox --completions zsh` works
/// without a Downloads folder.
pub fn execute(shell: Shell) {
    write_script(shell, &mut io::stdout());
}

fn write_script<W: Write>(shell: Shell, out: &mut W) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}
