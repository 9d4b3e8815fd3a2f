//! CLI argument parsing using clap.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the archives (default: your Downloads folder)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Extract every archive without asking
    #[arg(short, long, conflicts_with = "pick")]
    pub all: bool,

    /// Extract only the N-th listed archive (1-based)
    #[arg(short, long, value_name = "N", value_parser = parse_position)]
    pub pick: Option<usize>,

    /// Print the archives that would be extracted and exit
    #[arg(short, long, conflicts_with_all = ["all", "pick"])]
    pub list: bool,

    /// Do not send desktop notifications
    #[arg(long)]
    pub no_notify: bool,

    /// Skip bare .gz files instead of treating them as compressed tarballs
    #[arg(long)]
    pub strict_gz: bool,

    /// Skip the zip integrity check before extraction
    #[arg(long)]
    pub no_verify: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Parses a 1-based list position.
fn parse_position(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid position: {s}")),
    }
}
