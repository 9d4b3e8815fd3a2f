//! Human and JSON renderings of scan and extraction events.

mod formatter;
mod human;
mod json;

pub use formatter::OutputFormatter;
pub use formatter::Tally;

use human::HumanFormatter;
use json::JsonFormatter;

use crate::cli::Cli;

/// Picks the formatter for the global `--json`, `--verbose` and `--quiet` flags.
///
/// `--json` takes precedence over the other two.
pub fn create_formatter(cli: &Cli) -> Box<dyn OutputFormatter> {
    if cli.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(cli.verbose, cli.quiet))
    }
}
