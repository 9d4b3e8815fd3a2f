//! List command implementation

use super::Outcome;
use crate::output::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use unbox_core::ArchiveFile;

pub fn execute(
    target: &Path,
    archives: &[ArchiveFile],
    formatter: &dyn OutputFormatter,
) -> Result<Outcome> {
    formatter.format_listing(target, archives)?;
    Ok(Outcome::Success)
}
