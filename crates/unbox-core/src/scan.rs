//! Discovery of candidate archives in a directory.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;
use tracing::warn;
use walkdir::DirEntry;
use walkdir::WalkDir;

use crate::ArchiveFile;
use crate::ExtractConfig;
use crate::Result;

/// Glob-style patterns, in the order their matches are listed.
pub const SCAN_PATTERNS: [&str; 5] = ["*.gz", "*.zip", "*.tar", "*.tar.gz", "*.tgz"];

/// Lists the archives directly inside `dir`.
///
/// Results follow [`SCAN_PATTERNS`] order, sorted by name within a pattern.
/// A file matching several patterns (`a.tar.gz` matches both `*.gz` and
/// `*.tar.gz`) is listed once, at its first match. Like shell globbing,
/// names starting with `.` are not matched. Subdirectories are not searched.
/// Symlinks count when they point at a regular file; entries that cannot be
/// inspected, such as dangling links, are logged and left out.
///
/// # Errors
///
/// Returns an error if `dir` itself cannot be read.
///
/// # Examples
///
/// ```no_run
/// use unbox_core::ExtractConfig;
/// use unbox_core::scan_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// for archive in scan_directory("/home/me/Downloads", &ExtractConfig::default())? {
///     println!("{}", archive.display_name());
/// }
/// # Ok(())
/// # }
/// ```
pub fn scan_directory<P: AsRef<Path>>(dir: P, config: &ExtractConfig) -> Result<Vec<ArchiveFile>> {
    let dir = dir.as_ref();

    let mut names: Vec<OsString> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(io::Error::from(err).into()),
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if is_regular_file(&entry) {
            names.push(entry.file_name().to_owned());
        }
    }
    names.sort();

    let mut seen = HashSet::new();
    let mut found = Vec::new();
    for pattern in SCAN_PATTERNS {
        let suffix = pattern.trim_start_matches('*');
        for name in &names {
            if matches_suffix(name, suffix) && seen.insert(name.as_os_str()) {
                found.push(ArchiveFile::new(dir.join(name), config));
            }
        }
    }

    debug!(dir = %dir.display(), candidates = found.len(), "scanned directory");
    Ok(found)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            warn!(path = %entry.path().display(), error = %err, "skipping broken symlink");
            false
        }
    }
}

fn matches_suffix(name: &OsStr, suffix: &str) -> bool {
    let name = name.as_encoded_bytes();
    !name.starts_with(b".") && name.ends_with(suffix.as_bytes())
}
