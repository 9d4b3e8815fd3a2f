//! Batch extraction of zip and tar archives found in a directory.
//!
//! `unbox-core` classifies files by name, extracts zip archives (after an
//! integrity pass) and tar archives (with transparent gzip, bzip2, xz or zstd
//! decompression), and reports each outcome as an [`ExtractionResult`]
//! instead of an error, so a batch keeps going past damaged files.
//!
//! # Examples
//!
//! ```no_run
//! use unbox_core::ExtractConfig;
//! use unbox_core::ExtractionEngine;
//! use unbox_core::NoopNotifier;
//! use unbox_core::NoopObserver;
//! use unbox_core::Selection;
//! use unbox_core::scan_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::default();
//! let archives = scan_directory("/home/me/Downloads", &config)?;
//! let engine = ExtractionEngine::new("/home/me/Downloads", config);
//!
//! for item in engine.run_batch(&archives, Selection::All, &NoopNotifier, &mut NoopObserver)? {
//!     println!("{}: {}", item.archive.display_name(), item.result.is_success());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod notify;
pub mod report;
pub mod scan;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_tar;
pub use api::extract_zip;
pub use archive::ArchiveFile;
pub use config::ExtractConfig;
pub use error::ExtractionError;
pub use error::FailureReason;
pub use error::Result;
pub use extraction::BatchItem;
pub use extraction::BatchObserver;
pub use extraction::ExtractionEngine;
pub use extraction::NoopObserver;
pub use extraction::Selection;
pub use formats::ArchiveKind;
pub use formats::Compression;
pub use formats::detect::classify;
pub use formats::detect::classify_with;
pub use notify::NoopNotifier;
pub use notify::Notification;
pub use notify::Notifier;
pub use notify::NotifyError;
pub use report::ExtractionReport;
pub use report::ExtractionResult;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use scan::SCAN_PATTERNS;
pub use scan::scan_directory;
