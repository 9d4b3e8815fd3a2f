//! Integration tests for unbox-core.
//!
//! These tests run whole extractions against real files in temporary
//! directories.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;
use unbox_core::ArchiveFile;
use unbox_core::ArchiveKind;
use unbox_core::ExtractConfig;
use unbox_core::ExtractionEngine;
use unbox_core::ExtractionResult;
use unbox_core::FailureReason;
use unbox_core::NoopObserver;
use unbox_core::Selection;
use unbox_core::classify;
use unbox_core::extract_archive;
use unbox_core::scan_directory;
use unbox_core::test_utils::RecordingNotifier;
use unbox_core::test_utils::TarTestBuilder;
use unbox_core::test_utils::corrupt_stored_entry;
use unbox_core::test_utils::create_test_tar;
use unbox_core::test_utils::create_test_zip;
use unbox_core::test_utils::gzip;
use unbox_core::test_utils::write_archive;

/// Relative path -> contents for every regular file below `root`.
fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
                out.insert(rel, fs::read(&path).unwrap());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn dir_is_empty(dir: &Path) -> bool {
    fs::read_dir(dir).unwrap().next().is_none()
}

#[test]
fn test_classification_table() {
    assert_eq!(classify("a.zip"), ArchiveKind::Zip);
    for name in ["a.gz", "a.tgz", "a.tar", "a.tar.gz"] {
        assert_eq!(classify(name), ArchiveKind::Tar, "{name}");
    }
    for name in ["a.rar", "README", "a.7z", "a.zip.part"] {
        assert_eq!(classify(name), ArchiveKind::Unsupported, "{name}");
    }
}

#[test]
fn test_unsupported_performs_no_writes() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();

    for name in ["movie.rar", "README"] {
        let path = write_archive(src.path(), name, b"not handled");
        let result = extract_archive(&path, dest.path(), &ExtractConfig::default());
        assert_eq!(result, ExtractionResult::Failure(FailureReason::UnsupportedFormat));
    }

    assert!(dir_is_empty(dest.path()));
}

#[test]
fn test_well_formed_zip() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let path = write_archive(
        src.path(),
        "docs.zip",
        &create_test_zip(&[("a.txt", "first"), ("dir/b.txt", "second")]),
    );

    let result = extract_archive(&path, dest.path(), &ExtractConfig::default());

    let report = result.report().expect("zip should extract");
    assert_eq!(report.files_extracted, 2);
    assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "first");
    assert_eq!(fs::read_to_string(dest.path().join("dir/b.txt")).unwrap(), "second");
    assert!(path.exists(), "source archive must be kept");
}

#[test]
fn test_zip_with_bad_crc_writes_nothing() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let data = create_test_zip(&[("a.txt", "first"), ("dir/b.txt", "second entry")]);
    let path = write_archive(
        src.path(),
        "damaged.zip",
        &corrupt_stored_entry(data, b"second entry"),
    );

    let result = extract_archive(&path, dest.path(), &ExtractConfig::default());

    match result {
        ExtractionResult::Failure(FailureReason::Corrupted { entry, .. }) => {
            assert_eq!(entry.as_deref(), Some("dir/b.txt"));
        }
        other => panic!("expected corrupted, got {other:?}"),
    }
    assert!(dir_is_empty(dest.path()));
}

#[test]
fn test_compressed_tar_matches_plain_tar() {
    let src = TempDir::new().unwrap();
    let tar = TarTestBuilder::new()
        .add_file("top.txt", b"top level")
        .add_directory("nested/")
        .add_file("nested/inner.bin", &[0_u8, 1, 2, 3, 255])
        .build();

    let plain = write_archive(src.path(), "bundle.tar", &tar);
    let tar_gz = write_archive(src.path(), "bundle.tar.gz", &gzip(&tar));
    let tgz = write_archive(src.path(), "bundle.tgz", &gzip(&tar));

    let mut snapshots = Vec::new();
    for path in [plain, tar_gz, tgz] {
        let dest = TempDir::new().unwrap();
        let result = extract_archive(&path, dest.path(), &ExtractConfig::default());
        assert!(result.is_success(), "{}: {result:?}", path.display());
        snapshots.push(snapshot(dest.path()));
    }

    assert_eq!(snapshots[0].len(), 2);
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[0], snapshots[2]);
}

#[test]
fn test_bare_gz_depends_on_mode() {
    let src = TempDir::new().unwrap();
    let path = write_archive(src.path(), "notes.gz", &gzip(&create_test_tar(&[("n.txt", "n")])));

    let dest = TempDir::new().unwrap();
    assert!(extract_archive(&path, dest.path(), &ExtractConfig::default()).is_success());

    let dest = TempDir::new().unwrap();
    let strict = ExtractConfig::default().with_gz_as_tar(false);
    assert_eq!(
        extract_archive(&path, dest.path(), &strict),
        ExtractionResult::Failure(FailureReason::UnsupportedFormat)
    );
    assert!(dir_is_empty(dest.path()));
}

#[test]
fn test_gzip_of_non_tar_is_corrupted() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let path = write_archive(src.path(), "access.log.gz", &gzip(&[b'x'; 2048]));

    let result = extract_archive(&path, dest.path(), &ExtractConfig::default());
    assert!(matches!(
        result.failure(),
        Some(FailureReason::Corrupted { .. })
    ));
}

/// Makes `dir` read-only, or returns `false` when the current user can still
/// write to it (root ignores permission bits).
#[cfg(unix)]
fn make_read_only(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();
    let marker = dir.join(".write-check");
    if fs::write(&marker, b"").is_ok() {
        fs::remove_file(&marker).unwrap();
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("skipping: permission bits are not enforced for this user");
        return false;
    }
    true
}

#[cfg(unix)]
fn assert_permission_denied(name: &str, data: &[u8]) {
    use std::os::unix::fs::PermissionsExt;

    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let path = write_archive(src.path(), name, data);
    if !make_read_only(dest.path()) {
        return;
    }

    let result = extract_archive(&path, dest.path(), &ExtractConfig::default());
    fs::set_permissions(dest.path(), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(
        matches!(result.failure(), Some(FailureReason::PermissionDenied { .. })),
        "{name}: {result:?}"
    );
    assert!(dir_is_empty(dest.path()));
}

#[cfg(unix)]
#[test]
fn test_read_only_destination_zip() {
    assert_permission_denied("a.zip", &create_test_zip(&[("a.txt", "a")]));
}

#[cfg(unix)]
#[test]
fn test_read_only_destination_tar() {
    assert_permission_denied("a.tar", &create_test_tar(&[("a.txt", "a")]));
}

#[cfg(unix)]
#[test]
fn test_read_only_destination_tgz() {
    let data = gzip(&create_test_tar(&[("docs/a.txt", "a"), ("b.txt", "b")]));
    assert_permission_denied("a.tgz", &data);
}

#[test]
fn test_empty_compressed_tar_is_corrupted() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let path = write_archive(src.path(), "empty.tar.gz", &gzip(b""));

    let result = extract_archive(&path, dest.path(), &ExtractConfig::default());

    assert!(matches!(
        result.failure(),
        Some(FailureReason::Corrupted { entry: None, .. })
    ));
    assert!(dir_is_empty(dest.path()));
}

#[test]
fn test_batch_continues_past_corrupted_archive() {
    let src = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let config = ExtractConfig::default();

    let first = write_archive(src.path(), "1.zip", &create_test_zip(&[("one.txt", "one")]));
    let second = write_archive(
        src.path(),
        "2.zip",
        &corrupt_stored_entry(create_test_zip(&[("two.txt", "two payload")]), b"two payload"),
    );
    let third = write_archive(src.path(), "3.tar", &create_test_tar(&[("three.txt", "three")]));

    let archives: Vec<ArchiveFile> = [first, second, third]
        .into_iter()
        .map(|path| ArchiveFile::new(path, &config))
        .collect();

    let engine = ExtractionEngine::new(dest.path(), config);
    let notifier = RecordingNotifier::new();
    let items = engine
        .run_batch(&archives, Selection::All, &notifier, &mut NoopObserver)
        .unwrap();

    let names: Vec<_> = items.iter().map(|item| item.archive.display_name()).collect();
    assert_eq!(names, ["1.zip", "2.zip", "3.tar"]);
    assert!(items[0].result.is_success());
    assert!(matches!(
        items[1].result.failure(),
        Some(FailureReason::Corrupted { .. })
    ));
    assert!(items[2].result.is_success());

    assert!(dest.path().join("one.txt").exists());
    assert!(!dest.path().join("two.txt").exists());
    assert!(dest.path().join("three.txt").exists());

    let titles: Vec<_> = notifier.sent().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Extraction Complete", "Corrupted File", "Extraction Complete"]);
}

#[test]
fn test_scan_then_extract_all() {
    let downloads = TempDir::new().unwrap();
    write_archive(downloads.path(), "b.zip", &create_test_zip(&[("b.txt", "b")]));
    write_archive(downloads.path(), "a.tgz", &gzip(&create_test_tar(&[("a.txt", "a")])));
    write_archive(downloads.path(), "skip.txt", b"plain text");

    let config = ExtractConfig::default();
    let archives = scan_directory(downloads.path(), &config).unwrap();
    assert_eq!(archives.len(), 2);

    let engine = ExtractionEngine::new(downloads.path(), config);
    let items = engine
        .run_batch(&archives, Selection::All, &RecordingNotifier::new(), &mut NoopObserver)
        .unwrap();

    assert!(items.iter().all(|item| item.result.is_success()));
    assert!(downloads.path().join("a.txt").exists());
    assert!(downloads.path().join("b.txt").exists());
}
