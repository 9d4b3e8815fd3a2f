//! Property-based tests for file name classification.

use proptest::prelude::*;
use unbox_core::ArchiveKind;
use unbox_core::ExtractConfig;
use unbox_core::classify;
use unbox_core::classify_with;

proptest! {
    /// Any stem ending in a tar suffix is a tar archive.
    #[test]
    fn prop_tar_suffixes(stem in "[a-zA-Z0-9_.-]{1,30}", suffix in prop::sample::select(vec![".tar", ".tgz", ".tar.gz"])) {
        let name = format!("{stem}{suffix}");
        prop_assert_eq!(classify(&name), ArchiveKind::Tar);
        prop_assert_eq!(classify_with(&name, &ExtractConfig::default().with_gz_as_tar(false)), ArchiveKind::Tar);
    }

    /// Any stem ending in `.zip` is a zip archive.
    #[test]
    fn prop_zip_suffix(stem in "[a-zA-Z0-9_.-]{1,30}") {
        prop_assert_eq!(classify(format!("{stem}.zip")), ArchiveKind::Zip);
    }

    /// Names without a known suffix are never extracted.
    #[test]
    fn prop_unknown_suffix_unsupported(stem in "[a-z0-9]{1,20}", ext in "[a-z0-9]{1,4}") {
        prop_assume!(!["zip", "tar", "tgz", "gz"].contains(&ext.as_str()));
        let name = format!("{stem}.{ext}");
        prop_assert_eq!(classify(&name), ArchiveKind::Unsupported);
    }

    /// Matching is case-sensitive.
    #[test]
    fn prop_uppercase_unsupported(stem in "[a-z]{1,20}", ext in prop::sample::select(vec![".ZIP", ".TAR", ".TGZ", ".GZ", ".TAR.GZ"])) {
        prop_assert_eq!(classify(format!("{stem}{ext}")), ArchiveKind::Unsupported);
    }

    /// Only the file name matters, not the directories above it.
    #[test]
    fn prop_directory_ignored(dir in "[a-z]{1,10}(\\.zip)?", stem in "[a-z]{1,10}") {
        let path = format!("{dir}/{stem}.txt");
        prop_assert_eq!(classify(&path), ArchiveKind::Unsupported);
        let path = format!("{dir}/{stem}.zip");
        prop_assert_eq!(classify(&path), ArchiveKind::Zip);
    }
}
