//! Extraction configuration.

/// Knobs that change how archives are classified and extracted.
///
/// # Examples
///
/// ```
/// use unbox_core::ExtractConfig;
///
/// // Defaults match the classic behaviour: bare `.gz` is tried as a tar.
/// let config = ExtractConfig::default();
/// assert!(config.gz_as_tar);
///
/// let strict = ExtractConfig::default().with_gz_as_tar(false);
/// assert!(!strict.gz_as_tar);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Treat a bare `.gz` file (not `.tar.gz`) as a gzip-compressed tar.
    ///
    /// When disabled, such files classify as unsupported and are skipped.
    pub gz_as_tar: bool,

    /// Read every zip entry once before extracting anything so a damaged
    /// entry aborts the archive with nothing written.
    pub verify_zip: bool,
}

impl Default for ExtractConfig {
    /// Default values:
    /// - `gz_as_tar`: true
    /// - `verify_zip`: true
    fn default() -> Self {
        Self {
            gz_as_tar: true,
            verify_zip: true,
        }
    }
}

impl ExtractConfig {
    /// Sets whether bare `.gz` files classify as tar archives.
    #[must_use]
    pub const fn with_gz_as_tar(mut self, enabled: bool) -> Self {
        self.gz_as_tar = enabled;
        self
    }

    /// Sets whether zip archives get an integrity pass before extraction.
    #[must_use]
    pub const fn with_verify_zip(mut self, enabled: bool) -> Self {
        self.verify_zip = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractConfig::default();
        assert!(config.gz_as_tar);
        assert!(config.verify_zip);
    }

    #[test]
    fn test_builders() {
        let config = ExtractConfig::default()
            .with_gz_as_tar(false)
            .with_verify_zip(false);
        assert!(!config.gz_as_tar);
        assert!(!config.verify_zip);
    }
}
