//! Archive format implementations.

pub mod compression;
pub mod detect;
pub mod tar;
pub mod traits;
pub mod zip;

pub use compression::Compression;
pub use detect::ArchiveKind;
pub use tar::TarArchive;
pub use traits::ArchiveFormat;
pub use zip::ZipArchive;
