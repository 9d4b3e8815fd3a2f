//! Transparent compression detection for tar streams.
//!
//! Tar archives are read without trusting the file name: the first bytes of
//! the file decide which decoder wraps the stream.
//!
//! # Supported Codecs
//!
//! - **Gzip** (`1F 8B`)
//! - **Bzip2** (`BZh`)
//! - **Xz** (`FD 37 7A 58 5A 00`)
//! - **Zstd** (`28 B5 2F FD`)

use std::io::BufRead;
use std::io::Read;

use crate::Result;

/// Outer compression layer of a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Plain tar.
    None,
    /// Gzip (deflate).
    Gzip,
    /// Bzip2.
    Bzip2,
    /// Xz (LZMA2).
    Xz,
    /// Zstandard.
    Zstd,
}

impl Compression {
    /// Identifies the compression from the leading bytes of a file.
    ///
    /// Anything without a known signature is assumed to be plain tar; the tar
    /// reader reports it as malformed if that assumption is wrong.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbox_core::formats::compression::Compression;
    ///
    /// assert_eq!(Compression::sniff(&[0x1F, 0x8B, 0x08]), Compression::Gzip);
    /// assert_eq!(Compression::sniff(b"BZh91AY"), Compression::Bzip2);
    /// assert_eq!(Compression::sniff(b"notes.txt"), Compression::None);
    /// ```
    #[must_use]
    pub fn sniff(magic: &[u8]) -> Self {
        match magic {
            [0x1F, 0x8B, ..] => Self::Gzip,
            [b'B', b'Z', b'h', ..] => Self::Bzip2,
            [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, ..] => Self::Xz,
            [0x28, 0xB5, 0x2F, 0xFD, ..] => Self::Zstd,
            _ => Self::None,
        }
    }

    /// Returns a human-readable name for this codec.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Wraps `reader` with the decoder for this codec.
    pub fn decoder<R: BufRead + 'static>(self, reader: R) -> Result<Box<dyn Read>> {
        Ok(match self {
            Self::None => Box::new(reader),
            Self::Gzip => Box::new(flate2::bufread::GzDecoder::new(reader)),
            Self::Bzip2 => Box::new(bzip2::bufread::BzDecoder::new(reader)),
            Self::Xz => Box::new(xz2::bufread::XzDecoder::new(reader)),
            Self::Zstd => Box::new(zstd::stream::read::Decoder::with_buffer(reader)?),
        })
    }

    /// Sniffs the compression of a buffered reader without consuming input,
    /// then wraps it with the matching decoder.
    pub fn detect_and_wrap<R: BufRead + 'static>(mut reader: R) -> Result<(Self, Box<dyn Read>)> {
        let codec = Self::sniff(reader.fill_buf()?);
        let decoder = codec.decoder(reader)?;
        Ok((codec, decoder))
    }
}
