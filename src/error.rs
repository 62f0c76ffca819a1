//! Error types for sprite loading, saving, and export.

use std::fmt;
use std::io;

/// The main error type for sprite codec operations.
#[derive(Debug)]
pub enum SpriteError {
    /// Errors from the header parser.
    Header(HeaderError),
    /// Errors from the bit-level cursor.
    BitStream(BitStreamError),
    /// Errors from the run-length codec.
    Rle(RleError),
    /// File I/O failure.
    Io(io::Error),
}

/// Errors related to the fixed two-byte sprite header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// `width_tiles` or `height_tiles` fell outside `[1, 7]`.
    DimensionOutOfRange {
        /// The offending width, as read from the header.
        width: u8,
        /// The offending height, as read from the header.
        height: u8,
    },
    /// The file was too short to contain a two-byte header.
    Truncated,
}

/// Errors related to the bit-level cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStreamError {
    /// The cursor ran past the end of the buffer while reading.
    UnexpectedEof,
    /// A write would have advanced the cursor past the end of the buffer.
    BufferFull,
}

/// Errors related to RLE bitplane decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RleError {
    /// Input exhausted between packets.
    UnexpectedEof,
    /// Input exhausted while reading a RUN packet's length or value field.
    RunEof,
    /// Input exhausted while reading a DATA packet's pixel pair.
    DataEof,
    /// A decoded run length would push the total past the bitplane's pixel count.
    RunOverflow,
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(e) => write!(f, "{e}"),
            Self::BitStream(e) => write!(f, "{e}"),
            Self::Rle(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOutOfRange { width, height } => write!(
                f,
                "sprite dimensions {width}x{height} outside the 1..=7 tile range"
            ),
            Self::Truncated => write!(f, "file too short to contain a sprite header"),
        }
    }
}

impl fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::BufferFull => write!(f, "output buffer full"),
        }
    }
}

impl fmt::Display for RleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input between RLE packets"),
            Self::RunEof => write!(f, "unexpected end of input while reading a run length"),
            Self::DataEof => write!(f, "unexpected end of input while reading a data pair"),
            Self::RunOverflow => write!(f, "run length overflows the remaining bitplane"),
        }
    }
}

impl std::error::Error for SpriteError {}

impl From<HeaderError> for SpriteError {
    fn from(e: HeaderError) -> Self {
        Self::Header(e)
    }
}

impl From<BitStreamError> for SpriteError {
    fn from(e: BitStreamError) -> Self {
        Self::BitStream(e)
    }
}

impl From<RleError> for SpriteError {
    fn from(e: RleError) -> Self {
        Self::Rle(e)
    }
}

impl From<io::Error> for SpriteError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for sprite codec operations.
pub type Result<T> = core::result::Result<T, SpriteError>;
