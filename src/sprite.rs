//! The decoded sprite entity and its encoding-mode metadata.

use crate::canvas::BUFFER_SIZE;

/// How the second bitplane relates to the first before RLE.
///
/// The wire format stores this as a variable-length prefix code (`0`, `10`,
/// `11`); the underlying C source conflated that prefix code's internal
/// values `{0, 2, 3}` with the caller-facing codes `{0, 1, 2}` used by older
/// call sites. This enum is the single place that mapping happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Both planes are delta-encoded independently; no XOR composition.
    /// Wire prefix: `0`.
    Plain,
    /// The second plane is XORed against the first before RLE, and is *not*
    /// itself delta-encoded. Wire prefix: `10`.
    DeltaXorSecond,
    /// The second plane is XORed against the first, then delta-encoded like
    /// the first. Wire prefix: `11`.
    XorOnly,
}

impl EncodingMode {
    /// The internal/wire value this mode maps to: `0`, `2`, or `3`.
    pub(crate) fn wire_value(self) -> u8 {
        match self {
            Self::Plain => 0,
            Self::DeltaXorSecond => 2,
            Self::XorOnly => 3,
        }
    }

    /// Reconstructs a mode from its decoded wire value (`0`, `2`, or `3`).
    pub(crate) fn from_wire_value(value: u8) -> Self {
        match value {
            0 => Self::Plain,
            2 => Self::DeltaXorSecond,
            3 => Self::XorOnly,
            other => unreachable!("decoder only produces wire values 0, 2, 3, got {other}"),
        }
    }

    /// The caller-facing numeric code `{0, 1, 2}` used by older call sites.
    pub fn from_caller_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Plain),
            1 => Some(Self::DeltaXorSecond),
            2 => Some(Self::XorOnly),
            _ => None,
        }
    }

    /// Whether `P1` gets XORed against `P0` before/after RLE (the source's
    /// `encoding_method > 1` check, now expressed on the enum directly).
    pub(crate) fn xor_flag(self) -> bool {
        matches!(self, Self::DeltaXorSecond | Self::XorOnly)
    }

    /// Whether `diff_encode`/`diff_decode` is skipped on `P1` (the source's
    /// `encoding_method != 2` check).
    pub(crate) fn skip_delta_flag(self) -> bool {
        matches!(self, Self::DeltaXorSecond)
    }
}

/// A decoded sprite: its tile dimensions and its fully interleaved 2-bpp
/// image within the fixed 7x7-tile canvas.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Sprite width in tiles, `1..=7`.
    pub width_tiles: u8,
    /// Sprite height in tiles, `1..=7`.
    pub height_tiles: u8,
    /// Which decoded plane became the low bit of each pixel.
    pub primary_buffer: u8,
    /// The mode this sprite was decoded with. Informational only: `save_sprite`
    /// takes its own `EncodingMode` and does not require it to match.
    pub encoding_method: EncodingMode,
    /// The packed 2-bpp canvas image, 392 sixteen-bit words.
    pub image: [u16; BUFFER_SIZE],
}

impl Sprite {
    /// Resets this sprite to the zero-sized, empty state.
    ///
    /// Provided for API parity with the original `free_sprite` entry point;
    /// ordinary `Drop` already reclaims the image buffer when a `Sprite`
    /// value goes out of scope, so calling this explicitly is optional.
    pub fn reset(&mut self) {
        self.width_tiles = 0;
        self.height_tiles = 0;
        self.primary_buffer = 0;
        self.encoding_method = EncodingMode::Plain;
        self.image = [0u16; BUFFER_SIZE];
    }
}
