//! A codec for the tile-based 2-bits-per-pixel sprite format used by a
//! family of vintage handheld systems.
//!
//! [`load_sprite`] reads a compressed sprite file and reconstructs its
//! two-bitplane image inside a fixed 7x7-tile canvas; [`save_sprite`]
//! re-encodes a [`Sprite`] back to the same bit-exact byte layout. The hard
//! part is internal: a run-length bitplane codec with an unusual
//! column-major traversal order, a reversible horizontal delta filter, and
//! a bit-interleaving transform between the two 1-bpp planes and the packed
//! 2-bpp image.
//!
//! # License
//! Licensed under either of
//!
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![forbid(unsafe_code)]
#![forbid(missing_docs)]

mod bit_stream;
mod canvas;
mod codec;
mod delta;
mod error;
mod interleave;
mod ppm;
mod rle;
mod sprite;

pub use codec::{load_sprite, save_sprite};
pub use error::{BitStreamError, HeaderError, RleError, SpriteError};
pub use ppm::{export_bitplane_to_ppm, export_sprite_to_ppm};
pub use sprite::{EncodingMode, Sprite};

/// Specialized `Result` type for sprite codec operations.
pub type Result<T> = error::Result<T>;
