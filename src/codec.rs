//! Orchestrates the decode/encode pipeline: header, RLE planes, delta
//! filter, XOR composition, canvas centering, and plane interleaving.

use std::fs;
use std::path::Path;

use crate::bit_stream::BitStream;
use crate::canvas::{apply_offset, remove_offset, BUFFER_SIZE};
use crate::delta::{diff_decode, diff_encode};
use crate::error::{HeaderError, Result, SpriteError};
use crate::interleave::{interleave, separate};
use crate::rle::{rle_decode, rle_encode};
use crate::sprite::{EncodingMode, Sprite};

/// Loads and decodes a sprite file at `path`.
pub fn load_sprite(path: impl AsRef<Path>) -> Result<Sprite> {
    let path = path.as_ref();
    log::debug!("loading sprite from {}", path.display());
    let mut data = fs::read(path)?;
    if data.len() < 2 {
        log::error!("sprite file {} is too short for a header", path.display());
        return Err(SpriteError::Header(HeaderError::Truncated));
    }

    let width = data[0] >> 4;
    let height = data[0] & 0x0F;
    if !(1..=7).contains(&width) || !(1..=7).contains(&height) {
        log::error!("sprite header has out-of-range dimensions {width}x{height}");
        return Err(SpriteError::Header(HeaderError::DimensionOutOfRange {
            width,
            height,
        }));
    }
    let primary_buffer = data[1] >> 7;

    let mut bs = BitStream::new(&mut data, 1, 6);
    let mut p0 = rle_decode(&mut bs, width, height)?;

    let first_bit = bs.read_bit().map_err(|_| crate::error::RleError::UnexpectedEof)?;
    let wire_value = if first_bit == 0 {
        0
    } else {
        let second_bit = bs.read_bit().map_err(|_| crate::error::RleError::UnexpectedEof)?;
        0b10 | second_bit
    };
    let mode = EncodingMode::from_wire_value(wire_value);

    let mut p1 = rle_decode(&mut bs, width, height)?;

    diff_decode(&mut p0, width, height);
    if !mode.skip_delta_flag() {
        diff_decode(&mut p1, width, height);
    }
    if mode.xor_flag() {
        for i in 0..BUFFER_SIZE {
            p1[i] ^= p0[i];
        }
    }

    let (plane_a, plane_b) = if primary_buffer == 0 {
        (p0, p1)
    } else {
        (p1, p0)
    };

    let canvas_a = apply_offset(&plane_a, width, height);
    let canvas_b = apply_offset(&plane_b, width, height);
    let image = interleave(&canvas_a, &canvas_b);

    log::debug!("decoded {width}x{height} sprite with mode {mode:?}");

    Ok(Sprite {
        width_tiles: width,
        height_tiles: height,
        primary_buffer,
        encoding_method: mode,
        image,
    })
}

/// Re-encodes `sprite` using `mode` and `primary_buffer`, writing the result
/// to `path`. The parameters are advisory: the sprite's own image is always
/// re-derived from scratch, regardless of the mode it was originally decoded
/// with.
pub fn save_sprite(
    sprite: &Sprite,
    mode: EncodingMode,
    primary_buffer: u8,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = (sprite.width_tiles, sprite.height_tiles);
    log::debug!(
        "saving {width}x{height} sprite to {} with mode {mode:?}",
        path.display()
    );

    let (plane_a, plane_b) = separate(&sprite.image);
    let compact_a = remove_offset(&plane_a, width, height);
    let compact_b = remove_offset(&plane_b, width, height);

    let (mut p0, mut p1) = if primary_buffer == 0 {
        (pad(compact_a), pad(compact_b))
    } else {
        (pad(compact_b), pad(compact_a))
    };

    if mode.xor_flag() {
        for i in 0..BUFFER_SIZE {
            p1[i] ^= p0[i];
        }
    }
    if !mode.skip_delta_flag() {
        diff_encode(&mut p1, width, height);
    }
    diff_encode(&mut p0, width, height);

    let mut out = vec![0u8; BUFFER_SIZE * 2];
    out[0] = (width << 4) | height;
    out[1] = primary_buffer << 7;

    let written_len = {
        let mut bs = BitStream::new(&mut out, 1, 6);
        rle_encode(&p0, width, height, &mut bs)?;

        let wire_value = mode.wire_value();
        if wire_value == 0 {
            bs.write_bit(0)?;
        } else {
            bs.write_bit(1)?;
            bs.write_bit(wire_value & 1)?;
        }

        rle_encode(&p1, width, height, &mut bs)?;

        let mut len = bs.byte_index();
        if bs.bit_index() != 7 {
            len += 1;
        }
        len
    };

    fs::write(path, &out[..written_len])?;
    Ok(())
}

fn pad(compact: Vec<u8>) -> [u8; BUFFER_SIZE] {
    let mut buf = [0u8; BUFFER_SIZE];
    buf[..compact.len()].copy_from_slice(&compact);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn pattern_sprite() -> Sprite {
        let pattern: [u16; 8] = [
            0x0055, 0x0fa5, 0x3fa9, 0x3c69, 0x96c3, 0x9503, 0xa50f, 0xaaff,
        ];
        let mut image = [0u16; BUFFER_SIZE];
        image[216..224].copy_from_slice(&pattern);
        Sprite {
            width_tiles: 1,
            height_tiles: 1,
            primary_buffer: 0,
            encoding_method: EncodingMode::Plain,
            image,
        }
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut p = std::env::temp_dir();
        p.push(format!("gb_sprite_codec_test_{name}_{}_{id}", std::process::id()));
        p
    }

    #[test]
    fn roundtrips_across_every_mode_and_primary_buffer() {
        let sprite = pattern_sprite();
        for mode in [
            EncodingMode::Plain,
            EncodingMode::DeltaXorSecond,
            EncodingMode::XorOnly,
        ] {
            for primary in [0u8, 1u8] {
                let path = temp_path("roundtrip");
                save_sprite(&sprite, mode, primary, &path).unwrap();
                let loaded = load_sprite(&path).unwrap();
                assert_eq!(loaded.image[216..224], sprite.image[216..224]);
                assert_eq!(loaded.width_tiles, 1);
                assert_eq!(loaded.height_tiles, 1);
                let _ = std::fs::remove_file(&path);
            }
        }
    }

    #[test]
    fn encoding_file_sizes_match_the_corrected_mapping() {
        let sprite = pattern_sprite();
        let expected = [
            (EncodingMode::Plain, 0u8, 0x13u64),
            (EncodingMode::DeltaXorSecond, 0, 0x12),
            (EncodingMode::XorOnly, 0, 0x11),
            (EncodingMode::Plain, 1, 0x13),
            (EncodingMode::DeltaXorSecond, 1, 0x11),
            (EncodingMode::XorOnly, 1, 0x10),
        ];
        for (mode, primary, size) in expected {
            let path = temp_path("size");
            save_sprite(&sprite, mode, primary, &path).unwrap();
            let len = std::fs::metadata(&path).unwrap().len();
            assert_eq!(len, size, "mode={mode:?} primary={primary}");
            let _ = std::fs::remove_file(&path);
        }
    }

    #[test]
    fn header_rejects_out_of_range_dimensions() {
        let path = temp_path("bad_header");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(&[0x80, 0x00]).unwrap();
        drop(f);
        let err = load_sprite(&path).unwrap_err();
        assert!(matches!(
            err,
            SpriteError::Header(HeaderError::DimensionOutOfRange { width: 8, height: 0 })
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_sprite("/nonexistent/path/for/gb-sprite-codec-tests.bin").unwrap_err();
        assert!(matches!(err, SpriteError::Io(_)));
    }
}
