//! Centering transform between a variable-sized sprite and the fixed canvas.

/// Tile dimensions of the fixed canvas every sprite is centered within.
pub(crate) const CANVAS_TILES: u8 = 7;
/// Pixel height of one tile row.
pub(crate) const TILE_HEIGHT: u8 = 8;
/// Flat element count of a full 7x7-tile canvas buffer (both bitplanes and
/// the packed image share this length).
pub(crate) const BUFFER_SIZE: usize = CANVAS_TILES as usize * CANVAS_TILES as usize * TILE_HEIGHT as usize;

/// Width-centered, bottom-aligned tile offsets for a `w x h` sprite within
/// the 7x7 canvas.
pub(crate) fn offsets(w: u8, h: u8) -> (u8, u8) {
    let col_offset = (CANVAS_TILES - w + 1) / 2;
    let row_offset = CANVAS_TILES - h;
    (col_offset, row_offset)
}

/// Copies a compact `w*h*8`-byte plane into its centered position within a
/// zeroed 392-byte canvas buffer.
pub(crate) fn apply_offset(src: &[u8], w: u8, h: u8) -> [u8; BUFFER_SIZE] {
    let (col_offset, row_offset) = offsets(w, h);
    let mut dst = [0u8; BUFFER_SIZE];
    let h_px = h as usize * TILE_HEIGHT as usize;
    for c in 0..w as usize {
        for r in 0..h_px {
            let dst_idx = (col_offset as usize + c) * (CANVAS_TILES as usize * TILE_HEIGHT as usize)
                + row_offset as usize * TILE_HEIGHT as usize
                + r;
            dst[dst_idx] = src[c * h_px + r];
        }
    }
    dst
}

/// Inverse of [`apply_offset`]: extracts the `w*h*8`-byte active region from
/// a 392-byte canvas buffer.
pub(crate) fn remove_offset(src: &[u8; BUFFER_SIZE], w: u8, h: u8) -> Vec<u8> {
    let (col_offset, row_offset) = offsets(w, h);
    let h_px = h as usize * TILE_HEIGHT as usize;
    let mut dst = vec![0u8; w as usize * h_px];
    for c in 0..w as usize {
        for r in 0..h_px {
            let src_idx = (col_offset as usize + c) * (CANVAS_TILES as usize * TILE_HEIGHT as usize)
                + row_offset as usize * TILE_HEIGHT as usize
                + r;
            dst[c * h_px + r] = src[src_idx];
        }
    }
    dst
}
