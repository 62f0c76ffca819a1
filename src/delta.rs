//! Reversible horizontal XOR-delta filter applied per bitplane row.

use crate::canvas::BUFFER_SIZE;

const TILE_HEIGHT: usize = 8;

/// Inverts the forward delta: each output bit becomes the running XOR of all
/// preceding bits in its row, left to right.
pub(crate) fn diff_decode(buf: &mut [u8; BUFFER_SIZE], w: u8, h: u8) {
    let stride = h as usize * TILE_HEIGHT;
    for y in 0..stride {
        let mut last_bit = 0u8;
        for x in 0..w as usize {
            let idx = x * stride + y;
            let mut byte = buf[idx];
            for i in (0..8).rev() {
                let bit = (byte >> i) & 1;
                let new_bit = bit ^ last_bit;
                byte = (byte & !(1 << i)) | (new_bit << i);
                last_bit = new_bit;
            }
            buf[idx] = byte;
        }
    }
}

/// Computes the forward delta whose `diff_decode` inverse is the identity.
pub(crate) fn diff_encode(buf: &mut [u8; BUFFER_SIZE], w: u8, h: u8) {
    let stride = h as usize * TILE_HEIGHT;
    for y in 0..stride {
        let mut last_bit = 0u8;
        for x in 0..w as usize {
            let idx = x * stride + y;
            let orig = buf[idx];
            let carried = (last_bit << 7) | (orig >> 1);
            buf[idx] = orig ^ carried;
            last_bit = orig & 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_buffer_is_a_fixed_point() {
        let mut buf = [0u8; BUFFER_SIZE];
        diff_encode(&mut buf, 7, 7);
        assert_eq!(buf, [0u8; BUFFER_SIZE]);
        diff_decode(&mut buf, 7, 7);
        assert_eq!(buf, [0u8; BUFFER_SIZE]);
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let mut original = [0u8; BUFFER_SIZE];
        for (i, b) in original.iter_mut().enumerate().take(7 * 7 * 8) {
            *b = (i * 37 + 5) as u8;
        }
        let mut buf = original;
        diff_encode(&mut buf, 7, 7);
        diff_decode(&mut buf, 7, 7);
        assert_eq!(buf, original);
    }
}
