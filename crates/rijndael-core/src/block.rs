//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, a 4x4 byte matrix stored column by column.
pub type Block = [u8; BLOCK_SIZE];

/// Four-byte column of a block or of the key schedule.
pub type Word = [u8; 4];

/// Returns the byte offset of `(row, col)` in a column-major block.
#[inline]
pub const fn index(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// Copies column `col` out of `block`.
#[inline]
pub fn column(block: &Block, col: usize) -> Word {
    let base = index(0, col);
    [block[base], block[base + 1], block[base + 2], block[base + 3]]
}

/// Writes `word` into column `col` of `block`.
#[inline]
pub fn set_column(block: &mut Block, col: usize, word: &Word) {
    let base = index(0, col);
    block[base..base + 4].copy_from_slice(word);
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a block, rejecting anything that is not exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8], context: &'static str) -> Result<Block> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        context,
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}
