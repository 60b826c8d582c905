//! AES round transformations.
//!
//! Every operation works in place on a column-major [`Block`]. The inverse of
//! each step is provided alongside it; [`add_round_key`] is its own inverse.

use crate::block::{column, index, set_column, xor_in_place, Block, Word};
use crate::field::multiply;
use crate::sbox::{inv_sbox, sbox};

const MIX: [u8; 4] = [0x02, 0x03, 0x01, 0x01];
const INV_MIX: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `row` of the state left by `by` positions.
fn rotate_row_left(state: &mut Block, row: usize, by: usize) {
    let mut cells = [0u8; 4];
    for (col, cell) in cells.iter_mut().enumerate() {
        *cell = state[index(row, col)];
    }
    cells.rotate_left(by);
    for (col, cell) in cells.iter().enumerate() {
        state[index(row, col)] = *cell;
    }
}

/// Performs ShiftRows in place: row `i` moves `i` positions to the left.
#[inline]
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        rotate_row_left(state, row, row);
    }
}

/// Performs the inverse of ShiftRows in place: row `i` moves `i` positions to the right.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    for row in 1..4 {
        rotate_row_left(state, row, 4 - row);
    }
}

/// Multiplies `col` by the circulant matrix whose first row is `coeffs`.
fn mix_with(col: &mut Word, coeffs: &[u8; 4]) {
    let input = *col;
    for (row, out) in col.iter_mut().enumerate() {
        *out = input
            .iter()
            .enumerate()
            .fold(0u8, |acc, (j, &byte)| {
                acc ^ multiply(coeffs[(j + 4 - row) % 4], byte)
            });
    }
}

/// Mixes a single column with the `{02, 03, 01, 01}` circulant.
#[inline]
pub fn mix_single_column(col: &mut Word) {
    mix_with(col, &MIX);
}

/// Mixes a single column with the `{0e, 0b, 0d, 09}` circulant.
#[inline]
pub fn inv_mix_single_column(col: &mut Word) {
    mix_with(col, &INV_MIX);
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let mut word = column(state, col);
        mix_single_column(&mut word);
        set_column(state, col, &word);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in 0..4 {
        let mut word = column(state, col);
        inv_mix_single_column(&mut word);
        set_column(state, col, &word);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn counting_block() -> Block {
        core::array::from_fn(|i| i as u8)
    }

    fn random_blocks(seed: u8, count: usize) -> Vec<Block> {
        let mut rng = ChaCha20Rng::from_seed([seed; 32]);
        (0..count)
            .map(|_| {
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut block);
                block
            })
            .collect()
    }

    #[test]
    fn sub_bytes_on_counting_block() {
        let mut state = counting_block();
        sub_bytes(&mut state);
        assert_eq!(
            state,
            [
                0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7,
                0xab, 0x76,
            ]
        );
        inv_sub_bytes(&mut state);
        assert_eq!(state, counting_block());
    }

    #[test]
    fn shift_rows_on_counting_block() {
        let mut state = counting_block();
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn inv_shift_rows_on_counting_block() {
        let mut state = counting_block();
        inv_shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3]
        );
    }

    #[test]
    fn shift_rows_leaves_first_row() {
        for block in random_blocks(1, 8) {
            let mut state = block;
            shift_rows(&mut state);
            for col in 0..4 {
                assert_eq!(state[index(0, col)], block[index(0, col)]);
            }
        }
    }

    #[test]
    fn shift_rows_pair_cancels() {
        for block in random_blocks(2, 32) {
            let mut state = block;
            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, block);

            inv_shift_rows(&mut state);
            shift_rows(&mut state);
            assert_eq!(state, block);
        }
    }

    #[test]
    fn mix_single_column_known_answer() {
        let mut col = [0xd4, 0xbf, 0x5d, 0x30];
        mix_single_column(&mut col);
        assert_eq!(col, [0x04, 0x66, 0x81, 0xe5]);
        inv_mix_single_column(&mut col);
        assert_eq!(col, [0xd4, 0xbf, 0x5d, 0x30]);
    }

    #[test]
    fn mix_columns_matches_fips_round_one() {
        // FIPS-197 Appendix B, round 1 state after ShiftRows.
        let mut state = [
            0xd4, 0xbf, 0x5d, 0x30, 0xe0, 0xb4, 0x52, 0xae, 0xb8, 0x41, 0x11, 0xf1, 0x1e, 0x27,
            0x98, 0xe5,
        ];
        mix_columns(&mut state);
        assert_eq!(
            state,
            [
                0x04, 0x66, 0x81, 0xe5, 0xe0, 0xcb, 0x19, 0x9a, 0x48, 0xf8, 0xd3, 0x7a, 0x28, 0x06,
                0x26, 0x4c,
            ]
        );
    }

    #[test]
    fn mix_columns_pair_cancels() {
        for block in random_blocks(3, 32) {
            let mut state = block;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, block);

            inv_mix_columns(&mut state);
            mix_columns(&mut state);
            assert_eq!(state, block);
        }
    }

    #[test]
    fn add_round_key_is_self_inverse() {
        let blocks = random_blocks(4, 2);
        let (block, round_key) = (blocks[0], blocks[1]);
        let mut state = block;
        add_round_key(&mut state, &round_key);
        assert_ne!(state, block);
        add_round_key(&mut state, &round_key);
        assert_eq!(state, block);
    }
}
