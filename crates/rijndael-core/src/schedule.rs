//! AES-128 key expansion.

use crate::block::{Word, BLOCK_SIZE};
use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE};
use crate::sbox::{sbox, RCON};

const WORD_SIZE: usize = 4;

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

/// Expands a 128-bit key into 11 round keys (176 bytes).
///
/// The first round key is the cipher key itself. Every later word is the
/// previous word XOR the word one round key back; at each round-key boundary
/// the previous word first goes through `RotWord`, `SubWord` and the next
/// round constant. Exactly one round constant is spent per generated round
/// key, so `RCON[0..10]` is consumed in full and never overrun.
pub fn expand_key(key: &Aes128Key) -> ExpandedKey {
    let mut out = [0u8; EXPANDED_KEY_SIZE];
    out[..KEY_SIZE].copy_from_slice(&key.0);

    let mut offset = KEY_SIZE;
    while offset < EXPANDED_KEY_SIZE {
        let mut temp: Word = [
            out[offset - 4],
            out[offset - 3],
            out[offset - 2],
            out[offset - 1],
        ];
        if offset % BLOCK_SIZE == 0 {
            let round = offset / BLOCK_SIZE - 1;
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[round];
        }
        for (i, byte) in temp.iter().enumerate() {
            out[offset + i] = out[offset + i - KEY_SIZE] ^ byte;
        }
        offset += WORD_SIZE;
    }

    ExpandedKey(out)
}
