//! AES-128 single-block encryption and decryption.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::{Aes128Key, ExpandedKey, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Encrypts a single 16-byte block with a pre-expanded key schedule.
pub fn encrypt_with_schedule(block: &Block, schedule: &ExpandedKey) -> Block {
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with a pre-expanded key schedule.
pub fn decrypt_with_schedule(block: &Block, schedule: &ExpandedKey) -> Block {
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, schedule.round_key(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, schedule.round_key(0));

    state
}

/// Encrypts one block under one key.
///
/// Both inputs must be exactly 16 bytes; otherwise
/// [`Error::InvalidLength`](crate::Error::InvalidLength) is returned and
/// nothing is computed.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let block = block_from_slice(plaintext, "plaintext")?;
    Ok(encrypt_with_schedule(&block, &expand_key(&key)))
}

/// Decrypts one block under one key. Length rules match [`encrypt_block`].
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let block = block_from_slice(ciphertext, "ciphertext")?;
    Ok(decrypt_with_schedule(&block, &expand_key(&key)))
}

/// AES-128 cipher holding a key schedule computed once at construction.
#[derive(Clone, Copy, Debug)]
pub struct Aes128 {
    schedule: ExpandedKey,
}

impl Aes128 {
    /// Expands `key` and keeps the schedule for later calls.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Builds a cipher from a key slice, rejecting any length other than 16.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Aes128Key::try_from(key)?))
    }

    /// Returns the expanded key in use.
    pub fn schedule(&self) -> &ExpandedKey {
        &self.schedule
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_with_schedule(block, &self.schedule)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_with_schedule(block, &self.schedule)
    }
}
