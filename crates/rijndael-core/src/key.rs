//! Key types for AES-128.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Length of an AES-128 cipher key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Length of the expanded key: one round key per round plus the initial one.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            context: "key",
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

impl AsRef<[u8]> for Aes128Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The 176-byte key schedule: eleven 16-byte round keys laid end to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey(pub(crate) [u8; EXPANDED_KEY_SIZE]);

impl ExpandedKey {
    /// Returns round key `round` (0..=10), i.e. bytes `[16 * round, 16 * round + 16)`.
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        let start = round * BLOCK_SIZE;
        self.0[start..start + BLOCK_SIZE]
            .try_into()
            .expect("round key slice is one block")
    }

    /// Iterates over the eleven round keys in order.
    pub fn round_keys(&self) -> impl Iterator<Item = &Block> + '_ {
        (0..=ROUNDS).map(move |round| self.round_key(round))
    }

    /// Returns the raw schedule bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; EXPANDED_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for ExpandedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
