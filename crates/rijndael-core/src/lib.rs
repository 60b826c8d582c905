//! Rijndael (AES-128) block cipher primitive.
//!
//! This crate follows FIPS-197 for a 128-bit key and provides:
//! - GF(2^8) arithmetic used by the column mixing step.
//! - The AES-128 key schedule (16-byte key to 176-byte expanded key).
//! - Single-block encryption and decryption, plus the individual round steps.
//!
//! It deliberately stops at one 16-byte block: there are no modes of
//! operation and no padding. The implementation aims for clarity and
//! testability rather than constant-time guarantees; it should not be treated
//! as side-channel hardened.
//!
//! ```
//! let key = *b"Thats my Kung Fu";
//! let ct = rijndael_core::encrypt_block(b"Two One Nine Two", &key).unwrap();
//! let pt = rijndael_core::decrypt_block(&ct, &key).unwrap();
//! assert_eq!(&pt, b"Two One Nine Two");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod field;
mod key;
pub mod round;
mod sbox;
mod schedule;

pub use crate::block::{block_from_slice, index, Block, Word, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_with_schedule, encrypt_block, encrypt_with_schedule, Aes128,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE, ROUNDS};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::schedule::expand_key;
