//! Arithmetic in GF(2^8) with the AES reduction polynomial `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the reduction polynomial (0x11B without the `x^8` term).
const REDUCTION: u8 = 0x1b;

/// Doubles `byte` in the field (multiplication by `x`).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `a` and `b` in GF(2^8).
///
/// Bits of `b` are consumed from least to most significant; `a` is doubled
/// after each step. The loop ends as soon as `b` runs out of set bits, so it
/// never runs more than eight times.
#[inline]
pub const fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}
