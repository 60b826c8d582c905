//! Error types for the block cipher boundary.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised when a caller breaks the fixed-size input contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A key or block was not exactly the required number of bytes.
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Which input was rejected.
        context: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_input() {
        let err = Error::InvalidLength {
            context: "key",
            expected: 16,
            actual: 24,
        };
        assert_eq!(err.to_string(), "key: invalid length (expected 16, got 24)");
    }
}
