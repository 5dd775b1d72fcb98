//! Error types for the boundary codec.
//!
//! The cipher core itself is total: word arithmetic wraps and the array
//! shapes are fixed by the type signatures, so it has no error path. Errors
//! only arise at the hex boundary, before the core is reached.

use std::fmt;

/// Errors produced when validating hex input at the crate boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CipherError {
    /// Input decoded to the wrong number of 64-bit words.
    InvalidInputShape {
        expected_words: usize,
        actual_words: usize,
    },
    /// Input is not well-formed hexadecimal.
    MalformedHex(hex::FromHexError),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidInputShape {
                expected_words,
                actual_words,
            } => {
                write!(
                    f,
                    "expected {} 64-bit words ({} hex digits), got {}",
                    expected_words,
                    expected_words * 16,
                    actual_words
                )
            }
            CipherError::MalformedHex(err) => write!(f, "malformed hex input: {}", err),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::MalformedHex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<hex::FromHexError> for CipherError {
    fn from(err: hex::FromHexError) -> Self {
        CipherError::MalformedHex(err)
    }
}
