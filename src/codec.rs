//! Fixed-width hex-word conversion at the crate boundary.
//!
//! Every word is exactly 16 hex digits in big-endian nibble order, so a
//! 256-bit block is 64 digits and a 128-bit tweak is 32. This is the only
//! place the crate touches text; everything past it works on word arrays.

use crate::error::CipherError;
use crate::{Word, BLOCK_WORDS, TWEAK_WORDS};

/// Hex digits per 64-bit word.
pub const HEX_PER_WORD: usize = 16;

/// Decodes exactly `N` words from a fixed-length hex string.
///
/// Rejects wrong lengths with [`CipherError::InvalidInputShape`] and
/// non-hex characters with [`CipherError::MalformedHex`]; never truncates
/// or pads.
pub fn decode_words<const N: usize>(s: &str) -> Result<[Word; N], CipherError> {
    if s.len() != N * HEX_PER_WORD {
        return Err(CipherError::InvalidInputShape {
            expected_words: N,
            actual_words: s.len() / HEX_PER_WORD,
        });
    }
    let bytes = hex::decode(s)?;
    let mut words = [0; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = Word::from_be_bytes(buf);
    }
    Ok(words)
}

/// Decodes a 256-bit block (key, plaintext or ciphertext): 64 hex digits.
pub fn decode_block(s: &str) -> Result<[Word; BLOCK_WORDS], CipherError> {
    decode_words::<BLOCK_WORDS>(s)
}

/// Decodes a 128-bit tweak: 32 hex digits.
pub fn decode_tweak(s: &str) -> Result<[Word; TWEAK_WORDS], CipherError> {
    decode_words::<TWEAK_WORDS>(s)
}

/// Encodes words as lowercase hex, 16 zero-padded digits per word.
pub fn encode_words(words: &[Word]) -> String {
    let mut out = String::with_capacity(words.len() * HEX_PER_WORD);
    for word in words {
        out.push_str(&format!("{:016x}", word));
    }
    out
}

/// Formats a state snapshot for display: each word as four 4-digit nibble
/// groups, words separated by " | ".
pub fn format_state(state: &[Word; BLOCK_WORDS]) -> String {
    state
        .iter()
        .map(|word| {
            let hex = format!("{:016x}", word);
            hex.as_bytes()
                .chunks(4)
                .map(|g| std::str::from_utf8(g).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
