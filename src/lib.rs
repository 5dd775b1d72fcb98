//! Threefish-256 — Traced Implementation
//! =====================================
//! The **Threefish-256 tweakable block cipher** (the core of the Skein hash,
//! a NIST SHA-3 finalist), instrumented to emit a complete, ordered trace of
//! every intermediate state for step-by-step visualization.
//!
//! ## Cipher design
//! * 4 × 64-bit words = 256-bit block; key matches the block size
//! * 128-bit (2-word) public tweak perturbing the key schedule
//! * 72 rounds of: subkey injection (every 4th round) → MIX pair 0 →
//!   MIX pair 1 → word permutation `[0,3,2,1]`
//! * Final subkey injection as output whitening
//! * MIX: `y0 = a + b`, `y1 = (b <<< r) ^ y0` — addition, rotation and XOR
//!   only, all on native `u64` with defined wraparound
//!
//! ## Tracing
//! Every micro-operation is recorded as a [`Step`] carrying its own state
//! snapshot — 235 steps per block, always presented forward by round number.
//! Decryption runs the algebraic inverse from round 71 down to 0 and
//! reverses its step list before returning, so one presentation path serves
//! both directions.
//!
//! Encrypt/decrypt calls are pure functions of their inputs: subkeys are
//! derived fresh per call and nothing is cached or shared, so independent
//! blocks parallelize trivially (see the `parallel` feature).
//!
//! ---
//! **Security NOTE:** this implementation is built for studying and
//! visualizing the algorithm. It makes no constant-time claims and must not
//! be used to protect real data.

pub mod codec;
pub mod error;
pub mod mix;
pub mod schedule;
pub mod trace;

mod engine;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub use engine::{decrypt_block, encrypt_block, TracedBlock, ROUNDS, STEPS_PER_TRACE};
pub use error::CipherError;
pub use schedule::{Subkeys, KEY_PARITY, SUBKEY_COUNT};
pub use trace::{Step, StepKind};

/// The cipher's atomic data unit: a 64-bit unsigned integer. All arithmetic
/// wraps modulo 2^64.
pub type Word = u64;

/// Words per 256-bit block (and per key).
pub const BLOCK_WORDS: usize = 4;

/// Words per 128-bit tweak.
pub const TWEAK_WORDS: usize = 2;

/// Encrypts a block given as validated fixed-length hex strings: 64 digits
/// for key and plaintext, 32 for the tweak.
///
/// Returns the ciphertext as 64 lowercase hex digits plus the full trace.
/// Malformed input fails before the cipher core is reached.
pub fn encrypt_hex(
    key: &str,
    tweak: &str,
    plaintext: &str,
) -> Result<(String, Vec<Step>), CipherError> {
    let key = codec::decode_block(key)?;
    let tweak = codec::decode_tweak(tweak)?;
    let plaintext = codec::decode_block(plaintext)?;
    let result = encrypt_block(&key, &tweak, &plaintext);
    Ok((codec::encode_words(&result.block), result.trace))
}

/// Decrypts a block given as validated fixed-length hex strings; the exact
/// inverse of [`encrypt_hex`].
pub fn decrypt_hex(
    key: &str,
    tweak: &str,
    ciphertext: &str,
) -> Result<(String, Vec<Step>), CipherError> {
    let key = codec::decode_block(key)?;
    let tweak = codec::decode_tweak(tweak)?;
    let ciphertext = codec::decode_block(ciphertext)?;
    let result = decrypt_block(&key, &tweak, &ciphertext);
    Ok((codec::encode_words(&result.block), result.trace))
}

/// Encrypts many independent blocks in **parallel** under one key/tweak
/// (feature `parallel`). Each block is a pure function of its inputs, so
/// the workload splits trivially at the call level.
#[cfg(feature = "parallel")]
pub fn encrypt_blocks(
    key: &[Word; BLOCK_WORDS],
    tweak: &[Word; TWEAK_WORDS],
    blocks: &[[Word; BLOCK_WORDS]],
) -> Vec<TracedBlock> {
    blocks
        .par_iter()
        .map(|block| encrypt_block(key, tweak, block))
        .collect()
}

/// Decrypts many independent blocks in **parallel** (feature `parallel`).
#[cfg(feature = "parallel")]
pub fn decrypt_blocks(
    key: &[Word; BLOCK_WORDS],
    tweak: &[Word; TWEAK_WORDS],
    blocks: &[[Word; BLOCK_WORDS]],
) -> Vec<TracedBlock> {
    blocks
        .par_iter()
        .map(|block| decrypt_block(key, tweak, block))
        .collect()
}
