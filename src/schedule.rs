//! Key schedule: parity-extended key and tweak, expanded into 19 subkeys.
//!
//! The 4-word key gains a fifth parity word `k4 = k0^k1^k2^k3 ^ C240`; the
//! 2-word tweak gains `t2 = t0^t1`. Subkey `s` (0..=18) is then
//!
//! ```text
//! subkey[s] = [ k[s%5],
//!               k[(s+1)%5] + t[s%3],
//!               k[(s+2)%5] + t[(s+1)%3],
//!               k[(s+3)%5] + s ]        (all additions mod 2^64)
//! ```
//!
//! Subkeys are a pure function of key and tweak, derived fresh for every
//! encrypt/decrypt call.

use crate::{Word, BLOCK_WORDS, TWEAK_WORDS};

/// Key-schedule parity constant ("C240" in the Skein specification).
pub const KEY_PARITY: Word = 0x1BD1_1BDA_A9FC_1A22;

/// Number of subkeys injected over 72 rounds (one every 4 rounds, plus the
/// final output whitening).
pub const SUBKEY_COUNT: usize = 19;

/// The 19 derived subkeys for one (key, tweak) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subkeys([[Word; BLOCK_WORDS]; SUBKEY_COUNT]);

impl Subkeys {
    /// Derives all 19 subkeys. Total over every key/tweak value.
    pub fn derive(key: &[Word; BLOCK_WORDS], tweak: &[Word; TWEAK_WORDS]) -> Self {
        let k4 = key.iter().fold(KEY_PARITY, |acc, &w| acc ^ w);
        let k = [key[0], key[1], key[2], key[3], k4];
        let t = [tweak[0], tweak[1], tweak[0] ^ tweak[1]];

        let mut subkeys = [[0; BLOCK_WORDS]; SUBKEY_COUNT];
        for (s, subkey) in subkeys.iter_mut().enumerate() {
            *subkey = [
                k[s % 5],
                k[(s + 1) % 5].wrapping_add(t[s % 3]),
                k[(s + 2) % 5].wrapping_add(t[(s + 1) % 3]),
                k[(s + 3) % 5].wrapping_add(s as Word),
            ];
        }
        Subkeys(subkeys)
    }

    #[inline(always)]
    pub fn get(&self, s: usize) -> &[Word; BLOCK_WORDS] {
        &self.0[s]
    }
}
