//! The MIX transform and its rotation schedule.
//!
//! MIX is the only non-linear element of the cipher: a wrapping 64-bit
//! addition, a fixed-amount left rotation and an XOR. Its inverse undoes the
//! three operations in reverse, so `invert_mix(mix(a, b, r), r) == (a, b)`
//! for every word pair and every rotation amount.

use crate::Word;

/// Rounds per rotation-schedule period.
pub const ROTATION_PERIOD: usize = 8;

/// Rotation constants for Threefish-256, indexed by `(round % 8, pair)`.
/// *Changing this table changes the cipher.*
pub const ROTATIONS: [[u32; 2]; ROTATION_PERIOD] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

/// Rotation amount for word pair `pair` (0 or 1) in round `round`.
#[inline(always)]
pub fn rotation(round: usize, pair: usize) -> u32 {
    ROTATIONS[round % ROTATION_PERIOD][pair]
}

/// Forward MIX: `y0 = a + b`, `y1 = (b <<< r) ^ y0`.
///
/// Total over all inputs; the addition wraps modulo 2^64 by definition.
#[inline(always)]
pub fn mix(a: Word, b: Word, r: u32) -> (Word, Word) {
    let y0 = a.wrapping_add(b);
    let y1 = b.rotate_left(r) ^ y0;
    (y0, y1)
}

/// Inverse MIX: recovers `(a, b)` from `mix(a, b, r)`.
///
/// `rotate_right(r)` is `rotate_left(64 - r)` with the amount reduced mod 64,
/// so `r = 0` needs no special case.
#[inline(always)]
pub fn invert_mix(y0: Word, y1: Word, r: u32) -> (Word, Word) {
    let b = (y1 ^ y0).rotate_right(r);
    let a = y0.wrapping_sub(b);
    (a, b)
}
