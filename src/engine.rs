//! The 72-round permutation network, instrumented to record every
//! micro-operation.
//!
//! Each round is: subkey injection (every fourth round), MIX on words 0/1,
//! MIX on words 2/3, then the fixed word permutation `[0, 3, 2, 1]` (a swap
//! of positions 1 and 3, its own inverse). After round 71 the final subkey
//! performs output whitening. A full trace is always exactly
//! [`STEPS_PER_TRACE`] steps: 18 interior subkey injections, 144 MIXes,
//! 72 permutations and the final injection.

use crate::mix::{invert_mix, mix, rotation};
use crate::schedule::{Subkeys, SUBKEY_COUNT};
use crate::trace::{Step, StepKind};
use crate::{Word, BLOCK_WORDS, TWEAK_WORDS};

/// Rounds in Threefish-256.
pub const ROUNDS: usize = 72;

/// Rounds between subkey injections.
const SUBKEY_INTERVAL: usize = 4;

/// Steps recorded per block (235): three per round, the 18 interior subkey
/// injections, and the final one.
pub const STEPS_PER_TRACE: usize = ROUNDS * 3 + SUBKEY_COUNT;

/// Result of one traced block operation: the output words plus the full
/// forward-ordered step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedBlock {
    pub block: [Word; BLOCK_WORDS],
    pub trace: Vec<Step>,
}

#[inline(always)]
fn add_subkey(state: &mut [Word; BLOCK_WORDS], subkey: &[Word; BLOCK_WORDS]) {
    for (word, k) in state.iter_mut().zip(subkey.iter()) {
        *word = word.wrapping_add(*k);
    }
}

#[inline(always)]
fn sub_subkey(state: &mut [Word; BLOCK_WORDS], subkey: &[Word; BLOCK_WORDS]) {
    for (word, k) in state.iter_mut().zip(subkey.iter()) {
        *word = word.wrapping_sub(*k);
    }
}

/// Encrypts one 256-bit block, returning the ciphertext words and the
/// chronological trace (round 0 first).
pub fn encrypt_block(
    key: &[Word; BLOCK_WORDS],
    tweak: &[Word; TWEAK_WORDS],
    plaintext: &[Word; BLOCK_WORDS],
) -> TracedBlock {
    let subkeys = Subkeys::derive(key, tweak);
    let mut state = *plaintext;
    let mut trace = Vec::with_capacity(STEPS_PER_TRACE);

    for d in 0..ROUNDS {
        if d % SUBKEY_INTERVAL == 0 {
            let s = d / SUBKEY_INTERVAL;
            add_subkey(&mut state, subkeys.get(s));
            trace.push(Step {
                round: d,
                kind: StepKind::SubkeyAdd { subkey: s },
                state,
                description: format!("Added subkey {}", s),
            });
        }

        for pair in 0..2 {
            let r = rotation(d, pair);
            let (y0, y1) = mix(state[2 * pair], state[2 * pair + 1], r);
            state[2 * pair] = y0;
            state[2 * pair + 1] = y1;
            trace.push(Step {
                round: d,
                kind: StepKind::Mix { pair, rotation: r },
                state,
                description: format!("Mixed pair {} with rotation {}", pair, r),
            });
        }

        state.swap(1, 3);
        trace.push(Step {
            round: d,
            kind: StepKind::Permute,
            state,
            description: String::from("Permuted words: [0,3,2,1]"),
        });
    }

    add_subkey(&mut state, subkeys.get(SUBKEY_COUNT - 1));
    trace.push(Step {
        round: ROUNDS,
        kind: StepKind::SubkeyAdd {
            subkey: SUBKEY_COUNT - 1,
        },
        state,
        description: String::from("Added final subkey 18"),
    });

    TracedBlock { block: state, trace }
}

/// Decrypts one 256-bit block, returning the plaintext words and a trace in
/// the same forward order as [`encrypt_block`].
///
/// The algorithm necessarily runs backwards (round 71 down to 0), so steps
/// are recorded in execution order and the whole list is reversed once at
/// the end. Presentation layers therefore handle both directions
/// identically.
pub fn decrypt_block(
    key: &[Word; BLOCK_WORDS],
    tweak: &[Word; TWEAK_WORDS],
    ciphertext: &[Word; BLOCK_WORDS],
) -> TracedBlock {
    let subkeys = Subkeys::derive(key, tweak);
    let mut state = *ciphertext;
    let mut trace = Vec::with_capacity(STEPS_PER_TRACE);

    sub_subkey(&mut state, subkeys.get(SUBKEY_COUNT - 1));
    trace.push(Step {
        round: ROUNDS,
        kind: StepKind::SubkeyAdd {
            subkey: SUBKEY_COUNT - 1,
        },
        state,
        description: String::from("Subtracted final subkey 18"),
    });

    for d in (0..ROUNDS).rev() {
        // The permutation is a swap of words 1 and 3, so it is self-inverse.
        state.swap(1, 3);
        trace.push(Step {
            round: d,
            kind: StepKind::Permute,
            state,
            description: String::from("Inverse permutation: [0,3,2,1]"),
        });

        for pair in (0..2).rev() {
            let r = rotation(d, pair);
            let (a, b) = invert_mix(state[2 * pair], state[2 * pair + 1], r);
            state[2 * pair] = a;
            state[2 * pair + 1] = b;
            trace.push(Step {
                round: d,
                kind: StepKind::Mix { pair, rotation: r },
                state,
                description: format!("Inverse mixed pair {} with rotation {}", pair, r),
            });
        }

        if d % SUBKEY_INTERVAL == 0 {
            let s = d / SUBKEY_INTERVAL;
            sub_subkey(&mut state, subkeys.get(s));
            trace.push(Step {
                round: d,
                kind: StepKind::SubkeyAdd { subkey: s },
                state,
                description: format!("Subtracted subkey {}", s),
            });
        }
    }

    // Recorded backwards (round 72 first); present forwards.
    trace.reverse();

    TracedBlock { block: state, trace }
}
