//! Trace records: one [`Step`] per micro-operation of the permutation
//! network, each carrying its own state snapshot.
//!
//! Snapshots are owned values, never references into the working state, so a
//! later round can never corrupt an earlier trace entry. Traces always read
//! forward (round 0 to round 72) regardless of the direction the algorithm
//! actually ran; decryption reverses its internally backwards step list
//! before returning it.

use crate::{Word, BLOCK_WORDS};

/// Which micro-operation a [`Step`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StepKind {
    /// Subkey injection (addition during encryption, subtraction during
    /// decryption). `subkey` is the schedule index, 0..=18.
    SubkeyAdd { subkey: usize },
    /// MIX (or inverse MIX) on word pair `pair` (0 => words 0/1,
    /// 1 => words 2/3) with rotation amount `rotation`.
    Mix { pair: usize, rotation: u32 },
    /// The fixed word permutation `[0, 3, 2, 1]` (self-inverse).
    Permute,
}

/// One recorded micro-operation with the state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Step {
    /// Round number, 0..=72. Round 72 is the final subkey injection.
    pub round: usize,
    pub kind: StepKind,
    /// Snapshot of all four state words after this operation.
    pub state: [Word; BLOCK_WORDS],
    /// Human-readable summary for presentation layers.
    pub description: String,
}

impl Step {
    /// Subkey schedule index, if this step is a subkey injection.
    pub fn subkey_index(&self) -> Option<usize> {
        match self.kind {
            StepKind::SubkeyAdd { subkey } => Some(subkey),
            _ => None,
        }
    }

    /// Word-pair index, if this step is a MIX.
    pub fn pair_index(&self) -> Option<usize> {
        match self.kind {
            StepKind::Mix { pair, .. } => Some(pair),
            _ => None,
        }
    }

    /// Rotation amount, if this step is a MIX.
    pub fn rotation(&self) -> Option<u32> {
        match self.kind {
            StepKind::Mix { rotation, .. } => Some(rotation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_kind() {
        let step = Step {
            round: 3,
            kind: StepKind::Mix { pair: 1, rotation: 57 },
            state: [0; 4],
            description: String::from("Mixed pair 1 with rotation 57"),
        };
        assert_eq!(step.pair_index(), Some(1));
        assert_eq!(step.rotation(), Some(57));
        assert_eq!(step.subkey_index(), None);

        let step = Step {
            round: 0,
            kind: StepKind::SubkeyAdd { subkey: 0 },
            state: [0; 4],
            description: String::from("Added subkey 0"),
        };
        assert_eq!(step.subkey_index(), Some(0));
        assert_eq!(step.pair_index(), None);
        assert_eq!(step.rotation(), None);
    }
}
