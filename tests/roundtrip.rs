use threefish256::{
    codec, decrypt_block, encrypt_block, mix, StepKind, Word, ROUNDS, STEPS_PER_TRACE,
};

/// Deterministic pseudo-random word stream (splitmix64) so property tests
/// cover varied inputs without a rand dependency.
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn words<const N: usize>(&mut self) -> [Word; N] {
        let mut out = [0; N];
        for w in out.iter_mut() {
            *w = self.next();
        }
        out
    }
}

#[test]
fn round_trip_over_many_random_inputs() {
    let mut rng = SplitMix64(0x5EED);
    for i in 0..200 {
        let key = rng.words::<4>();
        let tweak = rng.words::<2>();
        let plaintext = rng.words::<4>();

        let encrypted = encrypt_block(&key, &tweak, &plaintext);
        let decrypted = decrypt_block(&key, &tweak, &encrypted.block);
        assert_eq!(
            decrypted.block, plaintext,
            "round trip failed for random case {}",
            i
        );
    }
}

#[test]
fn mix_inverse_over_all_rotations() {
    let mut rng = SplitMix64(0xF00D);
    for r in 0..64u32 {
        for _ in 0..32 {
            let (a, b) = (rng.next(), rng.next());
            let (y0, y1) = mix::mix(a, b, r);
            assert_eq!(mix::invert_mix(y0, y1, r), (a, b));
        }
    }
    // Edge words at every rotation.
    for r in 0..64u32 {
        for &(a, b) in &[(0, 0), (u64::MAX, u64::MAX), (0, u64::MAX), (1, 1 << 63)] {
            let (y0, y1) = mix::mix(a, b, r);
            assert_eq!(mix::invert_mix(y0, y1, r), (a, b));
        }
    }
}

#[test]
fn trace_shape_is_input_independent() {
    let mut rng = SplitMix64(0xCAFE);
    for _ in 0..20 {
        let key = rng.words::<4>();
        let tweak = rng.words::<2>();
        let plaintext = rng.words::<4>();
        for result in [
            encrypt_block(&key, &tweak, &plaintext),
            decrypt_block(&key, &tweak, &plaintext),
        ] {
            assert_eq!(result.trace.len(), STEPS_PER_TRACE);
            assert_eq!(result.trace[0].round, 0);
            assert_eq!(result.trace[0].subkey_index(), Some(0));
            let last = result.trace.last().unwrap();
            assert_eq!(last.round, ROUNDS);
            assert_eq!(last.subkey_index(), Some(18));
        }
    }
}

#[test]
fn per_round_step_order_is_subkey_mix_mix_permute() {
    let result = encrypt_block(&[1, 2, 3, 4], &[5, 6], &[7, 8, 9, 10]);
    // Rounds divisible by 4 carry 4 steps, others 3; within a round the
    // order is SubkeyAdd (if any), Mix pair 0, Mix pair 1, Permute.
    let mut steps = result.trace.iter().peekable();
    for round in 0..ROUNDS {
        if round % 4 == 0 {
            let step = steps.next().unwrap();
            assert_eq!(step.round, round);
            assert_eq!(step.subkey_index(), Some(round / 4));
        }
        for pair in 0..2 {
            let step = steps.next().unwrap();
            assert_eq!(step.round, round);
            assert_eq!(step.pair_index(), Some(pair));
            assert_eq!(step.rotation(), Some(mix::rotation(round, pair)));
        }
        let step = steps.next().unwrap();
        assert_eq!(step.round, round);
        assert_eq!(step.kind, StepKind::Permute);
    }
    let last = steps.next().unwrap();
    assert_eq!(last.subkey_index(), Some(18));
    assert!(steps.next().is_none());
}

#[test]
fn decrypt_trace_descriptions_name_inverse_operations() {
    let encrypted = encrypt_block(&[0; 4], &[0; 2], &[0; 4]);
    let decrypted = decrypt_block(&[0; 4], &[0; 2], &encrypted.block);
    assert_eq!(decrypted.trace[0].description, "Subtracted subkey 0");
    assert!(decrypted
        .trace
        .iter()
        .filter_map(|s| s.pair_index().map(|_| &s.description))
        .all(|d| d.starts_with("Inverse mixed pair")));
    assert_eq!(
        decrypted.trace.last().unwrap().description,
        "Subtracted final subkey 18"
    );
}

#[test]
fn zero_vector_first_permutation_is_all_zero() {
    let result = encrypt_block(&[0; 4], &[0; 2], &[0; 4]);
    let round0: Vec<_> = result.trace.iter().take_while(|s| s.round == 0).collect();
    assert_eq!(round0.len(), 4, "subkey + 2 mixes + permute in round 0");
    for step in round0 {
        assert_eq!(step.state, [0; 4]);
    }
    assert_ne!(
        result.block,
        [0; 4],
        "subkey schedule parity must move the state off zero over 72 rounds"
    );
}

#[test]
fn trace_snapshots_are_frozen_values() {
    let result = encrypt_block(&[1, 1, 1, 1], &[2, 2], &[3, 3, 3, 3]);
    // Consecutive snapshots differ once the state is non-trivial; each Step
    // owns its state by value, so none can alias the working register.
    let distinct: std::collections::HashSet<_> = result.trace.iter().map(|s| s.state).collect();
    assert!(distinct.len() > STEPS_PER_TRACE / 2);
}

#[test]
fn state_formatting_matches_presentation_contract() {
    let result = encrypt_block(&[0; 4], &[0; 2], &[0; 4]);
    let rendered = codec::format_state(&result.trace[0].state);
    assert_eq!(
        rendered,
        "0000 0000 0000 0000 | 0000 0000 0000 0000 | 0000 0000 0000 0000 | 0000 0000 0000 0000"
    );
}

#[cfg(feature = "parallel")]
#[test]
fn batch_api_matches_sequential_results() {
    use threefish256::{decrypt_blocks, encrypt_blocks};
    let key = [1, 2, 3, 4];
    let tweak = [5, 6];
    let mut rng = SplitMix64(0xBA7C);
    let blocks: Vec<[Word; 4]> = (0..32).map(|_| rng.words()).collect();

    let encrypted = encrypt_blocks(&key, &tweak, &blocks);
    for (block, result) in blocks.iter().zip(encrypted.iter()) {
        assert_eq!(*result, encrypt_block(&key, &tweak, block));
    }

    let ciphertexts: Vec<[Word; 4]> = encrypted.iter().map(|r| r.block).collect();
    let decrypted = decrypt_blocks(&key, &tweak, &ciphertexts);
    for (original, result) in blocks.iter().zip(decrypted.iter()) {
        assert_eq!(result.block, *original);
    }
}
