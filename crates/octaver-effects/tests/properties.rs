//! Property-based tests for the octaver.
//!
//! Verifies invariants that must hold for any input: finite and bounded
//! output, a fill level that never reaches capacity, output that does not
//! depend on which diagnostics observer is attached, and a silent block that
//! always rewinds to the initial state.

use octaver_core::{Effect, ParameterInfo};
use octaver_effects::{Diagnostics, EdgeState, InputStride, Octaver};
use proptest::prelude::*;

/// Counts every hook so the observer does real work.
#[derive(Default)]
struct Counter(usize);

impl Diagnostics for Counter {
    fn buffer_overflow(&mut self, _fill: usize) {
        self.0 += 1;
    }

    fn edge_flip(&mut self, _from: EdgeState, replayed: usize) {
        self.0 += replayed;
    }

    fn output_mixed(&mut self, _position: usize) {
        self.0 += 1;
    }

    fn output_underrun(&mut self, _position: usize) {
        self.0 += 1;
    }
}

fn stride_strategy() -> impl Strategy<Value = InputStride> {
    prop_oneof![Just(InputStride::Decimate), Just(InputStride::Every)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// At unity gain a full-scale input never produces more than full-scale
    /// output.
    #[test]
    fn unity_gain_output_bounded(
        blocks in prop::collection::vec(prop::collection::vec(-1.0f32..=1.0, 0..300), 1..8),
        stride in stride_strategy(),
    ) {
        let mut octaver = Octaver::new(48000.0).with_stride(stride);
        for block in &blocks {
            let mut output = vec![0.0; block.len()];
            octaver.process_block(block, &mut output);
            for &y in &output {
                prop_assert!(y.is_finite());
                prop_assert!(y.abs() <= 1.0 + 1e-6, "output {} out of range", y);
            }
        }
    }

    /// The ring never reports a fill at or above its capacity.
    #[test]
    fn fill_below_capacity(
        block_len in 1usize..4096,
        blocks in 1usize..12,
        gain_db in -90.0f32..=24.0,
        stride in stride_strategy(),
    ) {
        let mut octaver = Octaver::new(48000.0).with_stride(stride);
        octaver.set_param(0, gain_db);
        let input: Vec<f32> = (0..block_len).map(|i| if (i / 37) % 2 == 0 { 0.7 } else { -0.3 }).collect();
        let mut output = vec![0.0; block_len];
        for _ in 0..blocks {
            octaver.process_block(&input, &mut output);
            prop_assert!(octaver.buffered() < octaver.ring().capacity());
        }
    }

    /// Attaching an observer never changes the audio.
    #[test]
    fn diagnostics_do_not_change_output(
        blocks in prop::collection::vec(prop::collection::vec(-1.0f32..=1.0, 0..200), 1..6),
        stride in stride_strategy(),
    ) {
        let mut plain = Octaver::new(48000.0).with_stride(stride);
        let mut observed = Octaver::with_diagnostics(48000.0, Counter::default()).with_stride(stride);

        for block in &blocks {
            let mut a = vec![0.0; block.len()];
            let mut b = vec![0.0; block.len()];
            plain.process_block(block, &mut a);
            observed.process_block(block, &mut b);
            prop_assert_eq!(a, b);
            prop_assert_eq!(plain.snapshot(), observed.snapshot());
        }
    }

    /// Reset returns the instance to the state of a fresh one.
    #[test]
    fn reset_matches_fresh(
        warmup in prop::collection::vec(-1.0f32..=1.0, 1..500),
        probe in prop::collection::vec(-1.0f32..=1.0, 1..200),
    ) {
        let mut used = Octaver::new(48000.0);
        let mut scratch = vec![0.0; warmup.len()];
        used.process_block(&warmup, &mut scratch);
        used.reset();

        let mut fresh = Octaver::new(48000.0);
        let mut a = vec![0.0; probe.len()];
        let mut b = vec![0.0; probe.len()];
        used.process_block(&probe, &mut a);
        fresh.process_block(&probe, &mut b);
        prop_assert_eq!(a, b);
    }

    /// A silent block rewinds every index and the state machine whatever
    /// came before, and the instance then behaves like a new one.
    #[test]
    fn silent_block_rewinds_from_any_state(
        history in prop::collection::vec(prop::collection::vec(-1.0f32..=1.0, 0..400), 1..6),
        silent_len in 1usize..300,
        next in prop::collection::vec(-1.0f32..=1.0, 1..200),
        stride in stride_strategy(),
    ) {
        let mut used = Octaver::new(48000.0).with_stride(stride);
        for block in &history {
            let mut output = vec![0.0; block.len()];
            used.process_block(block, &mut output);
        }

        let silence = vec![0.0; silent_len];
        let mut output = vec![0.0; silent_len];
        used.process_block(&silence, &mut output);

        let snapshot = used.snapshot();
        prop_assert_eq!(snapshot.state, EdgeState::FirstRun);
        prop_assert_eq!(snapshot.start, 0);
        prop_assert_eq!(snapshot.end, 0);
        prop_assert_eq!(snapshot.last_flip, 0);
        prop_assert_eq!(snapshot.fill, 0);

        let mut fresh = Octaver::new(48000.0).with_stride(stride);
        let mut a = vec![0.0; next.len()];
        let mut b = vec![0.0; next.len()];
        used.process_block(&next, &mut a);
        fresh.process_block(&next, &mut b);
        prop_assert_eq!(a, b);
        prop_assert_eq!(used.snapshot(), fresh.snapshot());
    }
}
