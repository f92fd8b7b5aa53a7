//! Half-wave replication: the octave-up core.
//!
//! Scaled input goes into the ring buffer. Whenever the edge detector sees
//! the signal change sign, every sample stored since the previous flip is
//! pushed again, inverted, right after itself. Playing a half-wave and then
//! its inversion back to back yields a waveform with twice as many zero
//! crossings per unit time.

use super::edge::{EdgeDetector, EdgeState};
use super::silence::SilenceGate;
use crate::diagnostics::Diagnostics;
use octaver_core::RingBuffer;

/// Which input positions the replicator consults.
///
/// With [`InputStride::Decimate`] half the block is consulted and replication
/// doubles it back, so one block pushes roughly one block's worth of samples
/// and the fill level stays level. With [`InputStride::Every`] each block
/// pushes about twice what the mixer drains; the buffer grows until it
/// overwrites itself or a silent block rewinds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStride {
    /// Consult positions 0, 2, 4, … Each consulted sample is read twice
    /// into two half-scaled temporaries whose sum is pushed, and the edge
    /// check looks at the consulted sample and its skipped neighbour.
    #[default]
    Decimate,
    /// Consult every position. The half-scaled sample is pushed and the edge
    /// check looks at it and the previously consulted sample.
    Every,
}

impl InputStride {
    /// Distance between consulted input positions.
    #[inline]
    pub const fn step(self) -> usize {
        match self {
            InputStride::Decimate => 2,
            InputStride::Every => 1,
        }
    }
}

/// Writes scaled input into the ring buffer and replays each completed
/// half-wave inverted.
///
/// Owns the edge detector and the index marking where the current half-wave
/// started. No other component moves that index.
#[derive(Debug, Clone, Default)]
pub struct HalfWaveReplicator {
    edge: EdgeDetector,
    last_flip: usize,
    stride: InputStride,
    /// Last consulted scaled sample, carried across blocks for `Every`.
    previous: Option<f32>,
}

impl HalfWaveReplicator {
    /// A replicator in the initial state.
    pub fn new(stride: InputStride) -> Self {
        Self {
            edge: EdgeDetector::new(),
            last_flip: 0,
            stride,
            previous: None,
        }
    }

    /// Current half-wave state.
    #[inline]
    pub fn state(&self) -> EdgeState {
        self.edge.state()
    }

    /// Ring index where the current half-wave began.
    #[inline]
    pub fn last_flip(&self) -> usize {
        self.last_flip
    }

    /// Input stride in use.
    #[inline]
    pub fn stride(&self) -> InputStride {
        self.stride
    }

    /// Changes the input stride. Takes effect on the next block.
    pub fn set_stride(&mut self, stride: InputStride) {
        self.stride = stride;
        self.previous = None;
    }

    /// Back to `FirstRun` with the flip index at zero.
    ///
    /// The ring buffer must be rewound alongside, or the flip index will
    /// point into stale data.
    pub fn reset(&mut self) {
        self.edge.reset();
        self.last_flip = 0;
        self.previous = None;
    }

    /// Runs one block of input through the replicator.
    ///
    /// `scale` is `0.5 × gain coefficient × direction`. Every half-scaled
    /// value consulted is shown to `gate`.
    pub fn process_block<D: Diagnostics>(
        &mut self,
        input: &[f32],
        scale: f32,
        ring: &mut RingBuffer,
        gate: &mut SilenceGate,
        diagnostics: &mut D,
    ) {
        let Some(&first) = input.first() else {
            return;
        };
        self.edge.prime(first);

        for pos in (0..input.len()).step_by(self.stride.step()) {
            let (pushed, current, previous) = match self.stride {
                InputStride::Decimate => {
                    let value1 = input[pos] * scale;
                    let value2 = input[pos] * scale;
                    gate.observe(value1);
                    gate.observe(value2);
                    // The skipped neighbour; an odd-length block ends on itself.
                    let neighbour = input.get(pos + 1).map_or(value1, |&x| x * scale);
                    (value1 + value2, neighbour, value1)
                }
                InputStride::Every => {
                    let value = input[pos] * scale;
                    gate.observe(value);
                    let previous = self.previous.replace(value).unwrap_or(value);
                    (value, value, previous)
                }
            };

            push(ring, pushed * self.edge.polarity(), diagnostics);

            if self.edge.is_flip(current, previous) {
                let from = self.edge.state();
                let replayed = self.replay_inverted(ring, diagnostics);
                diagnostics.edge_flip(from, replayed);
                self.edge.toggle();
            }
        }
    }

    /// Pushes every sample from `last_flip` up to the current write index
    /// again, inverted, and moves `last_flip` to the new write index.
    fn replay_inverted<D: Diagnostics>(&mut self, ring: &mut RingBuffer, diagnostics: &mut D) -> usize {
        let end = ring.end();
        let mut replayed = 0;
        while self.last_flip != end {
            let sample = ring.get(self.last_flip);
            push(ring, -sample, diagnostics);
            self.last_flip = ring.next_index(self.last_flip);
            replayed += 1;
        }
        self.last_flip = ring.end();
        replayed
    }
}

#[inline]
fn push<D: Diagnostics>(ring: &mut RingBuffer, sample: f32, diagnostics: &mut D) {
    if ring.is_full() {
        diagnostics.buffer_overflow(ring.len());
    }
    ring.push(sample);
}
