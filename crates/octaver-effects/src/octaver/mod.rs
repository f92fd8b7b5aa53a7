//! One-octave-up effect by half-wave replication.
//!
//! Per block: gain-scaled input is fed to the [`HalfWaveReplicator`], which
//! fills the ring buffer and doubles each half-wave at its zero crossing; the
//! mixer drains the ring into the output blended with dry signal; finally the
//! [`SilenceGate`] verdict may rewind everything to the initial state.

mod edge;
pub mod mixer;
mod replicator;
mod silence;

pub use edge::{EdgeDetector, EdgeState};
pub use mixer::{DRY_GAIN, WET_GAIN};
pub use replicator::{HalfWaveReplicator, InputStride};
pub use silence::{SILENCE_THRESHOLD, SilenceGate};

use crate::diagnostics::{BlockSnapshot, Diagnostics, NoDiagnostics};
use octaver_core::{
    DEFAULT_CAPACITY, Effect, MUTE_FLOOR_DB, ParamDescriptor, ParamId, ParameterInfo, RingBuffer,
    gain_coefficient,
};

/// Stable ID of the gain parameter.
pub const GAIN_PARAM_ID: ParamId = ParamId(100);

/// Upper bound of the gain control in dB.
const GAIN_MAX_DB: f32 = 24.0;

/// Single-channel octave-up effect.
///
/// Owns all of its state. Everything is allocated in the constructor, so
/// [`process_block`](Effect::process_block) never allocates, blocks or
/// fails.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Gain | -90.0–24.0 dB | 0.0 |
///
/// The range is what a host should offer; the value is stored as given and
/// goes through the gain law unchanged. At or below -90 dB, and for NaN, the
/// input is hard-muted before it reaches the ring buffer. The 75/25 wet/dry
/// blend and the silence threshold are fixed.
///
/// # Example
///
/// ```rust
/// use octaver_core::Effect;
/// use octaver_effects::{EdgeState, Octaver};
///
/// let mut octaver = Octaver::new(48000.0);
/// let mut out = [0.0; 4];
/// octaver.process_block(&[0.5, 0.5, -0.5, -0.5], &mut out);
/// assert_ne!(octaver.state(), EdgeState::FirstRun);
///
/// // A silent block rewinds the instance.
/// octaver.process_block(&[0.0; 4], &mut out);
/// assert_eq!(octaver.state(), EdgeState::FirstRun);
/// assert_eq!(octaver.buffered(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Octaver<D: Diagnostics = NoDiagnostics> {
    gain_db: f32,
    /// Linear gain, recomputed at the start of every block.
    coefficient: f32,
    /// Signed multiplier on the input. Always +1.
    direction: f32,
    ring: RingBuffer,
    replicator: HalfWaveReplicator,
    gate: SilenceGate,
    diagnostics: D,
    sample_rate: f32,
}

impl Octaver {
    /// Create an octaver at unity gain with the default input stride.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_diagnostics(sample_rate, NoDiagnostics)
    }
}

impl<D: Diagnostics> Octaver<D> {
    /// Create an octaver reporting to `diagnostics`.
    pub fn with_diagnostics(sample_rate: f32, diagnostics: D) -> Self {
        Self {
            gain_db: 0.0,
            coefficient: gain_coefficient(0.0),
            direction: 1.0,
            ring: RingBuffer::new(DEFAULT_CAPACITY),
            replicator: HalfWaveReplicator::new(InputStride::default()),
            gate: SilenceGate::new(),
            diagnostics,
            sample_rate,
        }
    }

    /// Builder-style stride selection.
    pub fn with_stride(mut self, stride: InputStride) -> Self {
        self.set_stride(stride);
        self
    }

    /// Set the input stride. Takes effect on the next block.
    pub fn set_stride(&mut self, stride: InputStride) {
        self.replicator.set_stride(stride);
    }

    /// Current input stride.
    pub fn stride(&self) -> InputStride {
        self.replicator.stride()
    }

    /// Set gain in dB. Applied from the next block.
    ///
    /// Not clamped: anything at or below -90 dB mutes, and so does NaN.
    pub fn set_gain_db(&mut self, gain_db: f32) {
        self.gain_db = gain_db;
    }

    /// Current gain in dB.
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }

    /// Linear gain coefficient used by the most recent block.
    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// Signed input multiplier, fixed at +1.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Half-wave state machine position.
    pub fn state(&self) -> EdgeState {
        self.replicator.state()
    }

    /// Samples waiting in the ring buffer.
    pub fn buffered(&self) -> usize {
        self.ring.len()
    }

    /// Read-only view of the ring buffer.
    pub fn ring(&self) -> &RingBuffer {
        &self.ring
    }

    /// Ring index where the current half-wave began.
    pub fn last_flip_index(&self) -> usize {
        self.replicator.last_flip()
    }

    /// Current index state.
    pub fn snapshot(&self) -> BlockSnapshot {
        BlockSnapshot {
            state: self.replicator.state(),
            fill: self.ring.len(),
            start: self.ring.start(),
            end: self.ring.end(),
            last_flip: self.replicator.last_flip(),
        }
    }

    /// The attached observer.
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// The attached observer, mutably.
    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    /// Consume the effect and return the observer.
    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// Sample rate last set. Processing does not depend on it.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Rewind ring indices and the state machine. Storage is left as is.
    fn rewind(&mut self) {
        self.ring.rewind();
        self.replicator.reset();
    }
}

impl<D: Diagnostics> Effect for Octaver<D> {
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );

        self.coefficient = gain_coefficient(self.gain_db);
        let scale = 0.5 * self.coefficient * self.direction;

        let snapshot = self.snapshot();
        self.diagnostics.block_started(&snapshot);

        self.gate.begin_block();
        self.replicator.process_block(
            input,
            scale,
            &mut self.ring,
            &mut self.gate,
            &mut self.diagnostics,
        );

        mixer::mix_block(&mut self.ring, input, output, &mut self.diagnostics);

        if self.gate.is_silent() {
            self.rewind();
            self.diagnostics.silence_detected();
        }

        let snapshot = self.snapshot();
        self.diagnostics.block_finished(&snapshot);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    fn reset(&mut self) {
        self.rewind();
    }

    fn latency_samples(&self) -> usize {
        self.ring.len()
    }
}

fn gain_descriptor() -> ParamDescriptor {
    ParamDescriptor::gain_db("Gain", "Gain", MUTE_FLOOR_DB, GAIN_MAX_DB, 0.0)
        .with_id(GAIN_PARAM_ID, "oct_gain")
}

impl<D: Diagnostics> ParameterInfo for Octaver<D> {
    fn param_count(&self) -> usize {
        1
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(gain_descriptor()),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.gain_db,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if index == 0 {
            self.set_gain_db(value);
        }
    }
}
