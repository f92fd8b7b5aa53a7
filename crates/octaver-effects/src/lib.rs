//! Octaver Effects - the octave-up effect built on octaver-core
//!
//! - [`Octaver`] - Single-channel octave-up by half-wave replication
//! - [`Diagnostics`] - Injectable observer for the processing path
//!
//! ## How it works
//!
//! Each half-cycle of the input is written into a ring buffer and, at the
//! next zero crossing, replayed once more inverted. A half-wave followed by
//! its inversion is a full cycle, so the buffered signal crosses zero twice
//! as often as the input: one octave up, with no spectral analysis and only
//! half a cycle of latency.
//!
//! ## Example
//!
//! ```rust
//! use octaver_core::Effect;
//! use octaver_effects::Octaver;
//!
//! let mut octaver = Octaver::new(48000.0);
//! octaver.set_gain_db(-3.0);
//!
//! let input: Vec<f32> = (0..256).map(|i| (i as f32 * 0.05).sin()).collect();
//! let mut output = vec![0.0; input.len()];
//! octaver.process_block(&input, &mut output);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod diagnostics;
pub mod octaver;

pub use diagnostics::{BlockSnapshot, Diagnostics, NoDiagnostics};
#[cfg(feature = "tracing")]
pub use diagnostics::TracingDiagnostics;
pub use octaver::{
    DRY_GAIN, EdgeDetector, EdgeState, GAIN_PARAM_ID, HalfWaveReplicator, InputStride, Octaver,
    SILENCE_THRESHOLD, SilenceGate, WET_GAIN,
};
