//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between DSP code and whatever drives it
//! (the offline engine, the plugin glue, tests).
//!
//! ## Design Decisions
//!
//! - **Block processing**: Effects are driven one host block at a time.
//!   Some decisions (silence detection, for one) are made per block, so the
//!   block is the unit of work rather than the sample.
//!
//! - **Mono**: One input slice, one output slice of equal length.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.

/// Core trait for all audio effects.
///
/// # Example
///
/// ```rust
/// use octaver_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
///         for (inp, out) in input.iter().zip(output.iter_mut()) {
///             *out = inp * self.gain;
///         }
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
/// ```
pub trait Effect {
    /// Process one host block.
    ///
    /// `output` must be fully written. Callers pass slices of equal length;
    /// implementations may `debug_assert!` this.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]);

    /// Update the sample rate.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state to its freshly constructed condition without
    /// changing parameters.
    fn reset(&mut self);

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }
}

impl<E: Effect + ?Sized> Effect for &mut E {
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        (**self).process_block(input, output);
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        (**self).set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn latency_samples(&self) -> usize {
        (**self).latency_samples()
    }
}
