//! Per-block silence detection.
//!
//! A block counts as silent when no consulted half-scaled value exceeds
//! [`SILENCE_THRESHOLD`] in magnitude. The octaver then rewinds its ring
//! buffer and state machine, which caps the latency a long run of odd
//! half-waves can build up at one block.

/// Magnitude a half-scaled sample must exceed to mark a block as not silent.
pub const SILENCE_THRESHOLD: f32 = 0.0001;

/// Accumulates the silence verdict for the block in progress.
#[derive(Debug, Clone, Copy)]
pub struct SilenceGate {
    silent: bool,
}

impl SilenceGate {
    /// A gate with an open (silent) verdict.
    pub const fn new() -> Self {
        Self { silent: true }
    }

    /// Starts a new block.
    #[inline]
    pub fn begin_block(&mut self) {
        self.silent = true;
    }

    /// Looks at one value produced during the block.
    ///
    /// NaN compares false both ways and never breaks silence; infinities do.
    #[inline]
    pub fn observe(&mut self, value: f32) {
        if value > SILENCE_THRESHOLD || value < -SILENCE_THRESHOLD {
            self.silent = false;
        }
    }

    /// Verdict for the values observed since [`begin_block`](Self::begin_block).
    ///
    /// A block with no values is silent.
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

impl Default for SilenceGate {
    fn default() -> Self {
        Self::new()
    }
}
