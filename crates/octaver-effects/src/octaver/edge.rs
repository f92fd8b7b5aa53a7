//! Half-wave polarity tracking.

/// Position of the half-wave state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeState {
    /// No sample has established a polarity yet.
    #[default]
    FirstRun,
    /// The current half-cycle is non-negative.
    RisingEdge,
    /// The current half-cycle is negative.
    FallingEdge,
}

/// Tracks which half-cycle the input is in and detects sign changes.
///
/// Detection is a coarse sign check on two consecutive samples, no
/// interpolation between them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    state: EdgeState,
}

impl EdgeDetector {
    /// A detector in [`EdgeState::FirstRun`].
    pub const fn new() -> Self {
        Self {
            state: EdgeState::FirstRun,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> EdgeState {
        self.state
    }

    /// Leaves `FirstRun` using the sign of the first sample seen.
    ///
    /// No-op in any other state.
    #[inline]
    pub fn prime(&mut self, first_sample: f32) {
        if self.state == EdgeState::FirstRun {
            self.state = if first_sample >= 0.0 {
                EdgeState::RisingEdge
            } else {
                EdgeState::FallingEdge
            };
        }
    }

    /// Sign applied to samples entering the ring buffer.
    ///
    /// Negative half-cycles are stored inverted so every stored half-wave
    /// has forward polarity before its replay.
    #[inline]
    pub fn polarity(&self) -> f32 {
        match self.state {
            EdgeState::FallingEdge => -1.0,
            EdgeState::RisingEdge | EdgeState::FirstRun => 1.0,
        }
    }

    /// Whether the two most recent samples leave the current half-cycle.
    ///
    /// Rising flips when either sample is negative, falling flips when
    /// either is non-negative. NaN never flips.
    #[inline]
    pub fn is_flip(&self, current: f32, previous: f32) -> bool {
        match self.state {
            EdgeState::RisingEdge => current < 0.0 || previous < 0.0,
            EdgeState::FallingEdge => current >= 0.0 || previous >= 0.0,
            EdgeState::FirstRun => false,
        }
    }

    /// Swaps rising and falling. `FirstRun` is left alone.
    #[inline]
    pub fn toggle(&mut self) {
        self.state = match self.state {
            EdgeState::RisingEdge => EdgeState::FallingEdge,
            EdgeState::FallingEdge => EdgeState::RisingEdge,
            EdgeState::FirstRun => EdgeState::FirstRun,
        };
    }

    /// Back to `FirstRun`.
    #[inline]
    pub fn reset(&mut self) {
        self.state = EdgeState::FirstRun;
    }
}
