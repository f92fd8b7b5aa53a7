//! Observer hooks for the octaver's processing path.
//!
//! The octaver reports what it is doing through a [`Diagnostics`]
//! implementation chosen at construction time. Every method has an empty
//! default body, so [`NoDiagnostics`] compiles away entirely and the DSP
//! results are identical whichever observer is plugged in.
//!
//! Implementations called from a real-time thread must not block or
//! allocate. [`TracingDiagnostics`] (behind the `tracing` feature) only emits
//! events; writing a text log to disk belongs on an offline path.

use crate::octaver::EdgeState;

/// Index state of the octaver at a block boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSnapshot {
    /// Half-wave state machine position.
    pub state: EdgeState,
    /// Number of buffered samples waiting to be mixed out.
    pub fill: usize,
    /// Ring buffer read index.
    pub start: usize,
    /// Ring buffer write index.
    pub end: usize,
    /// Start of the half-wave accumulated since the previous edge flip.
    pub last_flip: usize,
}

/// Side-channel observer for [`Octaver`](crate::Octaver) processing.
pub trait Diagnostics {
    /// Called before any sample of a block is processed.
    fn block_started(&mut self, _snapshot: &BlockSnapshot) {}

    /// Called before a push that will overwrite unread data.
    fn buffer_overflow(&mut self, _fill: usize) {}

    /// Called after an edge flip replayed `replayed` samples.
    ///
    /// `from` is the state the detector was in before the flip.
    fn edge_flip(&mut self, _from: EdgeState, _replayed: usize) {}

    /// Called for each output position filled from the ring buffer.
    fn output_mixed(&mut self, _position: usize) {}

    /// Called for each output position that fell back to dry signal.
    fn output_underrun(&mut self, _position: usize) {}

    /// Called when a block was silent and the state was rewound.
    fn silence_detected(&mut self) {}

    /// Called after the block's output is written.
    fn block_finished(&mut self, _snapshot: &BlockSnapshot) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn block_started(&mut self, snapshot: &BlockSnapshot) {
        (**self).block_started(snapshot);
    }

    fn buffer_overflow(&mut self, fill: usize) {
        (**self).buffer_overflow(fill);
    }

    fn edge_flip(&mut self, from: EdgeState, replayed: usize) {
        (**self).edge_flip(from, replayed);
    }

    fn output_mixed(&mut self, position: usize) {
        (**self).output_mixed(position);
    }

    fn output_underrun(&mut self, position: usize) {
        (**self).output_underrun(position);
    }

    fn silence_detected(&mut self) {
        (**self).silence_detected();
    }

    fn block_finished(&mut self, snapshot: &BlockSnapshot) {
        (**self).block_finished(snapshot);
    }
}

/// Observer that ignores everything. The default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {}

/// Observer that forwards block-level events to `tracing`.
///
/// Per-sample hooks are not forwarded.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

#[cfg(feature = "tracing")]
impl Diagnostics for TracingDiagnostics {
    fn block_started(&mut self, snapshot: &BlockSnapshot) {
        tracing::trace!(
            state = ?snapshot.state,
            fill = snapshot.fill,
            start = snapshot.start,
            end = snapshot.end,
            last_flip = snapshot.last_flip,
            "octaver block start"
        );
    }

    fn buffer_overflow(&mut self, fill: usize) {
        tracing::debug!(fill, "octaver buffer overflow");
    }

    fn edge_flip(&mut self, from: EdgeState, replayed: usize) {
        tracing::trace!(?from, replayed, "octaver edge flip");
    }

    fn silence_detected(&mut self) {
        tracing::debug!("octaver silence detected, state rewound");
    }
}
