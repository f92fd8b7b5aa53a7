//! Dry/wet output mixing.

use crate::diagnostics::Diagnostics;
use octaver_core::RingBuffer;

/// Weight of the buffered (processed) signal.
pub const WET_GAIN: f32 = 0.75;

/// Weight of the unprocessed input.
pub const DRY_GAIN: f32 = 0.25;

/// Mixes one output sample.
///
/// With a buffered sample the result is `wet × 0.75 + dry × 0.25`. Without
/// one the effect falls back to attenuated dry signal, `dry × 0.25`.
#[inline]
pub fn mix(wet: Option<f32>, dry: f32) -> f32 {
    match wet {
        Some(wet) => wet * WET_GAIN + dry * DRY_GAIN,
        None => dry * DRY_GAIN,
    }
}

/// Fills `output` by draining `ring` one sample per position.
pub fn mix_block<D: Diagnostics>(
    ring: &mut RingBuffer,
    dry: &[f32],
    output: &mut [f32],
    diagnostics: &mut D,
) {
    for (pos, (&dry, out)) in dry.iter().zip(output.iter_mut()).enumerate() {
        let wet = ring.pop();
        if wet.is_some() {
            diagnostics.output_mixed(pos);
        } else {
            diagnostics.output_underrun(pos);
        }
        *out = mix(wet, dry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NoDiagnostics;

    #[test]
    fn test_mix_with_wet() {
        assert_eq!(mix(Some(0.4), 0.8), 0.4 * 0.75 + 0.8 * 0.25);
    }

    #[test]
    fn test_mix_underrun() {
        assert_eq!(mix(None, 0.8), 0.8 * 0.25);
    }

    #[test]
    fn test_mix_block_drains_then_falls_back() {
        let mut ring = RingBuffer::new(8);
        ring.push(1.0);
        ring.push(-1.0);
        let dry = [0.4, 0.4, 0.4];
        let mut out = [0.0; 3];
        mix_block(&mut ring, &dry, &mut out, &mut NoDiagnostics);
        assert_eq!(out, [0.75 + 0.4 * 0.25, -0.75 + 0.4 * 0.25, 0.4 * 0.25]);
        assert!(ring.is_empty());
    }
}
