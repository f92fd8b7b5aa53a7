//! Zero-crossing measurements.
//!
//! A crossing is a transition between the `< 0` and `>= 0` halves of the
//! signal, the same partition the octaver's edge detector uses. Zero counts
//! as positive.

/// Count transitions between negative and non-negative samples.
///
/// NaN samples are skipped and do not break a run.
pub fn count_sign_changes(signal: &[f32]) -> usize {
    let mut changes = 0;
    let mut last: Option<bool> = None;

    for &x in signal.iter().filter(|x| !x.is_nan()) {
        let negative = x < 0.0;
        if last.is_some_and(|prev| prev != negative) {
            changes += 1;
        }
        last = Some(negative);
    }

    changes
}

/// Zero crossings per second.
///
/// Returns `0.0` for an empty signal or a non-positive sample rate.
pub fn zero_crossing_rate(signal: &[f32], sample_rate: f32) -> f32 {
    if signal.is_empty() || sample_rate <= 0.0 {
        return 0.0;
    }
    let duration_secs = signal.len() as f32 / sample_rate;
    count_sign_changes(signal) as f32 / duration_secs
}

/// Fundamental estimate for a periodic signal with two crossings per cycle.
///
/// Adequate for sines and the octaver's output; harmonically rich material
/// overestimates.
pub fn estimate_frequency(signal: &[f32], sample_rate: f32) -> f32 {
    zero_crossing_rate(signal, sample_rate) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_square() {
        let square = [1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0];
        assert_eq!(count_sign_changes(&square), 3);
    }

    #[test]
    fn test_zero_is_positive() {
        assert_eq!(count_sign_changes(&[0.0, 0.5, 0.0]), 0);
        assert_eq!(count_sign_changes(&[-0.5, 0.0]), 1);
    }

    #[test]
    fn test_nan_skipped() {
        assert_eq!(count_sign_changes(&[1.0, f32::NAN, -1.0]), 1);
        assert_eq!(count_sign_changes(&[f32::NAN, f32::NAN]), 0);
    }

    #[test]
    fn test_rate_edge_cases() {
        assert_eq!(zero_crossing_rate(&[], 48000.0), 0.0);
        assert_eq!(zero_crossing_rate(&[1.0, -1.0], 0.0), 0.0);
    }

    #[test]
    fn test_rate_and_frequency() {
        // 4 samples at 4 Hz is one second; alternating gives 3 crossings.
        let signal = [1.0, -1.0, 1.0, -1.0];
        assert_eq!(zero_crossing_rate(&signal, 4.0), 3.0);
        assert_eq!(estimate_frequency(&signal, 4.0), 1.5);
    }
}
