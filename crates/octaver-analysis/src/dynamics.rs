//! Level measurement.

use octaver_core::linear_to_db;

/// RMS level in linear scale.
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = signal.iter().map(|&x| x * x).sum();
    (sum_sq / signal.len() as f32).sqrt()
}

/// RMS level in dB, `-120.0` for silence.
pub fn rms_db(signal: &[f32]) -> f32 {
    linear_to_db(rms(signal))
}

/// Largest absolute sample value. NaN samples are ignored.
pub fn peak(signal: &[f32]) -> f32 {
    signal
        .iter()
        .map(|x| x.abs())
        .filter(|x| !x.is_nan())
        .fold(0.0, f32::max)
}

/// Peak level in dB, `-120.0` for silence.
pub fn peak_db(signal: &[f32]) -> f32 {
    linear_to_db(peak(signal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rms_constant() {
        assert!((rms(&[0.5; 100]) - 0.5).abs() < 1e-6);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[0.1, -0.8, 0.3]), 0.8);
        assert_eq!(peak(&[f32::NAN, 0.2]), 0.2);
        assert_eq!(peak(&[]), 0.0);
    }

    #[test]
    fn test_db_floor() {
        assert_eq!(rms_db(&[0.0; 16]), -120.0);
        assert_eq!(peak_db(&[]), -120.0);
        assert!(peak_db(&[1.0]).abs() < 1e-4);
    }
}
